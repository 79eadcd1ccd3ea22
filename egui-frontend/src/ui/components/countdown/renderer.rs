//! # Countdown Renderer
//!
//! Paints one frame of the countdown using egui's painting primitives. The
//! layout comes from `CountdownGeometry`; this module only maps it to screen
//! space and issues paint calls, in back-to-front order:
//!
//! 1. filled disk (`circle_color`)
//! 2. background ring (`secondary_color`)
//! 3. round-capped progress arc (`primary_color`)
//! 4. remaining seconds label (`font_color`)

use countdown_core::{CountdownConfig, CountdownGeometry, CountdownState};
use eframe::egui;

use crate::ui::mappers::{to_color32, to_pos2};

/// Horizontal offset of the second label pass that thickens the digits
const FAKE_BOLD_OFFSET: f32 = 0.6;

/// Paint the countdown into `rect`
pub fn paint_countdown(
    painter: &egui::Painter,
    rect: egui::Rect,
    state: &CountdownState,
    config: &CountdownConfig,
) {
    let geometry = CountdownGeometry::compute(rect.width(), rect.height(), config.font_size_f32());
    if geometry.diameter <= 0.0 {
        return;
    }
    let center = to_pos2(rect, geometry.center);

    painter.circle_filled(center, geometry.disk_radius, to_color32(config.circle_color));

    painter.circle_stroke(
        center,
        geometry.ring_radius,
        egui::Stroke::new(geometry.thickness, to_color32(config.secondary_color)),
    );

    draw_progress_arc(
        painter,
        rect,
        &geometry,
        state.sweep_angle_degrees(),
        to_color32(config.primary_color),
    );

    draw_label(painter, rect, &geometry, state.remaining_seconds(), config);
}

/// Draw the arc as a polyline with filled circles standing in for round caps
fn draw_progress_arc(
    painter: &egui::Painter,
    rect: egui::Rect,
    geometry: &CountdownGeometry,
    sweep_degrees: f32,
    color: egui::Color32,
) {
    let points: Vec<egui::Pos2> = geometry
        .arc_points(sweep_degrees)
        .into_iter()
        .map(|point| to_pos2(rect, point))
        .collect();

    if points.len() < 2 {
        return;
    }

    painter.add(egui::Shape::line(points, egui::Stroke::new(geometry.thickness, color)));

    if let Some((start, end)) = geometry.arc_endpoints(sweep_degrees) {
        let cap_radius = geometry.thickness / 2.0;
        painter.circle_filled(to_pos2(rect, start), cap_radius, color);
        painter.circle_filled(to_pos2(rect, end), cap_radius, color);
    }
}

fn draw_label(
    painter: &egui::Painter,
    rect: egui::Rect,
    geometry: &CountdownGeometry,
    remaining_seconds: u32,
    config: &CountdownConfig,
) {
    let anchor = to_pos2(rect, geometry.label_anchor);
    let font = egui::FontId::new(config.font_size_f32(), egui::FontFamily::Proportional);
    let color = to_color32(config.font_color);
    let text = remaining_seconds.to_string();

    // The default egui fonts ship without a bold face
    for offset in [0.0, FAKE_BOLD_OFFSET] {
        painter.text(
            anchor + egui::vec2(offset, 0.0),
            egui::Align2::CENTER_BOTTOM,
            &text,
            font.clone(),
            color,
        );
    }
}
