use countdown_core::{Point, Rgba};
use eframe::egui;

/// Convert a core color into an egui color
pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Convert a widget-local point into screen coordinates inside `rect`
pub fn to_pos2(rect: egui::Rect, point: Point) -> egui::Pos2 {
    rect.min + egui::vec2(point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_map_channel_for_channel() {
        assert_eq!(to_color32(Rgba::WHITE), egui::Color32::WHITE);
        assert_eq!(to_color32(Rgba::BLUE), egui::Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_points_are_offset_by_rect_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0));
        assert_eq!(to_pos2(rect, Point::new(100.0, 50.0)), egui::pos2(110.0, 70.0));
    }
}
