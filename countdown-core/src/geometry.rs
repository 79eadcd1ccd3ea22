//! # Countdown Geometry
//!
//! Pure draw-time layout for the countdown widget. Given the widget bounds and
//! font size it works out where the disk, ring, arc and label go, so that a
//! renderer only has to issue paint calls.
//!
//! All coordinates are relative to the widget's top-left corner with y
//! growing downwards; angles are in degrees, 0° pointing right and -90° at
//! 12 o'clock.

/// A point in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where the arc starts: 12 o'clock
pub const ARC_START_DEGREES: f32 = -90.0;

/// Ring thickness as a fraction of the widget width
const THICKNESS_DIVISOR: f32 = 20.0;

/// Roughly how many pixels of arc each polyline segment covers
const PIXELS_PER_SEGMENT: f32 = 3.0;
const MIN_ARC_SEGMENTS: usize = 8;
const MAX_ARC_SEGMENTS: usize = 120;

/// Layout of one countdown frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownGeometry {
    /// Widget width and height
    pub width: f32,
    pub height: f32,
    /// Center shared by disk, ring, arc and label
    pub center: Point,
    /// Smaller of width and height
    pub diameter: f32,
    /// Stroke width of the ring and the arc (width / 20)
    pub thickness: f32,
    /// Radius of the filled background disk
    pub disk_radius: f32,
    /// Radius of the center line of ring and arc strokes
    pub ring_radius: f32,
    /// Anchor for the label baseline, nudged down for optical centering
    pub label_anchor: Point,
}

impl CountdownGeometry {
    /// Compute the layout for a widget of `width` × `height`
    pub fn compute(width: f32, height: f32, font_size: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let diameter = width.min(height);
        // Very wide bounds would otherwise eat the whole disk
        let thickness = (width / THICKNESS_DIVISOR).min(diameter / 2.0);
        let center = Point::new(width / 2.0, height / 2.0);

        Self {
            width,
            height,
            center,
            diameter,
            thickness,
            disk_radius: diameter / 2.0,
            ring_radius: diameter / 2.0 - thickness / 2.0,
            label_anchor: Point::new(center.x, center.y + font_size / 3.0),
        }
    }

    /// Point on the ring's center line at `degrees`
    pub fn point_at(&self, degrees: f32) -> Point {
        let radians = degrees.to_radians();
        Point::new(
            self.center.x + self.ring_radius * radians.cos(),
            self.center.y + self.ring_radius * radians.sin(),
        )
    }

    /// Polyline approximating the progress arc.
    ///
    /// Starts at 12 o'clock and follows `sweep_degrees` (negative sweeps run
    /// counter-clockwise on screen). Returns no points for an empty sweep.
    pub fn arc_points(&self, sweep_degrees: f32) -> Vec<Point> {
        let sweep = sweep_degrees.clamp(-360.0, 360.0);
        if sweep == 0.0 || self.ring_radius <= 0.0 {
            return Vec::new();
        }

        let arc_length = sweep.abs().to_radians() * self.ring_radius;
        let segments = ((arc_length / PIXELS_PER_SEGMENT).ceil() as usize)
            .clamp(MIN_ARC_SEGMENTS, MAX_ARC_SEGMENTS);
        let step = sweep / segments as f32;

        (0..=segments)
            .map(|i| self.point_at(ARC_START_DEGREES + step * i as f32))
            .collect()
    }

    /// Start and end points of the arc, where the round caps go
    pub fn arc_endpoints(&self, sweep_degrees: f32) -> Option<(Point, Point)> {
        if sweep_degrees == 0.0 || self.ring_radius <= 0.0 {
            return None;
        }
        let sweep = sweep_degrees.clamp(-360.0, 360.0);
        Some((
            self.point_at(ARC_START_DEGREES),
            self.point_at(ARC_START_DEGREES + sweep),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
    }

    #[test]
    fn test_wide_bounds_center_on_smaller_dimension() {
        let geometry = CountdownGeometry::compute(200.0, 100.0, 15.0);

        assert_eq!(geometry.thickness, 10.0);
        assert_eq!(geometry.center, Point::new(100.0, 50.0));
        assert_eq!(geometry.diameter, 100.0);
        assert_eq!(geometry.disk_radius, 50.0);
        assert_eq!(geometry.ring_radius, 45.0);
    }

    #[test]
    fn test_tall_bounds_use_width() {
        let geometry = CountdownGeometry::compute(80.0, 300.0, 15.0);

        assert_eq!(geometry.diameter, 80.0);
        assert_eq!(geometry.thickness, 4.0);
        assert_eq!(geometry.center, Point::new(40.0, 150.0));
    }

    #[test]
    fn test_label_is_offset_by_a_third_of_font_size() {
        let geometry = CountdownGeometry::compute(100.0, 100.0, 30.0);
        assert_eq!(geometry.label_anchor, Point::new(50.0, 60.0));
    }

    #[test]
    fn test_arc_starts_at_twelve_o_clock() {
        let geometry = CountdownGeometry::compute(100.0, 100.0, 15.0);
        let points = geometry.arc_points(-90.0);

        let first = points[0];
        assert_close(first.x, 50.0);
        assert_close(first.y, 50.0 - 47.5);

        // -90° sweep ends at 9 o'clock
        let last = points[points.len() - 1];
        assert_close(last.x, 50.0 - 47.5);
        assert_close(last.y, 50.0);
    }

    #[test]
    fn test_arc_points_stay_on_ring() {
        let geometry = CountdownGeometry::compute(200.0, 100.0, 15.0);
        let points = geometry.arc_points(-360.0);

        assert!(points.len() > MIN_ARC_SEGMENTS);
        assert!(points.len() <= MAX_ARC_SEGMENTS + 1);
        for point in points {
            let dx = point.x - geometry.center.x;
            let dy = point.y - geometry.center.y;
            assert_close((dx * dx + dy * dy).sqrt(), geometry.ring_radius);
        }
    }

    #[test]
    fn test_empty_sweep_draws_nothing() {
        let geometry = CountdownGeometry::compute(100.0, 100.0, 15.0);
        assert!(geometry.arc_points(0.0).is_empty());
        assert!(geometry.arc_endpoints(0.0).is_none());

        let collapsed = CountdownGeometry::compute(0.0, 0.0, 15.0);
        assert!(collapsed.arc_points(-180.0).is_empty());
    }

    #[test]
    fn test_thickness_never_exceeds_radius() {
        let geometry = CountdownGeometry::compute(2000.0, 40.0, 15.0);
        assert_eq!(geometry.thickness, 20.0);
        assert_eq!(geometry.ring_radius, 10.0);
    }
}
