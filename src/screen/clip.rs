//! # Bounds Handling
//!
//! Drawing coordinates are arbitrary `i32` values, but embedded-graphics
//! does its geometry in `i32`/`u32` and overflows well before that range
//! is used up. Requests are brought into a window around the surface before
//! they reach it:
//!
//! - lines are clipped to the surface grown by `LINE_MARGIN`
//! - box corners are clamped just outside the surface, far enough that the
//!   rounded corners stay invisible
//! - circles and text runs that cannot touch the surface are dropped, and
//!   circles above `MAX_RADIUS` are rasterized here, limited to the surface

use embedded_graphics::{prelude::*, primitives::Rectangle};
use libm::round;

/// Largest radius passed to embedded-graphics.
pub const MAX_RADIUS: u32 = 4096;

/// How far beyond the surface edges line endpoints may lie.
const LINE_MARGIN: i64 = 4096;

/// Clip the segment from `start` to `end` to the window around a surface of
/// `size`. `None` when the segment misses the window.
///
/// Endpoints inside the window come back unchanged.
pub fn clip_line(size: Size, start: Point, end: Point) -> Option<(Point, Point)> {
    let (x0, y0) = (start.x as f64, start.y as f64);
    let (dx, dy) = (end.x as f64 - x0, end.y as f64 - y0);
    let min = -LINE_MARGIN as f64;
    let max_x = (size.width as i64 + LINE_MARGIN) as f64;
    let max_y = (size.height as i64 + LINE_MARGIN) as f64;

    // Liang-Barsky: narrow the parameter range [t0, t1] edge by edge.
    let mut t0 = 0.0;
    let mut t1 = 1.0;
    for (p, q) in [(-dx, x0 - min), (dx, max_x - x0), (-dy, y0 - min), (dy, max_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = f64::max(t0, t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = f64::min(t1, t);
        }
    }

    let at = |t: f64| Point::new(round(x0 + t * dx) as i32, round(y0 + t * dy) as i32);
    Some((at(t0), at(t1)))
}

/// Box with corners `corner1` and `corner2`, clamped around a surface of
/// `size`.
///
/// The margin is twice the corner radius, so clamped sides and their
/// corners stay off the surface and the visible part is unchanged.
pub fn clamp_box(size: Size, corner1: Point, corner2: Point, radius: u32) -> Rectangle {
    let margin = 2 * radius.min(MAX_RADIUS) as i32 + 1;
    let max_x = size.width.min(i32::MAX as u32 / 2) as i32 - 1 + margin;
    let max_y = size.height.min(i32::MAX as u32 / 2) as i32 - 1 + margin;
    let clamp = |p: Point| Point::new(p.x.clamp(-margin, max_x), p.y.clamp(-margin, max_y));

    Rectangle::with_corners(clamp(corner1), clamp(corner2))
}

/// Whether a circle of `radius` around `center` reaches into a surface of
/// `size`.
pub fn circle_visible(size: Size, center: Point, radius: u32) -> bool {
    let (x, y, r) = (center.x as i64, center.y as i64, radius as i64);
    x + r >= 0 && y + r >= 0 && x - r < size.width as i64 && y - r < size.height as i64
}

/// Surface pixels covered by a circle too large for embedded-graphics.
///
/// Coverage follows embedded-graphics: a pixel is inside when twice its
/// distance to the center is below the diameter. Outlines are the pixels
/// inside the circle but not inside the one a pixel smaller.
pub fn large_circle_points(
    size: Size,
    center: Point,
    radius: u32,
    filled: bool,
) -> impl Iterator<Item = Point> {
    let outer = (2 * radius as i128 + 1).pow(2);
    let inner = (2 * radius as i128 - 1).max(0).pow(2);

    Rectangle::new(Point::zero(), size).points().filter(move |p| {
        let dx = 2 * (center.x as i128 - p.x as i128);
        let dy = 2 * (center.y as i128 - p.y as i128);
        let distance = dx * dx + dy * dy;
        distance < outer && (filled || distance >= inner)
    })
}

/// Whether a text run at `origin`, `width` by `height` pixels, reaches into
/// a surface of `size`.
pub fn text_visible(size: Size, origin: Point, width: u32, height: u32) -> bool {
    let (x, y) = (origin.x as i64, origin.y as i64);
    x + width as i64 > 0 && y + height as i64 > 0 && x < size.width as i64 && y < size.height as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const SIZE: Size = Size::new(40, 30);

    #[test]
    fn test_segment_inside_window_is_unchanged() {
        let start = Point::new(-100, 5);
        let end = Point::new(3000, -2000);
        assert_eq!(clip_line(SIZE, start, end), Some((start, end)));
    }

    #[test]
    fn test_segment_is_cut_at_window_edges() {
        let clipped = clip_line(SIZE, Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
        assert_eq!(clipped, Some((Point::new(-4096, 0), Point::new(4136, 0))));

        let (start, end) = clip_line(SIZE, Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)).unwrap();
        assert_eq!(start, Point::new(-4096, -4096));
        assert_eq!(end, Point::new(4126, 4126));
    }

    #[test]
    fn test_segment_outside_window_is_dropped() {
        assert_eq!(clip_line(SIZE, Point::new(0, -5000), Point::new(100, -6000)), None);
        assert_eq!(clip_line(SIZE, Point::new(i32::MAX, 0), Point::new(i32::MAX, 10)), None);
    }

    #[test]
    fn test_box_corners_clamped_outside_surface() {
        let rect = clamp_box(SIZE, Point::new(i32::MIN, 5), Point::new(i32::MAX, 10), 0);
        assert_eq!(rect, Rectangle::with_corners(Point::new(-1, 5), Point::new(40, 10)));

        let rect = clamp_box(SIZE, Point::new(i32::MIN, i32::MIN), Point::new(2, 2), 3);
        assert_eq!(rect.top_left, Point::new(-7, -7));

        let rect = clamp_box(SIZE, Point::new(0, 0), Point::new(i32::MAX, i32::MAX), u32::MAX);
        assert_eq!(rect.bottom_right(), Some(Point::new(40 + 2 * 4096, 30 + 2 * 4096)));
    }

    #[test]
    fn test_circle_visibility() {
        assert!(circle_visible(SIZE, Point::new(10, 10), 0));
        assert!(circle_visible(SIZE, Point::new(-5, -5), 5));
        assert!(!circle_visible(SIZE, Point::new(-6, 10), 5));
        assert!(!circle_visible(SIZE, Point::new(45, 10), 5));
        assert!(circle_visible(SIZE, Point::new(i32::MIN, i32::MIN), u32::MAX));
        assert!(!circle_visible(SIZE, Point::new(i32::MAX, 0), 1000));
    }

    #[test]
    fn test_large_circle_covers_surface() {
        let filled = large_circle_points(SIZE, Point::new(10, 10), 100_000, true).count();
        assert_eq!(filled, 40 * 30);

        let outline = large_circle_points(SIZE, Point::new(10, 10), 100_000, false).count();
        assert_eq!(outline, 0);
    }

    #[test]
    fn test_large_circle_edge() {
        let center = Point::new(10, 100_010);
        let points: Vec<Point> = large_circle_points(SIZE, center, 100_000, false).collect();
        assert!(points.contains(&Point::new(10, 10)));
        assert!(!points.contains(&Point::new(10, 9)));
        assert!(!points.contains(&Point::new(10, 11)));
    }

    #[test]
    fn test_text_visibility() {
        assert!(text_visible(SIZE, Point::new(0, 0), 6, 12));
        assert!(text_visible(SIZE, Point::new(-5, -11), 6, 12));
        assert!(!text_visible(SIZE, Point::new(-6, 0), 6, 12));
        assert!(!text_visible(SIZE, Point::new(0, -12), 6, 12));
        assert!(!text_visible(SIZE, Point::new(40, 0), 6, 12));
        assert!(!text_visible(SIZE, Point::new(i32::MAX, i32::MIN), u32::MAX, u32::MAX));
    }
}
