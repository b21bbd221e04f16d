//! Bounding boxes for burned-in primitives, used for damage hints.

use crate::util::{Point, Rect};

/// Half the stroke width plus one pixel for the pixel-centre offset.
fn stroke_padding(thick: f64) -> i32 {
    // `as` saturates, so absurd widths stay finite.
    let padding = (thick / 2.0).ceil() as i32;
    padding.max(1).saturating_add(1)
}

/// Bounds of a straight stroke between two points, expanded to cover the stroke width.
pub fn bounding_box_for_segment(from: Point, to: Point, thick: f64) -> Option<Rect> {
    bounding_box_for_points(&[from, to], thick)
}

/// Bounds covering every point of a path, expanded to cover the stroke width.
pub fn bounding_box_for_points(points: &[Point], thick: f64) -> Option<Rect> {
    let (first, rest) = points.split_first()?;

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for point in rest {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    let padding = stroke_padding(thick);
    ensure_positive_rect(
        min_x.saturating_sub(padding),
        min_y.saturating_sub(padding),
        max_x.saturating_add(padding),
        max_y.saturating_add(padding),
    )
}

/// Bounds of a filled dot of the given diameter.
pub fn bounding_box_for_dot(at: Point, diameter: u32) -> Option<Rect> {
    bounding_box_for_points(&[at], diameter as f64)
}

/// Bounds of text ink given in device units relative to the canvas origin.
pub fn bounding_box_for_extents(x: f64, y: f64, width: f64, height: f64) -> Option<Rect> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    ensure_positive_rect(
        x.floor() as i32,
        y.floor() as i32,
        (x + width).ceil() as i32,
        (y + height).ceil() as i32,
    )
}

fn ensure_positive_rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Rect> {
    let max_x = if min_x == max_x { max_x.saturating_add(1) } else { max_x };
    let max_y = if min_y == max_y { max_y.saturating_add(1) } else { max_y };
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}
