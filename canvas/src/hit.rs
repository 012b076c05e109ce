//! Hit-testing against committed shapes.
//!
//! All tests run in logical coordinates. The rules are deliberately simple:
//! circles use the larger half-extent as radius, and lines and arrows are
//! tested against the infinite line through their two points, not the segment.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::{LINE_HIT_TOLERANCE, TEXT_HIT_PADDING};
use crate::doc::{Shape, ShapeKind};

/// Whether `pt` lies on or inside `shape`.
#[must_use]
pub fn is_point_in_shape(pt: Point, shape: &Shape) -> bool {
    match shape.kind {
        ShapeKind::Rect => in_box(pt, shape, 0.0),
        ShapeKind::Text => in_box(pt, shape, TEXT_HIT_PADDING),
        ShapeKind::Circle => in_circle(pt, shape),
        ShapeKind::Line | ShapeKind::Arrow => near_line(pt, shape),
        ShapeKind::Eraser => false,
    }
}

/// Index of the first shape (in insertion order) containing `pt`.
#[must_use]
pub fn first_hit(shapes: &[Shape], pt: Point) -> Option<usize> {
    shapes.iter().position(|shape| is_point_in_shape(pt, shape))
}

/// Inclusive box test over the signed drag extents, grown by `pad` on each side.
fn in_box(pt: Point, shape: &Shape, pad: f64) -> bool {
    let far = shape.far_corner();
    let min_x = shape.start_x.min(far.x) - pad;
    let max_x = shape.start_x.max(far.x) + pad;
    let min_y = shape.start_y.min(far.y) - pad;
    let max_y = shape.start_y.max(far.y) + pad;
    pt.x >= min_x && pt.x <= max_x && pt.y >= min_y && pt.y <= max_y
}

fn in_circle(pt: Point, shape: &Shape) -> bool {
    let (center, radius) = circle_geometry(shape);
    (pt.x - center.x).hypot(pt.y - center.y) <= radius
}

/// Center and radius of the circle drawn for `shape`. Shared with the renderer.
#[must_use]
pub fn circle_geometry(shape: &Shape) -> (Point, f64) {
    let center = Point::new(shape.start_x + shape.width / 2.0, shape.start_y + shape.height / 2.0);
    let radius = (shape.width / 2.0).abs().max((shape.height / 2.0).abs());
    (center, radius)
}

/// Perpendicular distance to the infinite line through start and the far corner.
///
/// A zero-length line has no direction and never hits.
fn near_line(pt: Point, shape: &Shape) -> bool {
    let a = shape.start();
    let b = shape.far_corner();
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = dx.hypot(dy);
    if length == 0.0 {
        return false;
    }
    let numerator = (dy * pt.x - dx * pt.y + b.x * a.y - b.y * a.x).abs();
    numerator / length <= LINE_HIT_TOLERANCE
}
