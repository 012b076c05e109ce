use super::*;

fn dragged(kind: ShapeKind, from: (f64, f64), to: (f64, f64)) -> Shape {
    let mut shape = Shape::provisional(0, kind, Point::new(from.0, from.1), 5.0, String::new());
    shape.drag_to(Point::new(to.0, to.1));
    shape
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_contains_center_in_every_drag_direction() {
    let corners = [((10.0, 10.0), (50.0, 40.0)), ((50.0, 40.0), (10.0, 10.0)), ((50.0, 10.0), (10.0, 40.0)), ((10.0, 40.0), (50.0, 10.0))];
    for (from, to) in corners {
        let shape = dragged(ShapeKind::Rect, from, to);
        assert!(is_point_in_shape(pt(30.0, 25.0), &shape), "center missed for {from:?} -> {to:?}");
    }
}

#[test]
fn rect_bounds_are_inclusive() {
    let shape = dragged(ShapeKind::Rect, (10.0, 10.0), (50.0, 40.0));
    assert!(is_point_in_shape(pt(10.0, 10.0), &shape));
    assert!(is_point_in_shape(pt(50.0, 40.0), &shape));
    assert!(is_point_in_shape(pt(50.0, 25.0), &shape));
}

#[test]
fn rect_outside_misses() {
    let shape = dragged(ShapeKind::Rect, (10.0, 10.0), (50.0, 40.0));
    assert!(!is_point_in_shape(pt(9.9, 20.0), &shape));
    assert!(!is_point_in_shape(pt(30.0, 40.1), &shape));
}

#[test]
fn zero_size_rect_hits_only_its_point() {
    let shape = dragged(ShapeKind::Rect, (5.0, 5.0), (5.0, 5.0));
    assert!(is_point_in_shape(pt(5.0, 5.0), &shape));
    assert!(!is_point_in_shape(pt(5.5, 5.0), &shape));
}

// =============================================================
// Circle
// =============================================================

#[test]
fn circle_uses_larger_half_extent_as_radius() {
    // Box 0..40 x 0..10: center (20, 5), radius 20.
    let shape = dragged(ShapeKind::Circle, (0.0, 0.0), (40.0, 10.0));
    // Well outside the box vertically, but within radius 20 of the center.
    assert!(is_point_in_shape(pt(20.0, 24.0), &shape));
    assert!(!is_point_in_shape(pt(20.0, 25.5), &shape));
}

#[test]
fn circle_negative_extents() {
    let shape = dragged(ShapeKind::Circle, (40.0, 40.0), (0.0, 0.0));
    let (center, radius) = circle_geometry(&shape);
    assert_eq!(center, pt(20.0, 20.0));
    assert!((radius - 20.0).abs() < 1e-12);
    assert!(is_point_in_shape(pt(20.0, 20.0), &shape));
    assert!(is_point_in_shape(pt(20.0, 40.0), &shape));
    assert!(!is_point_in_shape(pt(40.0, 40.0), &shape));
}

// =============================================================
// Line / Arrow
// =============================================================

#[test]
fn line_hits_within_tolerance() {
    let shape = dragged(ShapeKind::Line, (0.0, 0.0), (100.0, 0.0));
    assert!(is_point_in_shape(pt(50.0, 5.0), &shape));
    assert!(is_point_in_shape(pt(50.0, -4.9), &shape));
    assert!(!is_point_in_shape(pt(50.0, 5.1), &shape));
}

#[test]
fn line_test_is_not_bounded_to_segment() {
    let shape = dragged(ShapeKind::Line, (0.0, 0.0), (10.0, 10.0));
    assert!(is_point_in_shape(pt(500.0, 500.0), &shape));
    assert!(is_point_in_shape(pt(-300.0, -301.0), &shape));
}

#[test]
fn arrow_uses_line_rule() {
    let shape = dragged(ShapeKind::Arrow, (0.0, 0.0), (0.0, 100.0));
    assert!(is_point_in_shape(pt(3.0, 250.0), &shape));
    assert!(!is_point_in_shape(pt(6.0, 50.0), &shape));
}

#[test]
fn zero_length_line_never_hits() {
    let shape = dragged(ShapeKind::Line, (10.0, 10.0), (10.0, 10.0));
    assert!(!is_point_in_shape(pt(10.0, 10.0), &shape));
}

// =============================================================
// Text / Eraser
// =============================================================

#[test]
fn text_box_is_padded() {
    let shape = dragged(ShapeKind::Text, (10.0, 10.0), (30.0, 20.0));
    assert!(is_point_in_shape(pt(5.0, 5.0), &shape));
    assert!(is_point_in_shape(pt(35.0, 25.0), &shape));
    assert!(!is_point_in_shape(pt(4.9, 15.0), &shape));
    assert!(!is_point_in_shape(pt(20.0, 25.1), &shape));
}

#[test]
fn eraser_shape_never_hits() {
    let shape = dragged(ShapeKind::Eraser, (0.0, 0.0), (100.0, 100.0));
    assert!(!is_point_in_shape(pt(50.0, 50.0), &shape));
}

// =============================================================
// first_hit
// =============================================================

#[test]
fn first_hit_prefers_lowest_index() {
    let shapes = vec![
        dragged(ShapeKind::Rect, (100.0, 100.0), (120.0, 120.0)),
        dragged(ShapeKind::Rect, (0.0, 0.0), (50.0, 50.0)),
        dragged(ShapeKind::Circle, (0.0, 0.0), (60.0, 60.0)),
    ];
    assert_eq!(first_hit(&shapes, pt(25.0, 25.0)), Some(1));
    assert_eq!(first_hit(&shapes, pt(110.0, 110.0)), Some(0));
    assert_eq!(first_hit(&shapes, pt(500.0, 0.0)), None);
}

#[test]
fn first_hit_empty() {
    assert_eq!(first_hit(&[], pt(0.0, 0.0)), None);
}
