#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::convert::Infallible;

use super::*;
use crate::camera::Point;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
enum Op {
    ResetTransform,
    ClearRect(f64, f64, f64, f64),
    Translate(f64, f64),
    Scale(f64, f64),
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    Font(String),
    StrokeRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc(f64, f64, f64, f64, f64),
    Stroke,
    FillText(String, f64, f64),
}

#[derive(Default)]
struct RecordingSurface {
    ops: RefCell<Vec<Op>>,
}

impl RecordingSurface {
    fn push(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }

    fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    /// Recorded ops with the per-shape style setup stripped out.
    fn geometry(&self) -> Vec<Op> {
        self.ops()
            .into_iter()
            .filter(|op| !matches!(op, Op::StrokeStyle(_) | Op::LineWidth(_) | Op::FillStyle(_) | Op::Font(_)))
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn reset_transform(&self) -> Result<(), Infallible> {
        self.push(Op::ResetTransform);
        Ok(())
    }
    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        self.push(Op::ClearRect(x, y, w, h));
    }
    fn translate(&self, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(Op::Translate(x, y));
        Ok(())
    }
    fn scale(&self, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(Op::Scale(x, y));
        Ok(())
    }
    fn set_stroke_style(&self, color: &str) {
        self.push(Op::StrokeStyle(color.into()));
    }
    fn set_fill_style(&self, color: &str) {
        self.push(Op::FillStyle(color.into()));
    }
    fn set_line_width(&self, width: f64) {
        self.push(Op::LineWidth(width));
    }
    fn set_font(&self, font: &str) {
        self.push(Op::Font(font.into()));
    }
    fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        self.push(Op::StrokeRect(x, y, w, h));
    }
    fn begin_path(&self) {
        self.push(Op::BeginPath);
    }
    fn move_to(&self, x: f64, y: f64) {
        self.push(Op::MoveTo(x, y));
    }
    fn line_to(&self, x: f64, y: f64) {
        self.push(Op::LineTo(x, y));
    }
    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Infallible> {
        self.push(Op::Arc(x, y, radius, start, end));
        Ok(())
    }
    fn stroke(&self) {
        self.push(Op::Stroke);
    }
    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), Infallible> {
        self.push(Op::FillText(text.into(), x, y));
        Ok(())
    }
}

fn dragged(id: u64, kind: ShapeKind, from: (f64, f64), to: (f64, f64)) -> Shape {
    let mut shape = Shape::provisional(id, kind, Point::new(from.0, from.1), 5.0, "note".into());
    shape.drag_to(Point::new(to.0, to.1));
    shape
}

fn render(shapes: &[Shape], provisional: Option<&Shape>, view: &ViewState) -> RecordingSurface {
    let surface = RecordingSurface::default();
    let Ok(()) = draw(&surface, view, shapes, provisional, 800.0, 600.0);
    surface
}

// =============================================================
// Frame setup
// =============================================================

#[test]
fn frame_starts_with_clear_and_view_transform() {
    let view = ViewState { scale: 2.0, offset_x: 30.0, offset_y: -12.0 };
    let surface = render(&[], None, &view);
    assert_eq!(
        surface.ops(),
        vec![
            Op::ResetTransform,
            Op::ClearRect(0.0, 0.0, 800.0, 600.0),
            Op::Translate(30.0, -12.0),
            Op::Scale(2.0, 2.0),
        ]
    );
}

#[test]
fn every_shape_uses_black_two_unit_stroke() {
    let shapes = [dragged(0, ShapeKind::Rect, (0.0, 0.0), (10.0, 10.0))];
    let surface = render(&shapes, None, &ViewState::default());
    let ops = surface.ops();
    assert!(ops.contains(&Op::StrokeStyle("black".into())));
    assert!(ops.contains(&Op::LineWidth(2.0)));
}

// =============================================================
// Per-kind output
// =============================================================

#[test]
fn rect_strokes_signed_extents() {
    let shapes = [dragged(0, ShapeKind::Rect, (50.0, 40.0), (10.0, 10.0))];
    let surface = render(&shapes, None, &ViewState::default());
    assert_eq!(surface.geometry()[4..], [Op::StrokeRect(50.0, 40.0, -40.0, -30.0)]);
}

#[test]
fn circle_uses_hit_test_geometry() {
    let shapes = [dragged(0, ShapeKind::Circle, (0.0, 0.0), (40.0, 10.0))];
    let surface = render(&shapes, None, &ViewState::default());
    assert_eq!(
        surface.geometry()[4..],
        [Op::BeginPath, Op::Arc(20.0, 5.0, 20.0, 0.0, 2.0 * PI), Op::Stroke]
    );
}

#[test]
fn line_runs_from_start_to_far_corner() {
    let shapes = [dragged(0, ShapeKind::Line, (1.0, 2.0), (11.0, -8.0))];
    let surface = render(&shapes, None, &ViewState::default());
    assert_eq!(
        surface.geometry()[4..],
        [Op::BeginPath, Op::MoveTo(1.0, 2.0), Op::LineTo(11.0, -8.0), Op::Stroke]
    );
}

#[test]
fn arrow_draws_shaft_and_two_barbs() {
    let shapes = [dragged(0, ShapeKind::Arrow, (0.0, 0.0), (100.0, 0.0))];
    let surface = render(&shapes, None, &ViewState::default());
    let ops = surface.geometry()[4..].to_vec();
    assert_eq!(ops.len(), 7);
    assert_eq!(ops[0], Op::BeginPath);
    assert_eq!(ops[1], Op::MoveTo(0.0, 0.0));
    assert_eq!(ops[2], Op::LineTo(100.0, 0.0));
    assert_eq!(ops[4], Op::MoveTo(100.0, 0.0));
    assert_eq!(ops[6], Op::Stroke);

    // Pointing along +x, the barbs sit 10 units back at ±30°.
    let barb_dx = 10.0 * (PI / 6.0).cos();
    let barb_dy = 10.0 * (PI / 6.0).sin();
    let (Op::LineTo(x1, y1), Op::LineTo(x2, y2)) = (&ops[3], &ops[5]) else {
        panic!("expected barb segments, got {ops:?}");
    };
    assert!((x1 - (100.0 - barb_dx)).abs() < 1e-9);
    assert!((y1 - barb_dy).abs() < 1e-9);
    assert!((x2 - (100.0 - barb_dx)).abs() < 1e-9);
    assert!((y2 + barb_dy).abs() < 1e-9);
}

#[test]
fn text_fills_at_start_with_fixed_font() {
    let shapes = [dragged(0, ShapeKind::Text, (12.0, 34.0), (80.0, 60.0))];
    let surface = render(&shapes, None, &ViewState::default());
    let ops = surface.ops();
    assert!(ops.contains(&Op::Font("20px Arial".into())));
    assert!(ops.contains(&Op::FillStyle("black".into())));
    assert_eq!(ops.last(), Some(&Op::FillText("note".into(), 12.0, 34.0)));
}

#[test]
fn eraser_draws_nothing() {
    let eraser = dragged(0, ShapeKind::Eraser, (0.0, 0.0), (50.0, 50.0));
    let surface = render(&[], Some(&eraser), &ViewState::default());
    assert_eq!(surface.geometry().len(), 4);
}

// =============================================================
// Paint order
// =============================================================

#[test]
fn committed_shapes_paint_in_order_then_provisional() {
    let shapes = [
        dragged(0, ShapeKind::Rect, (0.0, 0.0), (1.0, 1.0)),
        dragged(1, ShapeKind::Rect, (2.0, 2.0), (3.0, 3.0)),
    ];
    let provisional = dragged(2, ShapeKind::Rect, (4.0, 4.0), (5.0, 5.0));
    let surface = render(&shapes, Some(&provisional), &ViewState::default());
    let rects: Vec<Op> = surface
        .geometry()
        .into_iter()
        .filter(|op| matches!(op, Op::StrokeRect(..)))
        .collect();
    assert_eq!(
        rects,
        [
            Op::StrokeRect(0.0, 0.0, 1.0, 1.0),
            Op::StrokeRect(2.0, 2.0, 1.0, 1.0),
            Op::StrokeRect(4.0, 4.0, 1.0, 1.0),
        ]
    );
}
