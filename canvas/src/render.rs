//! Rendering: draws the full board scene onto a 2D surface.
//!
//! This module receives read-only views of the committed shapes, the
//! provisional shape and the view transform, and produces pixels. It never
//! mutates application state.
//!
//! Drawing goes through the [`Surface`] trait so the scene can be recorded in
//! tests; [`web_sys::CanvasRenderingContext2d`] is the production surface.
//! Fallible surface calls propagate errors via `Result<(), S::Error>`; the
//! top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::ViewState;
use crate::consts::{ARROW_BARB_ANGLE, ARROW_BARB_LEN, INK_COLOR, STROKE_WIDTH, TEXT_FONT};
use crate::doc::{Shape, ShapeKind};
use crate::hit::circle_geometry;

/// The drawing primitives the renderer needs from a 2D surface.
pub trait Surface {
    type Error;

    /// Reset the current transform to identity.
    fn reset_transform(&self) -> Result<(), Self::Error>;
    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn translate(&self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn scale(&self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn set_stroke_style(&self, color: &str);
    fn set_fill_style(&self, color: &str);
    fn set_line_width(&self, width: f64);
    fn set_font(&self, font: &str);
    fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&self);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;
    fn stroke(&self);
    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn reset_transform(&self) -> Result<(), JsValue> {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::translate(self, x, y)
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::scale(self, x, y)
    }

    fn set_stroke_style(&self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_fill_style(&self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_font(&self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)
    }
}

/// Draw the full scene: committed shapes in insertion order, then the provisional shape.
///
/// `viewport_w` and `viewport_h` are the surface size in pixels; the whole area is cleared.
///
/// # Errors
///
/// Returns `Err` if any fallible surface call fails.
pub fn draw<S: Surface + ?Sized>(
    surface: &S,
    view: &ViewState,
    shapes: &[Shape],
    provisional: Option<&Shape>,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), S::Error> {
    surface.reset_transform()?;
    surface.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    surface.translate(view.offset_x, view.offset_y)?;
    surface.scale(view.scale, view.scale)?;

    for shape in shapes.iter().chain(provisional) {
        draw_shape(surface, shape)?;
    }
    Ok(())
}

// =============================================================
// Shape dispatch
// =============================================================

fn draw_shape<S: Surface + ?Sized>(surface: &S, shape: &Shape) -> Result<(), S::Error> {
    surface.set_stroke_style(INK_COLOR);
    surface.set_line_width(STROKE_WIDTH);

    match shape.kind {
        ShapeKind::Rect => {
            surface.stroke_rect(shape.start_x, shape.start_y, shape.width, shape.height);
            Ok(())
        }
        ShapeKind::Circle => draw_circle(surface, shape),
        ShapeKind::Line => {
            let far = shape.far_corner();
            surface.begin_path();
            surface.move_to(shape.start_x, shape.start_y);
            surface.line_to(far.x, far.y);
            surface.stroke();
            Ok(())
        }
        ShapeKind::Arrow => {
            draw_arrow(surface, shape);
            Ok(())
        }
        ShapeKind::Text => draw_text(surface, shape),
        ShapeKind::Eraser => Ok(()),
    }
}

fn draw_circle<S: Surface + ?Sized>(surface: &S, shape: &Shape) -> Result<(), S::Error> {
    let (center, radius) = circle_geometry(shape);
    surface.begin_path();
    surface.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    surface.stroke();
    Ok(())
}

/// Shaft from start to end plus two barbs at the end.
fn draw_arrow<S: Surface + ?Sized>(surface: &S, shape: &Shape) {
    let (tip_x, tip_y) = (shape.end_x, shape.end_y);
    let angle = (tip_y - shape.start_y).atan2(tip_x - shape.start_x);

    surface.begin_path();
    surface.move_to(shape.start_x, shape.start_y);
    surface.line_to(tip_x, tip_y);
    surface.line_to(
        tip_x - ARROW_BARB_LEN * (angle - ARROW_BARB_ANGLE).cos(),
        tip_y - ARROW_BARB_LEN * (angle - ARROW_BARB_ANGLE).sin(),
    );
    surface.move_to(tip_x, tip_y);
    surface.line_to(
        tip_x - ARROW_BARB_LEN * (angle + ARROW_BARB_ANGLE).cos(),
        tip_y - ARROW_BARB_LEN * (angle + ARROW_BARB_ANGLE).sin(),
    );
    surface.stroke();
}

fn draw_text<S: Surface + ?Sized>(surface: &S, shape: &Shape) -> Result<(), S::Error> {
    surface.set_font(TEXT_FONT);
    surface.set_fill_style(INK_COLOR);
    surface.fill_text(&shape.text, shape.start_x, shape.start_y)
}
