use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Point, ViewState};
use crate::consts::{PROVISIONAL_EPSILON, TEXT_PLACEHOLDER};
use crate::doc::{Shape, ShapeKind, ShapeStore};
use crate::hit;
use crate::input::{Cursor, InputState, TextSource, Tool};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The scene changed; redraw.
    RenderNeeded,
    /// Apply this cursor to the board element.
    SetCursor(Cursor),
    /// A shape was appended to the store.
    ShapeCommitted(Shape),
    /// The eraser removed this shape from the store.
    ShapeErased(Shape),
    /// Every committed shape was dropped.
    BoardCleared,
}

/// Core engine state: everything that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Handlers take screen-space points relative to the board's top-left corner.
#[derive(Debug)]
pub struct EngineCore {
    pub store: ShapeStore,
    pub view: ViewState,
    pub tool: Tool,
    pub input: InputState,
    pub cursor: Cursor,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        let tool = Tool::default();
        Self {
            store: ShapeStore::new(),
            view: ViewState::default(),
            tool,
            input: InputState::Idle,
            cursor: tool.cursor(),
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tool / board ---

    /// Switch the active tool, abandoning any gesture in progress.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let had_gesture = !matches!(self.input, InputState::Idle);
        self.input = InputState::Idle;
        self.tool = tool;
        log::debug!("tool set to {tool}");

        let mut actions = vec![self.set_cursor(tool.cursor())];
        if had_gesture {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Drop every committed shape and any gesture in progress.
    ///
    /// The view transform and the id counter are left alone.
    pub fn reset_board(&mut self) -> Vec<Action> {
        let dropped = self.store.len();
        self.store.clear();
        self.input = InputState::Idle;
        log::debug!("board reset, {dropped} shapes dropped");
        vec![self.set_cursor(self.tool.cursor()), Action::BoardCleared, Action::RenderNeeded]
    }

    /// Record the drawing surface size in screen pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        log::debug!("viewport {width}x{height}");
    }

    // --- Pointer input ---

    /// Pointer pressed: start a pan, or start a provisional shape for drawing tools and the eraser.
    pub fn on_pointer_down<T: TextSource + ?Sized>(&mut self, screen: Point, text: &T) -> Vec<Action> {
        if !matches!(self.input, InputState::Idle) {
            return Vec::new();
        }
        if self.tool == Tool::Pan {
            self.input = InputState::Panning { last_screen: screen };
            return vec![self.set_cursor(Cursor::Grabbing)];
        }
        let Some(kind) = self.tool.shape_kind() else {
            return Vec::new();
        };

        let id = self.store.allocate_id();
        let at = self.view.to_logical(screen);
        let shape = Shape::provisional(id, kind, at, PROVISIONAL_EPSILON, text.current_text());
        self.input = InputState::Drawing { shape };
        vec![Action::RenderNeeded]
    }

    /// Pointer moved: resize the provisional shape or pan the view by the step delta.
    pub fn on_pointer_move<T: TextSource + ?Sized>(&mut self, screen: Point, text: &T) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { shape } => {
                shape.drag_to(self.view.to_logical(screen));
                shape.text = text_or_placeholder(text);
                vec![Action::RenderNeeded]
            }
            InputState::Panning { last_screen } => {
                let (dx, dy) = (screen.x - last_screen.x, screen.y - last_screen.y);
                *last_screen = screen;
                self.view.pan_by(dx, dy);
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Pointer released: commit the provisional shape, erase under the pointer, or end a pan.
    pub fn on_pointer_up<T: TextSource + ?Sized>(&mut self, screen: Point, text: &T) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![self.set_cursor(Cursor::Grab)],
            InputState::Drawing { shape } if shape.kind == ShapeKind::Eraser => {
                match self.try_delete_at(self.view.to_logical(screen)) {
                    Some(erased) => vec![Action::ShapeErased(erased), Action::RenderNeeded],
                    None => vec![Action::RenderNeeded],
                }
            }
            InputState::Drawing { mut shape } => {
                // An undragged shape keeps its pointer-down text; the placeholder only comes from a drag.
                let value = text.current_text();
                if !value.is_empty() {
                    shape.text = value;
                }
                log::debug!("committed {:?} #{}", shape.kind, shape.id);
                self.store.append(shape.clone());
                vec![Action::ShapeCommitted(shape), Action::RenderNeeded]
            }
        }
    }

    /// Pointer left the board. Ends a drawing gesture exactly like a release; pans survive.
    pub fn on_pointer_leave<T: TextSource + ?Sized>(&mut self, screen: Point, text: &T) -> Vec<Action> {
        if matches!(self.input, InputState::Drawing { .. }) {
            self.on_pointer_up(screen, text)
        } else {
            Vec::new()
        }
    }

    /// Wheel tick: zoom around the pointer. Ignored unless the zoom tool is active.
    pub fn on_wheel(&mut self, screen: Point, delta_y: f64) -> Vec<Action> {
        if self.tool != Tool::Zoom {
            return Vec::new();
        }
        let grew = self.view.zoom_at(delta_y, screen);
        log::trace!("zoom to {:.3} at ({}, {})", self.view.scale, screen.x, screen.y);
        let cursor = if grew { Cursor::ZoomIn } else { Cursor::ZoomOut };
        vec![self.set_cursor(cursor), Action::RenderNeeded]
    }

    /// Remove the first committed shape (in insertion order) containing `logical`.
    pub fn try_delete_at(&mut self, logical: Point) -> Option<Shape> {
        let index = hit::first_hit(self.store.all(), logical)?;
        let erased = self.store.remove_at(index)?;
        log::debug!("erased {:?} #{}", erased.kind, erased.id);
        Some(erased)
    }

    // --- Queries ---

    /// Committed shapes in paint order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.store.all()
    }

    /// The shape currently being dragged, if any.
    #[must_use]
    pub fn provisional(&self) -> Option<&Shape> {
        self.input.provisional()
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Action {
        self.cursor = cursor;
        Action::SetCursor(cursor)
    }
}

fn text_or_placeholder<T: TextSource + ?Sized>(text: &T) -> String {
    let value = text.current_text();
    if value.is_empty() { TEXT_PLACEHOLDER.to_owned() } else { value }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    // --- Viewport ---

    /// Resize the canvas backing store to the given size and record it in the core.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.core.set_viewport(width, height);
    }

    // --- Delegated input ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn reset_board(&mut self) -> Vec<Action> {
        self.core.reset_board()
    }

    pub fn on_pointer_down<T: TextSource + ?Sized>(&mut self, screen: Point, text: &T) -> Vec<Action> {
        self.core.on_pointer_down(screen, text)
    }

    pub fn on_pointer_move<T: TextSource + ?Sized>(&mut self, screen: Point, text: &T) -> Vec<Action> {
        self.core.on_pointer_move(screen, text)
    }

    pub fn on_pointer_up<T: TextSource + ?Sized>(&mut self, screen: Point, text: &T) -> Vec<Action> {
        self.core.on_pointer_up(screen, text)
    }

    pub fn on_pointer_leave<T: TextSource + ?Sized>(&mut self, screen: Point, text: &T) -> Vec<Action> {
        self.core.on_pointer_leave(screen, text)
    }

    pub fn on_wheel(&mut self, screen: Point, delta_y: f64) -> Vec<Action> {
        self.core.on_wheel(screen, delta_y)
    }

    // --- Render ---

    /// Draw the current state to the canvas. A zero-sized viewport is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let core = &self.core;
        if core.viewport_width <= 0.0 || core.viewport_height <= 0.0 {
            return Ok(());
        }
        render::draw(
            &self.ctx,
            &core.view,
            core.shapes(),
            core.provisional(),
            core.viewport_width,
            core.viewport_height,
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.core.tool
    }
}
