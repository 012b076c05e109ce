//! Input model: tools, cursors, the text collaborator, and the gesture state machine.
//!
//! `Tool` captures the user's intent at the time of a pointer event. `InputState`
//! is the active gesture being tracked between pointer-down and pointer-up,
//! carrying the context needed to compute incremental updates and emit final
//! document mutations on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;
use std::str::FromStr;

use crate::camera::Point;
use crate::doc::{Shape, ShapeKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Draw a rectangle (default).
    #[default]
    Rect,
    /// Draw a circle.
    Circle,
    /// Draw a straight line.
    Line,
    /// Draw an arrow.
    Arrow,
    /// Place text read from the text input.
    Text,
    /// Delete the first shape under the release point.
    Eraser,
    /// Drag the view.
    Pan,
    /// Zoom the view with the wheel.
    Zoom,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 8] = [
        Tool::Rect,
        Tool::Circle,
        Tool::Line,
        Tool::Arrow,
        Tool::Text,
        Tool::Eraser,
        Tool::Pan,
        Tool::Zoom,
    ];

    /// The shape kind a pointer drag creates with this tool, if any.
    ///
    /// Pan and zoom are view tools and never create a shape.
    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Rect => Some(ShapeKind::Rect),
            Self::Circle => Some(ShapeKind::Circle),
            Self::Line => Some(ShapeKind::Line),
            Self::Arrow => Some(ShapeKind::Arrow),
            Self::Text => Some(ShapeKind::Text),
            Self::Eraser => Some(ShapeKind::Eraser),
            Self::Pan | Self::Zoom => None,
        }
    }

    /// Resting cursor while this tool is active.
    #[must_use]
    pub fn cursor(self) -> Cursor {
        match self {
            Self::Rect | Self::Circle | Self::Line | Self::Arrow => Cursor::Crosshair,
            Self::Text => Cursor::Text,
            Self::Eraser => Cursor::Default,
            Self::Pan => Cursor::Grab,
            Self::Zoom => Cursor::ZoomIn,
        }
    }

    /// Stable lowercase name, as used by toolbar `data-tool` attributes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::Text => "text",
            Self::Eraser => "eraser",
            Self::Pan => "pan",
            Self::Zoom => "zoom",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by [`Tool::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0:?}")]
pub struct ToolParseError(pub String);

impl FromStr for Tool {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| ToolParseError(s.to_owned()))
    }
}

/// CSS cursor shown over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Crosshair,
    Text,
    Grab,
    Grabbing,
    ZoomIn,
    ZoomOut,
}

impl Cursor {
    /// The CSS `cursor` property value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Crosshair => "crosshair",
            Self::Text => "text",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
        }
    }
}

/// Source of the text placed by text shapes.
///
/// The engine pulls the current value whenever a shape is created, dragged or
/// committed; nothing is pushed into it.
pub trait TextSource {
    fn current_text(&self) -> String;
}

impl TextSource for str {
    fn current_text(&self) -> String {
        self.to_owned()
    }
}

impl TextSource for web_sys::HtmlTextAreaElement {
    fn current_text(&self) -> String {
        self.value()
    }
}

/// Gesture state tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging out a new shape (or an eraser stroke).
    Drawing {
        /// The provisional shape; committed or discarded on release.
        shape: Shape,
    },
    /// The user is panning the view.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute the pan delta.
        last_screen: Point,
    },
}

impl InputState {
    /// The provisional shape being drawn, if any.
    #[must_use]
    pub fn provisional(&self) -> Option<&Shape> {
        match self {
            Self::Drawing { shape } => Some(shape),
            _ => None,
        }
    }
}
