//! Document model: shapes and the ordered store of committed shapes.
//!
//! A [`Shape`] is created provisionally by the input engine on pointer-down,
//! resized while the pointer drags, and appended to the [`ShapeStore`] on
//! pointer-up. Once committed a shape is never edited; the only removals are
//! the eraser (one shape at a time) and a full board reset.
//!
//! Insertion order is significant: the renderer paints in that order, and the
//! eraser removes the earliest shape under the cursor.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Session-unique shape identifier, allocated from a monotonically increasing counter.
pub type ShapeId = u64;

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle spanning start to start + (width, height).
    Rect,
    /// Circle centered in the drag box with radius of the larger half-extent.
    Circle,
    /// Straight line from start to start + (width, height).
    Line,
    /// Line from start to end with a two-barb arrowhead at the end.
    Arrow,
    /// Text drawn at the start point.
    Text,
    /// Provisional eraser stroke. Never committed, never drawn.
    Eraser,
}

/// A shape as dragged by the user and stored in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub id: ShapeId,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Drag anchor in logical coordinates.
    pub start_x: f64,
    pub start_y: f64,
    /// Last pointer position in logical coordinates.
    pub end_x: f64,
    pub end_y: f64,
    /// Signed delta from the start point; negative when dragged left.
    pub width: f64,
    /// Signed delta from the start point; negative when dragged up.
    pub height: f64,
    pub text: String,
}

impl Shape {
    /// Start a provisional shape anchored at `at`, with the end point nudged by `epsilon`.
    #[must_use]
    pub fn provisional(id: ShapeId, kind: ShapeKind, at: Point, epsilon: f64, text: String) -> Self {
        Self {
            id,
            kind,
            start_x: at.x,
            start_y: at.y,
            end_x: at.x + epsilon,
            end_y: at.y + epsilon,
            width: 0.0,
            height: 0.0,
            text,
        }
    }

    /// Move the free end of the shape to `to`, updating the signed extents.
    pub fn drag_to(&mut self, to: Point) {
        self.end_x = to.x;
        self.end_y = to.y;
        self.width = to.x - self.start_x;
        self.height = to.y - self.start_y;
    }

    /// The drag anchor.
    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// The point reached by applying the signed extents to the start point.
    #[must_use]
    pub fn far_corner(&self) -> Point {
        Point::new(self.start_x + self.width, self.start_y + self.height)
    }
}

/// Ordered in-memory store of committed shapes.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next session-unique id. Ids are never reused, even after [`Self::clear`].
    pub fn allocate_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a committed shape at the end of the paint order.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove the shape at `index`, returning it if the index was in range.
    pub fn remove_at(&mut self, index: usize) -> Option<Shape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// All committed shapes in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    /// Drop every committed shape. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Number of committed shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if no shape has been committed (or all were removed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
