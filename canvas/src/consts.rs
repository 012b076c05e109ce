//! Shared numeric constants for the canvas crate.

use std::f64::consts::PI;

// ── View ────────────────────────────────────────────────────────

/// Smallest allowed view scale.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed view scale.
pub const MAX_SCALE: f64 = 10.0;

/// Scale multiplier for one zoom-in wheel tick.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Scale multiplier for one zoom-out wheel tick.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

// ── Drawing ─────────────────────────────────────────────────────

/// Offset applied to the provisional end point on pointer-down, in logical units,
/// so a click without a drag still previews something.
pub const PROVISIONAL_EPSILON: f64 = 5.0;

/// Stroke width for every shape, in logical units.
pub const STROKE_WIDTH: f64 = 2.0;

/// Stroke and fill color for every shape.
pub const INK_COLOR: &str = "black";

/// Font used for text shapes.
pub const TEXT_FONT: &str = "20px Arial";

/// Text used while dragging a shape when the text input is empty.
pub const TEXT_PLACEHOLDER: &str = "text";

/// Arrowhead barb length in logical units.
pub const ARROW_BARB_LEN: f64 = 10.0;

/// Arrowhead barb angle relative to the shaft (30°).
pub const ARROW_BARB_ANGLE: f64 = PI / 6.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Maximum perpendicular distance from a line or arrow that still counts as a hit.
pub const LINE_HIT_TOLERANCE: f64 = 5.0;

/// Padding added on every side of a text shape's box for hit-testing.
pub const TEXT_HIT_PADDING: f64 = 5.0;
