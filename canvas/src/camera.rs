#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// View transform for pan/zoom on the board.
///
/// `offset_x` / `offset_y` are in screen pixels.
/// `scale` is a zoom factor (1.0 = no zoom), always within [`MIN_SCALE`, `MAX_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { scale: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl ViewState {
    /// Convert a screen-space point (relative to the surface) to logical coordinates.
    #[must_use]
    pub fn to_logical(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale,
            y: (screen.y - self.offset_y) / self.scale,
        }
    }

    /// Convert a logical point to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, logical: Point) -> Point {
        Point {
            x: logical.x * self.scale + self.offset_x,
            y: logical.y * self.scale + self.offset_y,
        }
    }

    /// Apply one wheel tick anchored at `anchor` (screen space).
    ///
    /// A positive `delta_y` zooms out, anything else zooms in. The logical point
    /// under the anchor stays under the anchor. Returns `true` when the scale grew.
    pub fn zoom_at(&mut self, delta_y: f64, anchor: Point) -> bool {
        let anchor_logical = self.to_logical(anchor);
        let factor = if delta_y > 0.0 { ZOOM_OUT_FACTOR } else { ZOOM_IN_FACTOR };
        let next_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let grew = next_scale > self.scale;

        self.scale = next_scale;
        self.offset_x = anchor.x - anchor_logical.x * next_scale;
        self.offset_y = anchor.y - anchor_logical.y * next_scale;

        let landed = self.to_screen(anchor_logical);
        let magnitude = anchor.x.abs().max(anchor.y.abs()) + self.offset_x.abs().max(self.offset_y.abs());
        let tolerance = 1e-9 * (1.0 + magnitude);
        debug_assert!(
            (landed.x - anchor.x).abs() <= tolerance && (landed.y - anchor.y).abs() <= tolerance,
            "zoom anchor drifted from {anchor:?} to {landed:?}"
        );
        grew
    }

    /// Shift the view by a screen-space delta. The delta is not scaled.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }
}
