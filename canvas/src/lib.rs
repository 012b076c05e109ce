//! Drawing and input engine for the sketchboard whiteboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interaction core of the board: translating raw pointer and wheel events into
//! shape mutations, maintaining the pan/zoom view transform, hit-testing
//! committed shapes for the eraser, and redrawing the scene. The host crate is
//! responsible only for wiring DOM events to the engine and applying the
//! resulting [`engine::Action`]s (cursor changes, redraw requests).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Shape types and the ordered [`doc::ShapeStore`] |
//! | [`camera`] | View transform: pan/zoom and coordinate conversions |
//! | [`input`] | Tools, cursors, text sources and the gesture state machine |
//! | [`hit`] | Point-in-shape tests used by the eraser |
//! | [`render`] | Scene rendering onto any [`render::Surface`] |
//! | [`consts`] | Shared numeric constants (zoom limits, tolerances, etc.) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
