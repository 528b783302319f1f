//! Core engine for an interactive pill-canvas tool.
//!
//! Users draw, drag, and split rounded rectangular shapes ("pills") with
//! mouse gestures on a fixed-size surface. This crate owns everything except
//! pixels: it turns a stream of raw pointer events into registry mutations,
//! decides whether a gesture is drawing a new pill, dragging an existing one,
//! or requesting a split of every pill along a crosshair line, and exposes a
//! read-only snapshot for a host view layer to paint. Translating device or
//! window coordinates into surface-local coordinates — and all rendering —
//! is the host's concern.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EngineCore`]: event handlers, actions, snapshot |
//! | [`registry`] | Pill data model and the insertion-ordered shape registry |
//! | [`geometry`] | Containment test and the split/placement algorithm |
//! | [`gesture`] | Gesture session state carried between pointer events |
//! | [`color`] | Fixed palette and pluggable color selection for new pills |
//! | [`consts`] | Shared numeric constants (size floors, default radii) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod registry;
