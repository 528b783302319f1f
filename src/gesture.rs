//! Gesture session state carried between pointer events.
//!
//! `GestureState` is the whole session: created at pointer-down, advanced on
//! every pointer-move, consumed at pointer-up. Each active variant carries
//! all context the engine needs — draw anchor, drag target, provisional
//! pill, movement flag — so nothing about a gesture lives in hidden mutable
//! fields outside the enum.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::geometry::Point;
use crate::registry::{Pill, ShapeId};

/// The active gesture, if any.
///
/// The click-vs-drag tie-break lives here: a pointer-up while no movement
/// has been recorded (`PendingDraw`, or `Dragging` with `moved == false`) is
/// a click and triggers the split pass, regardless of what was under the
/// initial pointer-down.
#[derive(Debug, Clone)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// Pointer went down on empty surface and hasn't moved yet. The first
    /// move turns this into `Drawing`.
    PendingDraw {
        /// Where the pointer went down; the fixed corner of a future draw.
        anchor: Point,
    },
    /// A provisional pill is being sized between `anchor` and the pointer.
    Drawing {
        /// The fixed corner the rectangle is spanned from.
        anchor: Point,
        /// The uncommitted pill; appended to the registry on release.
        provisional: Pill,
    },
    /// An existing pill is being moved across the surface.
    Dragging {
        /// Target pill, already brought to front at pointer-down.
        id: ShapeId,
        /// Pointer position at the previous event; deltas are incremental,
        /// not cumulative from the original down point.
        last: Point,
        /// Whether any movement has occurred since pointer-down.
        moved: bool,
    },
}

impl GestureState {
    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}
