//! Shape model and registry: pills, corner radii, stacking order.
//!
//! This module defines the core data types that describe what is on the
//! surface (`Pill`, `CornerRadii`) and the runtime store that owns all live
//! pills (`ShapeRegistry`). The registry keeps pills in insertion order —
//! the order the split pass relies on — and carries the process-wide
//! high-water stack counter that seeds both new-pill and bring-to-front
//! assignments, so paint order and "last touched wins" stay consistent.
//!
//! Data flows into this layer from the gesture engine (mutations) and from
//! host snapshot loads. The renderer reads `sorted_pills` for draw order.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{self, Point};

/// Unique identifier for a pill.
pub type ShapeId = Uuid;

/// Per-corner rounding radii, in surface units.
///
/// A freshly drawn pill has all four corners equal; split fragments carry
/// 0.0 on every corner introduced by a cut edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    /// Radius of the top-left corner.
    pub top_left: f64,
    /// Radius of the top-right corner.
    pub top_right: f64,
    /// Radius of the bottom-left corner.
    pub bottom_left: f64,
    /// Radius of the bottom-right corner.
    pub bottom_right: f64,
}

impl CornerRadii {
    /// All four corners set to the same radius.
    #[must_use]
    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }
}

/// A rounded rectangle on the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pill {
    /// Unique identifier, assigned at creation and never reused.
    pub id: ShapeId,
    /// Left edge of the bounding box in surface coordinates.
    pub x: f64,
    /// Top edge of the bounding box in surface coordinates.
    pub y: f64,
    /// Width of the bounding box; at rest always ≥ the split floor.
    pub width: f64,
    /// Height of the bounding box; at rest always ≥ the split floor.
    pub height: f64,
    /// CSS fill color, fixed at creation and inherited by split offspring.
    pub color: String,
    /// Stacking order; higher values paint on top and win hit tests.
    pub stack_order: i64,
    /// Per-corner rounding radii.
    pub radii: CornerRadii,
}

impl Pill {
    /// Derive a split fragment occupying part of this pill's bounding box.
    ///
    /// The fragment inherits color and stack order unchanged and receives a
    /// fresh id.
    #[must_use]
    pub fn fragment(&self, x: f64, y: f64, width: f64, height: f64, radii: CornerRadii) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width,
            height,
            color: self.color.clone(),
            stack_order: self.stack_order,
            radii,
        }
    }
}

/// Insertion-ordered store of pills plus the high-water stack counter.
///
/// The counter is monotonic for the life of the registry and is never reset;
/// `replace_all` only ever raises it to cover incoming stack orders.
pub struct ShapeRegistry {
    pills: Vec<Pill>,
    top_stack: i64,
}

impl ShapeRegistry {
    /// Create an empty registry. The first stack order handed out is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { pills: Vec::new(), top_stack: 0 }
    }

    /// Append a pill in insertion order.
    pub fn add(&mut self, pill: Pill) {
        self.pills.push(pill);
    }

    /// Remove and return every pill, preserving insertion order. The stack
    /// counter is untouched.
    pub fn take_pills(&mut self) -> Vec<Pill> {
        std::mem::take(&mut self.pills)
    }

    /// Replace the whole collection. The stack counter is raised to cover
    /// the highest incoming stack order so future assignments stay on top.
    pub fn replace_all(&mut self, pills: Vec<Pill>) {
        let highest = pills.iter().map(|p| p.stack_order).max().unwrap_or(0);
        self.top_stack = self.top_stack.max(highest);
        self.pills = pills;
    }

    /// Increment and return the high-water stack counter.
    pub fn next_stack_order(&mut self) -> i64 {
        self.top_stack += 1;
        self.top_stack
    }

    /// Assign the next stack order to the named pill and return it, or
    /// `None` if no such pill exists. The counter is only consumed on a hit.
    pub fn bring_to_front(&mut self, id: &ShapeId) -> Option<i64> {
        let idx = self.pills.iter().position(|p| &p.id == id)?;
        let order = self.next_stack_order();
        self.pills[idx].stack_order = order;
        Some(order)
    }

    /// Topmost pill whose bounding box contains `point`, if any. Topmost
    /// means maximum stack order; orders are unique once assigned, so ties
    /// cannot occur.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&Pill> {
        self.pills
            .iter()
            .filter(|p| geometry::intersects(p, point))
            .max_by_key(|p| p.stack_order)
    }

    /// Translate a pill's position by a delta. Returns false if the pill
    /// doesn't exist.
    pub fn translate(&mut self, id: &ShapeId, dx: f64, dy: f64) -> bool {
        let Some(pill) = self.pills.iter_mut().find(|p| &p.id == id) else {
            return false;
        };
        pill.x += dx;
        pill.y += dy;
        true
    }

    /// Return a reference to a pill by id.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Pill> {
        self.pills.iter().find(|p| &p.id == id)
    }

    /// All pills in insertion order.
    #[must_use]
    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    /// All pills sorted ascending by stack order for draw order.
    #[must_use]
    pub fn sorted_pills(&self) -> Vec<&Pill> {
        let mut pills: Vec<&Pill> = self.pills.iter().collect();
        pills.sort_by_key(|p| p.stack_order);
        pills
    }

    /// Number of pills currently in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pills.len()
    }

    /// Returns `true` if the registry contains no pills.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
