//! Top-level engine: pointer event handling and the render snapshot.
//!
//! `EngineCore` owns all state — the shape registry, the gesture session,
//! the color provider, and the last known pointer position — and is the only
//! entry point for pointer events. Events arrive strictly serially from the
//! host and are fully processed before the next one; nothing here blocks or
//! suspends. Every handler is total: out-of-range coordinates, an empty
//! registry, a vanished drag target, or an unmatched pointer-up all resolve
//! through no-op or fallback paths rather than errors.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;
use uuid::Uuid;

use crate::color::{ColorProvider, RandomPalette};
use crate::consts::{DEFAULT_CORNER_RADIUS, MIN_DRAW_SIZE};
use crate::geometry::{self, Point};
use crate::gesture::GestureState;
use crate::registry::{CornerRadii, Pill, ShapeId, ShapeRegistry};

/// Mutations reported to the host after each event, for hosts that persist
/// or react to changes. A handler that changed nothing returns no actions.
#[derive(Debug, Clone)]
pub enum Action {
    /// A drawn pill was committed to the registry.
    PillCommitted(Pill),
    /// A dragged pill settled at a new position.
    PillMoved {
        /// Id of the pill that moved.
        id: ShapeId,
        /// Final left edge.
        x: f64,
        /// Final top edge.
        y: f64,
    },
    /// A pill was raised to the top of the stacking order.
    BroughtToFront {
        /// Id of the raised pill.
        id: ShapeId,
        /// The stack order it was assigned.
        stack_order: i64,
    },
    /// A click cut the whole registry at a point.
    SplitApplied {
        /// How many pills were in the registry before the cut.
        parents: usize,
        /// How many pills the registry holds after the cut.
        fragments: usize,
    },
    /// Visible state changed; the host should repaint.
    RenderNeeded,
}

/// Read-only render state exposed after each event.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Committed pills in ascending stack order; paint bottom-up.
    pub pills: Vec<Pill>,
    /// The uncommitted pill being sized, if a draw is in progress. Painted
    /// above every committed pill.
    pub provisional: Option<Pill>,
    /// Last known pointer position; center of the crosshair guide. `None`
    /// until the first event arrives.
    pub pointer: Option<Point>,
    /// Width of the drawing surface in surface units.
    pub surface_width: f64,
    /// Height of the drawing surface in surface units.
    pub surface_height: f64,
}

/// The engine: all canvas state plus the event handlers that advance it.
pub struct EngineCore {
    /// Committed pills and the high-water stack counter.
    pub registry: ShapeRegistry,
    /// The gesture in progress, if any.
    pub gesture: GestureState,
    colors: Box<dyn ColorProvider>,
    pointer: Option<Point>,
    surface_width: f64,
    surface_height: f64,
}

impl EngineCore {
    /// Create an engine with the default random palette provider.
    #[must_use]
    pub fn new() -> Self {
        Self::with_colors(Box::new(RandomPalette))
    }

    /// Create an engine with an injected color provider.
    #[must_use]
    pub fn with_colors(colors: Box<dyn ColorProvider>) -> Self {
        Self {
            registry: ShapeRegistry::new(),
            gesture: GestureState::Idle,
            colors,
            pointer: None,
            surface_width: 0.0,
            surface_height: 0.0,
        }
    }

    /// Record the fixed surface dimensions for the snapshot.
    pub fn set_surface(&mut self, width: f64, height: f64) {
        self.surface_width = width;
        self.surface_height = height;
    }

    /// Hydrate the registry from a host snapshot. The stack counter re-seeds
    /// to cover the loaded orders so future assignments stay on top.
    pub fn load_pills(&mut self, pills: Vec<Pill>) {
        self.registry.replace_all(pills);
    }

    // --- Input events ---

    /// Handle pointer-down: hit pills become drag targets and come to the
    /// front immediately; empty space arms a draw.
    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        self.pointer = Some(point);
        let Some(hit) = self.registry.hit_test(point) else {
            self.gesture = GestureState::PendingDraw { anchor: point };
            return Vec::new();
        };
        let id = hit.id;
        // The id came from this registry, so the bump cannot miss.
        let Some(stack_order) = self.registry.bring_to_front(&id) else {
            return Vec::new();
        };
        debug!(%id, stack_order, "drag armed");
        self.gesture = GestureState::Dragging { id, last: point, moved: false };
        vec![Action::BroughtToFront { id, stack_order }, Action::RenderNeeded]
    }

    /// Handle pointer-move: sizes a draw, translates a drag, and always
    /// moves the crosshair.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        self.pointer = Some(point);
        self.gesture = match std::mem::take(&mut self.gesture) {
            GestureState::Idle => GestureState::Idle,
            GestureState::PendingDraw { anchor } => {
                let provisional = self.new_provisional(anchor, point);
                debug!(id = %provisional.id, color = %provisional.color, "draw begin");
                GestureState::Drawing { anchor, provisional }
            }
            GestureState::Drawing { anchor, mut provisional } => {
                size_provisional(&mut provisional, anchor, point);
                GestureState::Drawing { anchor, provisional }
            }
            GestureState::Dragging { id, last, .. } => {
                // A vanished target still burns the movement flag, so the
                // release won't be mistaken for a click.
                self.registry.translate(&id, point.x - last.x, point.y - last.y);
                GestureState::Dragging { id, last: point, moved: true }
            }
        };
        vec![Action::RenderNeeded]
    }

    /// Handle pointer-up: commits a draw, settles a drag, or — when no
    /// movement happened since pointer-down — cuts every pill at the up
    /// point. The session always ends here.
    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Action> {
        self.pointer = Some(point);
        match std::mem::take(&mut self.gesture) {
            GestureState::Idle => Vec::new(),
            GestureState::Drawing { provisional, .. } => {
                debug!(id = %provisional.id, width = provisional.width, height = provisional.height, "pill committed");
                let committed = provisional.clone();
                self.registry.add(provisional);
                vec![Action::PillCommitted(committed), Action::RenderNeeded]
            }
            GestureState::Dragging { id, moved: true, .. } => {
                let Some(pill) = self.registry.get(&id) else {
                    return vec![Action::RenderNeeded];
                };
                debug!(%id, x = pill.x, y = pill.y, "drag settled");
                vec![Action::PillMoved { id, x: pill.x, y: pill.y }, Action::RenderNeeded]
            }
            // A click — hit or miss — cuts everything at the up point.
            GestureState::PendingDraw { .. } | GestureState::Dragging { moved: false, .. } => {
                self.split_all(point)
            }
        }
    }

    // --- Queries ---

    /// Read-only render state: pills in paint order, the provisional pill,
    /// and the crosshair position.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let provisional = match &self.gesture {
            GestureState::Drawing { provisional, .. } => Some(provisional.clone()),
            _ => None,
        };
        Snapshot {
            pills: self.registry.sorted_pills().into_iter().cloned().collect(),
            provisional,
            pointer: self.pointer,
            surface_width: self.surface_width,
            surface_height: self.surface_height,
        }
    }

    // --- Internals ---

    /// Create the provisional pill for a draw gesture. This is the only
    /// place a brand-new pill's color, radii, and starting size are decided.
    fn new_provisional(&mut self, anchor: Point, pointer: Point) -> Pill {
        let mut pill = Pill {
            id: Uuid::new_v4(),
            x: anchor.x,
            y: anchor.y,
            width: MIN_DRAW_SIZE,
            height: MIN_DRAW_SIZE,
            color: self.colors.next_color(),
            stack_order: self.registry.next_stack_order(),
            radii: CornerRadii::uniform(DEFAULT_CORNER_RADIUS),
        };
        size_provisional(&mut pill, anchor, pointer);
        pill
    }

    /// Cut every pill at `point` and replace the registry with the
    /// concatenated fragments, preserving insertion order across parents.
    fn split_all(&mut self, point: Point) -> Vec<Action> {
        let parents = self.registry.len();
        let mut next = Vec::with_capacity(parents);
        for pill in self.registry.take_pills() {
            next.extend(geometry::split(pill, point));
        }
        let fragments = next.len();
        debug!(parents, fragments, x = point.x, y = point.y, "split pass");
        self.registry.replace_all(next);
        vec![Action::SplitApplied { parents, fragments }, Action::RenderNeeded]
    }
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Size a provisional pill as the axis-aligned rectangle spanning `anchor`
/// and `pointer`, with both dimensions floored at [`MIN_DRAW_SIZE`].
fn size_provisional(pill: &mut Pill, anchor: Point, pointer: Point) {
    pill.x = anchor.x.min(pointer.x);
    pill.y = anchor.y.min(pointer.y);
    pill.width = (anchor.x - pointer.x).abs().max(MIN_DRAW_SIZE);
    pill.height = (anchor.y - pointer.y).abs().max(MIN_DRAW_SIZE);
}
