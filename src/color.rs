//! Color selection for freshly drawn pills.
//!
//! A pill's color is fixed at creation and inherited unchanged by split
//! offspring, so the engine asks a [`ColorProvider`] exactly once per pill.
//! The provider is pluggable: the default picks uniformly at random from the
//! fixed palette, and hosts or tests that need determinism inject
//! [`CyclingPalette`] instead.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::Rng;

/// The fixed palette new pills draw from.
pub const PALETTE: [&str; 8] = [
    "#D94B4B", "#E8943A", "#E5C550", "#5FA05F", "#3A7CA5", "#7A5FA0", "#C75F8F", "#5F9EA0",
];

/// Source of the color assigned to a freshly drawn pill.
pub trait ColorProvider {
    /// Pick the color for the next new pill.
    fn next_color(&mut self) -> String;
}

/// Default provider: uniform random choice from [`PALETTE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPalette;

impl ColorProvider for RandomPalette {
    fn next_color(&mut self) -> String {
        let idx = rand::rng().random_range(0..PALETTE.len());
        PALETTE[idx].to_owned()
    }
}

/// Deterministic provider: walks [`PALETTE`] in order, wrapping around.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclingPalette {
    next: usize,
}

impl ColorProvider for CyclingPalette {
    fn next_color(&mut self) -> String {
        let color = PALETTE[self.next];
        self.next = (self.next + 1) % PALETTE.len();
        color.to_owned()
    }
}
