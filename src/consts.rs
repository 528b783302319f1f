//! Shared numeric constants for the pillboard engine.

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width/height any pill at rest or split fragment may have.
pub const MIN_SPLIT_SIZE: f64 = 20.0;

/// Extra distance, beyond its own size, a pill travels when a split cannot
/// subdivide it and displaces it whole instead.
pub const DISPLACE_MARGIN: f64 = 1.0;

// ── Drawing ─────────────────────────────────────────────────────

/// Minimum width/height of a pill while it is being drawn. Independent of
/// [`MIN_SPLIT_SIZE`].
pub const MIN_DRAW_SIZE: f64 = 40.0;

/// Corner radius applied to all four corners of a freshly drawn pill.
pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;

// ── Crosshair guide (drawn by the host) ─────────────────────────

/// Thickness in surface units of the crosshair guide lines.
pub const CROSSHAIR_THICKNESS: f64 = 2.0;

/// Opacity of the crosshair guide lines.
pub const CROSSHAIR_ALPHA: f64 = 0.5;
