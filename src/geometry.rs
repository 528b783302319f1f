//! Geometry engine: containment tests and the split/placement algorithm.
//!
//! Everything here is pure — functions take values in and return values out,
//! with no registry or session state. Splitting is the tool's signature
//! operation: the minimum-size floor and the displacement fallback keep the
//! surface from degenerating into zero-area slivers while still giving
//! visible feedback on every click.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DISPLACE_MARGIN, MIN_SPLIT_SIZE};
use crate::registry::{CornerRadii, Pill};

/// A point in surface-local coordinates, origin top-left.
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

/// True iff `point` lies within the pill's axis-aligned bounding box,
/// inclusive of all four edges.
#[must_use]
pub fn intersects(pill: &Pill, point: Point) -> bool {
    point.x >= pill.x
        && point.x <= pill.x + pill.width
        && point.y >= pill.y
        && point.y <= pill.y + pill.height
}

/// Cut a pill at `split_point`, returning its replacements.
///
/// Deterministic and pure. The result is never empty:
///
/// - the cut misses the bounding box entirely → the pill comes back
///   unchanged;
/// - a crossed axis is already at the size floor, or every candidate
///   fragment would be undersized → the whole pill is displaced off the cut
///   line, keeping its id;
/// - otherwise two or four fragments partition the bounding box at the
///   split coordinates, except that fragments under the floor on either
///   dimension are dropped.
///
/// Fragments inherit color and stack order, take fresh ids, and keep the
/// parent's corner radius only on corners they still occupy; corners
/// introduced by a cut edge are square.
#[must_use]
pub fn split(pill: Pill, split_point: Point) -> Vec<Pill> {
    let crosses_v = split_point.x >= pill.x && split_point.x <= pill.x + pill.width;
    let crosses_h = split_point.y >= pill.y && split_point.y <= pill.y + pill.height;

    if !crosses_v && !crosses_h {
        return vec![pill];
    }

    // A pill at the floor on a crossed axis cannot shrink further there; a
    // structural split is disallowed and the pill is pushed aside whole.
    let floored = (crosses_v && pill.width <= MIN_SPLIT_SIZE)
        || (crosses_h && pill.height <= MIN_SPLIT_SIZE);
    if floored {
        return vec![displace(pill, split_point, crosses_v, crosses_h)];
    }

    let fragments = if crosses_v && crosses_h {
        quarter(&pill, split_point)
    } else if crosses_v {
        halve_at_x(&pill, split_point.x)
    } else {
        halve_at_y(&pill, split_point.y)
    };

    if fragments.is_empty() {
        // Every candidate came out undersized. Dropping them all would erase
        // the pill, so move it whole instead.
        return vec![displace(pill, split_point, crosses_v, crosses_h)];
    }
    fragments
}

/// Whether a candidate fragment is large enough to materialize.
fn viable(width: f64, height: f64) -> bool {
    width >= MIN_SPLIT_SIZE && height >= MIN_SPLIT_SIZE
}

/// Vertical cut: left and right fragments spanning the full height. Each
/// keeps both original radii of the edge it spans.
fn halve_at_x(pill: &Pill, cut_x: f64) -> Vec<Pill> {
    let r = pill.radii;
    let left_w = cut_x - pill.x;
    let right_w = pill.x + pill.width - cut_x;

    let mut out = Vec::with_capacity(2);
    if viable(left_w, pill.height) {
        let radii = CornerRadii {
            top_left: r.top_left,
            top_right: 0.0,
            bottom_left: r.bottom_left,
            bottom_right: 0.0,
        };
        out.push(pill.fragment(pill.x, pill.y, left_w, pill.height, radii));
    }
    if viable(right_w, pill.height) {
        let radii = CornerRadii {
            top_left: 0.0,
            top_right: r.top_right,
            bottom_left: 0.0,
            bottom_right: r.bottom_right,
        };
        out.push(pill.fragment(cut_x, pill.y, right_w, pill.height, radii));
    }
    out
}

/// Horizontal cut: top and bottom fragments spanning the full width.
fn halve_at_y(pill: &Pill, cut_y: f64) -> Vec<Pill> {
    let r = pill.radii;
    let top_h = cut_y - pill.y;
    let bottom_h = pill.y + pill.height - cut_y;

    let mut out = Vec::with_capacity(2);
    if viable(pill.width, top_h) {
        let radii = CornerRadii {
            top_left: r.top_left,
            top_right: r.top_right,
            bottom_left: 0.0,
            bottom_right: 0.0,
        };
        out.push(pill.fragment(pill.x, pill.y, pill.width, top_h, radii));
    }
    if viable(pill.width, bottom_h) {
        let radii = CornerRadii {
            top_left: 0.0,
            top_right: 0.0,
            bottom_left: r.bottom_left,
            bottom_right: r.bottom_right,
        };
        out.push(pill.fragment(pill.x, cut_y, pill.width, bottom_h, radii));
    }
    out
}

/// Cross cut: up to four quadrant fragments, each keeping only the one
/// parent corner it still occupies.
fn quarter(pill: &Pill, p: Point) -> Vec<Pill> {
    let r = pill.radii;
    let left_w = p.x - pill.x;
    let right_w = pill.x + pill.width - p.x;
    let top_h = p.y - pill.y;
    let bottom_h = pill.y + pill.height - p.y;

    let mut out = Vec::with_capacity(4);
    if viable(left_w, top_h) {
        let radii = CornerRadii { top_left: r.top_left, ..CornerRadii::uniform(0.0) };
        out.push(pill.fragment(pill.x, pill.y, left_w, top_h, radii));
    }
    if viable(right_w, top_h) {
        let radii = CornerRadii { top_right: r.top_right, ..CornerRadii::uniform(0.0) };
        out.push(pill.fragment(p.x, pill.y, right_w, top_h, radii));
    }
    if viable(left_w, bottom_h) {
        let radii = CornerRadii { bottom_left: r.bottom_left, ..CornerRadii::uniform(0.0) };
        out.push(pill.fragment(pill.x, p.y, left_w, bottom_h, radii));
    }
    if viable(right_w, bottom_h) {
        let radii = CornerRadii { bottom_right: r.bottom_right, ..CornerRadii::uniform(0.0) };
        out.push(pill.fragment(p.x, p.y, right_w, bottom_h, radii));
    }
    out
}

/// Push a pill whole off the cut line, along whichever candidate edge is
/// nearest the split point.
///
/// Candidate edges are restricted to the axes the cut actually crosses and
/// considered in the fixed precedence left, right, top, bottom; a strict
/// distance comparison makes earlier candidates win ties. The pill moves by
/// its own size on that axis plus [`DISPLACE_MARGIN`], away from the cut,
/// and keeps its id, size, color, radii, and stack order.
fn displace(mut pill: Pill, split_point: Point, crosses_v: bool, crosses_h: bool) -> Pill {
    // (distance to edge, dx, dy) in tie-break precedence order.
    let mut candidates: Vec<(f64, f64, f64)> = Vec::with_capacity(4);
    if crosses_v {
        let shift = pill.width + DISPLACE_MARGIN;
        candidates.push((split_point.x - pill.x, -shift, 0.0));
        candidates.push((pill.x + pill.width - split_point.x, shift, 0.0));
    }
    if crosses_h {
        let shift = pill.height + DISPLACE_MARGIN;
        candidates.push((split_point.y - pill.y, 0.0, -shift));
        candidates.push((pill.y + pill.height - split_point.y, 0.0, shift));
    }

    let mut best: Option<(f64, f64, f64)> = None;
    for candidate in candidates {
        if best.is_none_or(|(dist, _, _)| candidate.0 < dist) {
            best = Some(candidate);
        }
    }
    if let Some((_, dx, dy)) = best {
        pill.x += dx;
        pill.y += dy;
    }
    pill
}
