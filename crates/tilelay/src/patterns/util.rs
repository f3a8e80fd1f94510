//! Shared utilities for pattern generation.
//!
//! Every variant needs the same setup: the unit's size in output space, the
//! plane's origin, and how many grid steps it takes to cover the plane.

use crate::geometry::{Plane, Unit};
use crate::transform::Transform;

/// Pre-computed values shared by all pattern generators.
///
/// # Example
/// ```ignore
/// let ctx = TileContext::new(&plane, &unit, &transform);
/// // ctx.pw, ctx.pl, ctx.x0, ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileContext {
    /// Unit width in output units (`unit.width * scale`)
    pub pw: f64,
    /// Unit length in output units (`unit.length * scale`)
    pub pl: f64,
    /// Plane origin in output space
    pub x0: f64,
    pub y0: f64,
    /// Plane size in output units
    pub plane_w: f64,
    pub plane_h: f64,
    /// Plane size in world units
    pub world_w: f64,
    pub world_h: f64,
    /// Unit size in world units
    pub unit_w: f64,
    pub unit_l: f64,
}

impl TileContext {
    pub fn new(plane: &Plane, unit: &Unit, transform: &Transform) -> Self {
        Self {
            pw: unit.width * transform.scale,
            pl: unit.length * transform.scale,
            x0: transform.x0,
            y0: transform.y0,
            plane_w: plane.width * transform.scale,
            plane_h: plane.height * transform.scale,
            world_w: plane.width,
            world_h: plane.height,
            unit_w: unit.width,
            unit_l: unit.length,
        }
    }
}

/// Number of `step`-sized cells needed to cover `span`: `ceil(span / step)`.
///
/// Saturates instead of overflowing; callers are expected to refuse absurd
/// counts before iterating.
#[inline]
pub fn cells_to_cover(span: f64, step: f64) -> usize {
    let cells = (span / step).ceil();
    if cells.is_finite() && cells > 0.0 {
        // `as` saturates at usize::MAX for out-of-range floats
        cells as usize
    } else {
        0
    }
}

/// Row-major walk over a `cols` x `rows` grid: `(row, col)` pairs, row
/// ascending then column ascending.
#[inline]
pub fn row_major(cols: usize, rows: usize) -> impl Iterator<Item = (usize, usize)> + Clone {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}
