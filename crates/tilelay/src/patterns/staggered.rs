//! Staggered fill pattern - brick bond.
//!
//! Same grid as the straight pattern, but every odd row is pushed left by
//! half a unit. Only leftward: odd rows overhang the plane's left edge and
//! stop half a unit short of its right edge.

use crate::geometry::Rect;
use super::straight::grid_extents;
use super::util::{row_major, TileContext};

/// Number of candidates [`staggered_candidates`] will yield.
pub fn staggered_count(ctx: &TileContext) -> usize {
    let (cols, rows) = grid_extents(ctx);
    cols.saturating_mul(rows)
}

/// Horizontal shift applied to `row`: `-pw / 2` on odd rows, 0 otherwise.
#[inline]
pub fn row_offset(ctx: &TileContext, row: usize) -> f64 {
    if row % 2 != 0 { -ctx.pw / 2.0 } else { 0.0 }
}

/// Generate staggered candidates, row-major.
pub fn staggered_candidates(ctx: TileContext) -> impl Iterator<Item = Rect> + Clone {
    let (cols, rows) = grid_extents(&ctx);

    row_major(cols, rows).map(move |(row, col)| {
        Rect::new(
            ctx.x0 + col as f64 * ctx.pw + row_offset(&ctx, row),
            ctx.y0 + row as f64 * ctx.pl,
            ctx.pw,
            ctx.pl,
        )
    })
}
