//! Straight fill pattern - plain rectangular grid.
//!
//! Units are laid edge to edge in rows and columns from the plane's origin.
//! When the plane is an exact multiple of the unit the grid covers it with no
//! gaps or overlap; otherwise the last column and row hang over the edge and
//! are trimmed by clipping.

use crate::geometry::Rect;
use super::util::{cells_to_cover, row_major, TileContext};

/// Grid extents `(columns, rows)` in world units: `ceil(W / w)`, `ceil(H / l)`.
#[inline]
pub(crate) fn grid_extents(ctx: &TileContext) -> (usize, usize) {
    (cells_to_cover(ctx.world_w, ctx.unit_w), cells_to_cover(ctx.world_h, ctx.unit_l))
}

/// Number of candidates [`straight_candidates`] will yield.
pub fn straight_count(ctx: &TileContext) -> usize {
    let (cols, rows) = grid_extents(ctx);
    cols.saturating_mul(rows)
}

/// Generate straight-grid candidates, row-major.
pub fn straight_candidates(ctx: TileContext) -> impl Iterator<Item = Rect> + Clone {
    let (cols, rows) = grid_extents(&ctx);

    row_major(cols, rows).map(move |(row, col)| {
        Rect::new(
            ctx.x0 + col as f64 * ctx.pw,
            ctx.y0 + row as f64 * ctx.pl,
            ctx.pw,
            ctx.pl,
        )
    })
}
