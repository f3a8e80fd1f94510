//! Herringbone fill pattern - square-block "L" weave.
//!
//! A simplified herringbone: no 45 degree rotation. The plane is cut into
//! square blocks of side `pl + pw`, and each block holds two units forming an
//! "L": one lying horizontally at the block's corner, one standing vertically
//! against its right end.
//!
//! ```text
//!   +-----------+---+
//!   |     A     |   |
//!   +-----------+ B |
//!               |   |
//!               +---+
//! ```

use crate::geometry::Rect;
use super::util::{cells_to_cover, row_major, TileContext};

/// Side of one square block in output units.
#[inline]
pub fn block_size(ctx: &TileContext) -> f64 {
    ctx.pl + ctx.pw
}

/// Block grid extents `(columns, rows)`, measured in output space:
/// `ceil(W * scale / block)`, `ceil(H * scale / block)`.
#[inline]
fn block_extents(ctx: &TileContext) -> (usize, usize) {
    let block = block_size(ctx);
    (cells_to_cover(ctx.plane_w, block), cells_to_cover(ctx.plane_h, block))
}

/// Number of candidates [`herringbone_candidates`] will yield (two per block).
pub fn herringbone_count(ctx: &TileContext) -> usize {
    let (cols, rows) = block_extents(ctx);
    cols.saturating_mul(rows).saturating_mul(2)
}

/// Generate herringbone candidates: blocks row-major, tile A before tile B
/// within each block.
pub fn herringbone_candidates(ctx: TileContext) -> impl Iterator<Item = Rect> + Clone {
    let (cols, rows) = block_extents(&ctx);
    let block = block_size(&ctx);

    row_major(cols, rows).flat_map(move |(row, col)| {
        let base_x = ctx.x0 + col as f64 * block;
        let base_y = ctx.y0 + row as f64 * block;

        // A lies along x, B stands along y against A's right edge
        let horizontal = Rect::new(base_x, base_y, ctx.pl, ctx.pw);
        let vertical = Rect::new(base_x + ctx.pl, base_y, ctx.pw, ctx.pl);
        [horizontal, vertical]
    })
}
