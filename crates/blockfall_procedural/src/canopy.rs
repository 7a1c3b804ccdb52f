//! # Canopy Pass
//!
//! Grows leaves around trunk tops after layering.
//!
//! Only the first `Wood` cell of each column (its top-most trunk cell) gets
//! a canopy. Leaves only ever replace air, so trunks and terrain are never
//! overwritten and neighbouring canopies may overlap freely.
//!
//! ```text
//!        L          (x, y-2)
//!      L L L        (x-1..=x+1, y-1)
//!      L W L        (x-1, y) (x+1, y)
//!        W
//! ```

use blockfall_core::BlockType;

use crate::terrain::{Cell, TerrainGrid};

/// Leaf offsets relative to the top trunk cell.
const CANOPY_OFFSETS: [(isize, isize); 6] = [(0, -2), (0, -1), (-1, -1), (1, -1), (-1, 0), (1, 0)];

/// Adds a canopy above the first trunk cell of every column.
///
/// Returns the number of leaves placed.
pub fn grow_canopies(grid: &mut TerrainGrid) -> usize {
    let mut placed = 0;
    for x in 0..grid.width() {
        let Some(top) = (0..grid.height()).find(|&y| grid.get(x, y) == Cell::Block(BlockType::Wood))
        else {
            continue;
        };

        for (dx, dy) in CANOPY_OFFSETS {
            let (Some(lx), Some(ly)) = (x.checked_add_signed(dx), top.checked_add_signed(dy)) else {
                continue;
            };
            if lx >= grid.width() || ly >= grid.height() {
                continue;
            }
            if grid.get(lx, ly).is_air() {
                grid.set(lx, ly, Cell::Block(BlockType::Leaves));
                placed += 1;
            }
        }
    }
    placed
}
