use crate::{CellCount, CellId};

pub use random::*;

mod random;

/// Source of the cells a round asks the player to remember.
///
/// Implementations may assume `cell_count > 0`; engines validate their grid
/// before asking for cells.
pub trait CellPicker {
    /// Picks one cell id uniformly over `0..cell_count`.
    fn pick_cell(&mut self, cell_count: CellCount) -> CellId;

    /// Picks `wanted` distinct cell ids from `0..pool`.
    fn pick_targets(&mut self, pool: CellCount, wanted: CellCount) -> Vec<CellId>;
}
