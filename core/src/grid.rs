use serde::{Deserialize, Serialize};

use crate::{Cell, CellCount, CellId, GameError, GridDims, Point2, Rect, Result, mult};

/// Shape of a level's cell grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub dims: GridDims,
    pub cell_size: f32,
    pub gap: f32,
}

impl GridSpec {
    pub const fn new(dims: GridDims, cell_size: f32, gap: f32) -> Self {
        Self {
            dims,
            cell_size,
            gap,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.dims.0, self.dims.1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_cells() == 0 {
            return Err(GameError::EmptyGrid);
        }
        if self.cell_size <= 0.0 {
            return Err(GameError::InvalidCellSize);
        }
        Ok(())
    }

    /// Builds the cell list for a level, centered in the viewport.
    ///
    /// Ids run `0..cols*rows` over the `(col, row)` product with the row
    /// index varying fastest.
    pub fn build_cells(&self, viewport: Point2) -> Vec<Cell> {
        let (cols, rows) = self.dims;
        let step = self.cell_size + self.gap;
        let origin_x = viewport.0 / 2.0 - f32::from(cols) / 2.0 * step;
        let origin_y = viewport.1 / 2.0 - f32::from(rows) / 2.0 * step;

        let mut cells = Vec::with_capacity(self.total_cells() as usize);
        for col in 0..cols {
            for row in 0..rows {
                let bounds = Rect::new(
                    origin_x + f32::from(col) * step,
                    origin_y + f32::from(row) * step,
                    self.cell_size,
                    self.cell_size,
                );
                cells.push(Cell::new(cells.len() as CellId, bounds));
            }
        }
        cells
    }
}

/// Resolves a pointer position to the cell under it, if any.
pub fn hit_test(cells: &[Cell], point: Point2) -> Option<CellId> {
    cells
        .iter()
        .find(|cell| cell.bounds.contains(point))
        .map(|cell| cell.id)
}
