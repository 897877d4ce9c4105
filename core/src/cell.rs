use serde::{Deserialize, Serialize};

use crate::{CellId, Millis, Rect};

/// One clickable grid unit.
///
/// The id is assigned at build time and stays stable for the lifetime of a
/// level, independent of where the cell sits in the containing list.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub bounds: Rect,
    /// Timestamp of the last activation, 0 before the first one.
    pub lit_at: Millis,
}

impl Cell {
    pub const fn new(id: CellId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            lit_at: 0,
        }
    }

    /// Restarts the highlight fade from `now`.
    pub fn light(&mut self, now: Millis) {
        self.lit_at = now;
    }
}
