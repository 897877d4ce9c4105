use serde::{Deserialize, Serialize};

/// Stable cell identity, assigned once in grid scan order.
pub type CellId = u16;

/// Count type used for cell totals and target counts.
pub type CellCount = u16;

/// Grid dimensions `(cols, rows)`.
pub type GridDims = (u8, u8);

/// Monotonic milliseconds since loop start.
pub type Millis = u64;

/// A position in viewport pixels.
pub type Point2 = (f32, f32);

pub const fn mult(a: u8, b: u8) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Axis-aligned rectangle in viewport pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Left and top edges are inside, right and bottom edges are not.
    pub fn contains(&self, (px, py): Point2) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}
