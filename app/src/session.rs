use clap::ValueEnum;
use macroquad::prelude::{WHITE, draw_rectangle, draw_text};

use afterglow_core::{
    Cell, CellPicker, GameMode, GridDims, MemoryConfig, MemoryGame, Millis, Point2, Result, Rgb,
    SequenceConfig, SequenceGame, blend,
};

use crate::theme;

/// Which minigame the session runs.
#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
pub enum GameKind {
    /// Click a growing sequence of flashing cells back in order.
    Sequence,
    /// Memorize and click the briefly revealed cells.
    Memory,
}

/// One running game plus its per-variant presentation.
pub enum GameSession {
    Sequence(SequenceGame),
    Memory(MemoryGame),
}

impl GameSession {
    pub fn new(kind: GameKind, dims: Option<GridDims>, viewport: Point2) -> Result<Self> {
        Ok(match kind {
            GameKind::Sequence => {
                let mut config = SequenceConfig::default();
                if let Some(dims) = dims {
                    config.grid.dims = dims;
                }
                Self::Sequence(SequenceGame::new(config, viewport)?)
            }
            GameKind::Memory => {
                let mut config = MemoryConfig::default();
                if let Some(dims) = dims {
                    config.grid.dims = dims;
                }
                Self::Memory(MemoryGame::new(config, viewport)?)
            }
        })
    }

    pub fn mode(&self) -> GameMode {
        match self {
            Self::Sequence(game) => game.mode(),
            Self::Memory(game) => game.mode(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.mode().is_over()
    }

    /// Hit-tests a pointer position and queues the cell under it, if any.
    pub fn click(&mut self, point: Point2) {
        match self {
            Self::Sequence(game) => {
                if let Some(id) = game.hit_test(point) {
                    game.push_click(id);
                }
            }
            Self::Memory(game) => {
                if let Some(id) = game.hit_test(point) {
                    game.push_click(id);
                }
            }
        }
    }

    pub fn restart(&mut self, now: Millis) {
        match self {
            Self::Sequence(game) => game.restart(now),
            Self::Memory(game) => game.restart(now),
        }
    }

    pub fn tick(&mut self, now: Millis, picker: &mut dyn CellPicker) {
        match self {
            Self::Sequence(game) => game.tick(now, picker),
            Self::Memory(game) => game.tick(now, picker),
        }
    }

    pub fn draw(&self, now: Millis) {
        match self {
            Self::Sequence(game) => draw_sequence(game, now),
            Self::Memory(game) => draw_memory(game),
        }
    }
}

/// How a memory cell is painted this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
enum CellFill {
    Idle,
    Hit,
    Miss,
}

fn memory_fill(game: &MemoryGame, cell: &Cell) -> CellFill {
    if !game.is_revealed(cell.id) {
        CellFill::Idle
    } else if game.is_target(cell.id) {
        CellFill::Hit
    } else {
        CellFill::Miss
    }
}

fn draw_sequence(game: &SequenceGame, now: Millis) {
    let flash_ms = game.config().flash_ms;
    for cell in game.cells() {
        let color = blend(
            theme::CELL_LIT,
            theme::CELL_BASE,
            now.saturating_sub(cell.lit_at),
            flash_ms,
        );
        draw_cell(cell, color);
    }

    draw_hud(
        &[
            format!("mode: {:?}", game.mode()),
            format!("sequence: {}", game.pattern_len()),
            format!("progress: {}", game.progress()),
        ],
        game.mode(),
    );
}

fn draw_memory(game: &MemoryGame) {
    for cell in game.cells() {
        let color = match memory_fill(game, cell) {
            CellFill::Idle => theme::CELL_BASE,
            CellFill::Hit => theme::CELL_LIT,
            CellFill::Miss => theme::CELL_MISS,
        };
        draw_cell(cell, color);
    }

    draw_hud(
        &[
            format!("mode: {:?}", game.mode()),
            format!("level: {}", game.level()),
            format!("lives: {}", game.lives()),
        ],
        game.mode(),
    );
}

fn draw_cell(cell: &Cell, color: Rgb) {
    let bounds = cell.bounds;
    draw_rectangle(bounds.x, bounds.y, bounds.w, bounds.h, theme::to_screen(color));
}

fn draw_hud(lines: &[String], mode: GameMode) {
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 8.0, 20.0 + 25.0 * i as f32, 24.0, WHITE);
    }
    if mode.is_over() {
        let y = 20.0 + 25.0 * lines.len() as f32;
        draw_text("press R to play again", 8.0, y, 24.0, WHITE);
    }
}
