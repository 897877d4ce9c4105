use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    Cell, CellCount, CellId, CellPicker, GameError, GameMode, GridDims, GridSpec, Millis, Point2,
    Result, hit_test,
};

/// Tuning knobs for the visual-memory game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Starting grid shape; only the dimensions change as levels advance.
    pub grid: GridSpec,
    /// Target count before the first level advance bumps it.
    pub start_targets: CellCount,
    pub lives: u8,
    /// Wrong reveals tolerated per round before a life is lost.
    pub mistake_budget: u16,
    /// Idle time before the first level starts.
    pub start_delay_ms: Millis,
    /// Pause between a round starting and the targets being shown.
    pub grace_ms: Millis,
    /// How long the targets stay revealed.
    pub show_ms: Millis,
    /// The grid grows once targets exceed this share of its capacity.
    pub grow_ratio: f32,
    /// Keeps the last grid index out of the target sample pool.
    pub exclude_last_cell: bool,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::new((3, 3), 50.0, 10.0),
            start_targets: 2,
            lives: 3,
            mistake_budget: 3,
            start_delay_ms: 1000,
            grace_ms: 300,
            show_ms: 600,
            grow_ratio: 0.6,
            exclude_last_cell: true,
        }
    }
}

/// Visual memory: a subset of cells is briefly revealed and must be clicked
/// back from memory. Wrong reveals burn through a per-round mistake budget,
/// then a life; the grid grows as levels advance.
///
/// The target mask lives apart from the player-visible revealed mask; both
/// are indexed by cell id and rebuilt wholesale on every level change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryGame {
    config: MemoryConfig,
    viewport: Point2,
    dims: GridDims,
    cells: Vec<Cell>,
    targets: Vec<bool>,
    revealed: Vec<bool>,
    level: u32,
    target_count: CellCount,
    lives: u8,
    phase_start: Millis,
    clicks: VecDeque<CellId>,
    mode: GameMode,
    targets_shown: bool,
}

impl MemoryGame {
    pub fn new(config: MemoryConfig, viewport: Point2) -> Result<Self> {
        config.grid.validate()?;

        let reserved: CellCount = if config.exclude_last_cell { 1 } else { 0 };
        if config.start_targets + 1 > config.grid.total_cells() - reserved {
            return Err(GameError::TooManyTargets);
        }

        Ok(Self {
            config,
            viewport,
            dims: config.grid.dims,
            cells: Vec::new(),
            targets: Vec::new(),
            revealed: Vec::new(),
            level: 0,
            target_count: config.start_targets,
            lives: config.lives,
            phase_start: 0,
            clicks: VecDeque::new(),
            mode: GameMode::default(),
            targets_shown: false,
        })
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Empty until the first level starts.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn target_count(&self) -> CellCount {
        self.target_count
    }

    pub fn is_target(&self, id: CellId) -> bool {
        self.targets.get(id as usize).copied().unwrap_or(false)
    }

    pub fn is_revealed(&self, id: CellId) -> bool {
        self.revealed.get(id as usize).copied().unwrap_or(false)
    }

    /// Resolves a pointer position against the current grid.
    pub fn hit_test(&self, point: Point2) -> Option<CellId> {
        hit_test(&self.cells, point)
    }

    /// Queues a clicked cell. Clicks are consumed one per tick in arrival
    /// order; ids that do not name a cell are dropped.
    pub fn push_click(&mut self, id: CellId) {
        if (id as usize) < self.cells.len() {
            self.clicks.push_back(id);
        }
    }

    /// Drops all progress and waits for the player again.
    pub fn restart(&mut self, now: Millis) {
        self.dims = self.config.grid.dims;
        self.cells.clear();
        self.targets.clear();
        self.revealed.clear();
        self.level = 0;
        self.target_count = self.config.start_targets;
        self.lives = self.config.lives;
        self.phase_start = now;
        self.clicks.clear();
        self.mode = GameMode::WaitForPlayer;
        self.targets_shown = false;
    }

    /// Advances the state machine by one step.
    pub fn tick(&mut self, now: Millis, picker: &mut dyn CellPicker) {
        match self.mode {
            GameMode::WaitForPlayer => {
                if now.saturating_sub(self.phase_start) >= self.config.start_delay_ms {
                    self.next_level(picker);
                    self.phase_start = now;
                    self.mode = GameMode::ShowPattern;
                }
            }
            GameMode::ShowPattern => self.tick_showing(now),
            GameMode::GetClick => self.tick_collecting(now, picker),
            GameMode::GameOver => {}
        }
    }

    /// Bumps level and target count, grows the grid when the targets would
    /// crowd it, and deals a fresh target set over a rebuilt cell list.
    fn next_level(&mut self, picker: &mut dyn CellPicker) {
        self.level += 1;
        self.target_count += 1;

        let (cols, rows) = self.dims;
        let capacity = f32::from(cols) * f32::from(rows);
        if f32::from(self.target_count) > capacity * self.config.grow_ratio {
            if cols < rows {
                self.dims.0 += 1;
            } else {
                self.dims.1 += 1;
            }
        }

        let spec = GridSpec::new(self.dims, self.config.grid.cell_size, self.config.grid.gap);
        self.cells = spec.build_cells(self.viewport);
        self.targets = vec![false; self.cells.len()];
        self.revealed = vec![false; self.cells.len()];

        // The last grid index stays out of the sample pool.
        let pool = if self.config.exclude_last_cell {
            self.cells.len() as CellCount - 1
        } else {
            self.cells.len() as CellCount
        };
        for id in picker.pick_targets(pool, self.target_count) {
            self.targets[id as usize] = true;
        }

        log::debug!(
            "Level {}: {} targets on a {}x{} grid",
            self.level,
            self.target_count,
            self.dims.0,
            self.dims.1
        );
    }

    fn tick_showing(&mut self, now: Millis) {
        let elapsed = now.saturating_sub(self.phase_start);
        if elapsed >= self.config.grace_ms && !self.targets_shown {
            self.set_targets_revealed(true);
            self.targets_shown = true;
        }
        if elapsed >= self.config.grace_ms + self.config.show_ms {
            self.set_targets_revealed(false);
            self.targets_shown = false;
            self.clicks.clear();
            self.mode = GameMode::GetClick;
        }
    }

    fn set_targets_revealed(&mut self, on: bool) {
        for (revealed, &target) in self.revealed.iter_mut().zip(&self.targets) {
            if target {
                *revealed = on;
            }
        }
    }

    fn tick_collecting(&mut self, now: Millis, picker: &mut dyn CellPicker) {
        if let Some(id) = self.clicks.pop_front() {
            // Sticky reveal; clicking a cell twice has no further effect.
            self.revealed[id as usize] = true;
        }

        let fails = self
            .revealed
            .iter()
            .zip(&self.targets)
            .filter(|&(&revealed, &target)| revealed && !target)
            .count();
        if fails >= usize::from(self.config.mistake_budget) {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.mode = GameMode::GameOver;
                log::debug!("Out of lives at level {}", self.level);
            } else {
                self.revealed.fill(false);
                self.phase_start = now;
                self.mode = GameMode::ShowPattern;
                log::debug!("Life lost, {} left", self.lives);
            }
            return;
        }

        let cleared = self
            .targets
            .iter()
            .zip(&self.revealed)
            .all(|(&target, &revealed)| !target || revealed);
        if cleared {
            self.next_level(picker);
            self.phase_start = now;
            self.mode = GameMode::ShowPattern;
        }
    }
}
