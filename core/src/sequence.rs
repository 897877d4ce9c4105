use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    Cell, CellCount, CellId, CellPicker, GameMode, GridSpec, Millis, Point2, Result, hit_test,
};

/// Tuning knobs for the sequence-recall game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub grid: GridSpec,
    /// Idle time before the first round starts.
    pub start_delay_ms: Millis,
    /// Spacing between two presented pattern entries.
    pub step_delay_ms: Millis,
    /// Highlight fade duration, consumed by the renderer.
    pub flash_ms: Millis,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::new((4, 4), 50.0, 10.0),
            start_delay_ms: 1000,
            step_delay_ms: 600,
            flash_ms: 300,
        }
    }
}

/// Sequence recall: a growing random pattern of cells is presented one at a
/// time and must be clicked back in the same order. One wrong click ends the
/// run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceGame {
    config: SequenceConfig,
    cells: Vec<Cell>,
    pattern: Vec<CellId>,
    progress: usize,
    phase_start: Millis,
    clicks: VecDeque<CellId>,
    mode: GameMode,
}

impl SequenceGame {
    pub fn new(config: SequenceConfig, viewport: Point2) -> Result<Self> {
        config.grid.validate()?;
        Ok(Self {
            config,
            cells: config.grid.build_cells(viewport),
            pattern: Vec::new(),
            progress: 0,
            phase_start: 0,
            clicks: VecDeque::new(),
            mode: GameMode::default(),
        })
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn pattern(&self) -> &[CellId] {
        &self.pattern
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// How many pattern entries have been presented or matched so far this
    /// phase. Never exceeds the pattern length.
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Resolves a pointer position against the grid.
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

    /// Forgets the current run and waits for the player again.
    pub fn restart(&mut self, now: Millis) {
        self.pattern.clear();
        self.progress = 0;
        self.clicks.clear();
        self.phase_start = now;
        self.mode = GameMode::WaitForPlayer;
    }

    /// Advances the state machine by one step.
    pub fn tick(&mut self, now: Millis, picker: &mut dyn CellPicker) {
        match self.mode {
            GameMode::WaitForPlayer => self.tick_waiting(now, picker),
            GameMode::ShowPattern => self.tick_showing(now),
            GameMode::GetClick => self.tick_collecting(now, picker),
            GameMode::GameOver => {
                // Idle flourish; the run itself stays dead.
                let id = picker.pick_cell(self.cell_count());
                self.cells[id as usize].light(now);
            }
        }
    }

    fn cell_count(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    fn tick_waiting(&mut self, now: Millis, picker: &mut dyn CellPicker) {
        if now.saturating_sub(self.phase_start) >= self.config.start_delay_ms {
            self.pattern.push(picker.pick_cell(self.cell_count()));
            self.phase_start = now;
            self.mode = GameMode::ShowPattern;
        }
    }

    fn tick_showing(&mut self, now: Millis) {
        if self.progress < self.pattern.len() {
            let due = (self.progress as Millis + 1) * self.config.step_delay_ms;
            if now.saturating_sub(self.phase_start) >= due {
                let id = self.pattern[self.progress];
                self.cells[id as usize].light(now);
                self.progress += 1;
            }
        } else {
            self.progress = 0;
            self.clicks.clear();
            self.mode = GameMode::GetClick;
        }
    }

    fn tick_collecting(&mut self, now: Millis, picker: &mut dyn CellPicker) {
        if self.progress >= self.pattern.len() {
            // Counter overshoot, re-enter the presentation to resync.
            self.mode = GameMode::ShowPattern;
            return;
        }

        let Some(id) = self.clicks.pop_front() else {
            return;
        };

        self.cells[id as usize].light(now);
        if id != self.pattern[self.progress] {
            self.progress = 0;
            self.mode = GameMode::GameOver;
            log::debug!("Wrong cell {}, run over", id);
            return;
        }

        self.progress += 1;
        if self.progress >= self.pattern.len() {
            self.pattern.push(picker.pick_cell(self.cell_count()));
            self.progress = 0;
            self.phase_start = now;
            self.mode = GameMode::ShowPattern;
            log::debug!("Round cleared, pattern grows to {}", self.pattern.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedPicker(VecDeque<CellId>);

    impl ScriptedPicker {
        fn new(ids: &[CellId]) -> Self {
            Self(ids.iter().copied().collect())
        }
    }

    impl CellPicker for ScriptedPicker {
        fn pick_cell(&mut self, _cell_count: CellCount) -> CellId {
            self.0.pop_front().expect("script ran out of cells")
        }

        fn pick_targets(&mut self, _pool: CellCount, wanted: CellCount) -> Vec<CellId> {
            (0..wanted).map(|_| self.pick_cell(0)).collect()
        }
    }

    fn game() -> SequenceGame {
        SequenceGame::new(SequenceConfig::default(), (1280.0, 720.0)).unwrap()
    }

    /// Ticks through the presentation until the game accepts clicks.
    fn present(game: &mut SequenceGame, picker: &mut ScriptedPicker, mut now: Millis) -> Millis {
        while game.mode() == GameMode::ShowPattern {
            now += 100;
            game.tick(now, picker);
        }
        assert_eq!(game.mode(), GameMode::GetClick);
        now
    }

    #[test]
    fn waits_a_full_second_before_the_first_round() {
        let mut game = game();
        let mut picker = ScriptedPicker::new(&[3]);

        game.tick(999, &mut picker);
        assert_eq!(game.mode(), GameMode::WaitForPlayer);
        assert_eq!(game.pattern_len(), 0);

        game.tick(1000, &mut picker);
        assert_eq!(game.mode(), GameMode::ShowPattern);
        assert_eq!(game.pattern(), &[3]);
    }

    #[test]
    fn presents_entries_spaced_by_the_step_delay() {
        let mut game = game();
        let mut picker = ScriptedPicker::new(&[3]);

        game.tick(1000, &mut picker);
        game.tick(1599, &mut picker);
        assert_eq!(game.progress(), 0);
        assert_eq!(game.cells()[3].lit_at, 0);

        game.tick(1600, &mut picker);
        assert_eq!(game.progress(), 1);
        assert_eq!(game.cells()[3].lit_at, 1600);

        game.tick(1601, &mut picker);
        assert_eq!(game.mode(), GameMode::GetClick);
        assert_eq!(game.progress(), 0);
    }

    #[test]
    fn correct_click_finishes_the_round_and_grows_the_pattern() {
        let mut game = game();
        let mut picker = ScriptedPicker::new(&[3, 7]);

        game.tick(1000, &mut picker);
        let now = present(&mut game, &mut picker, 1000);

        game.push_click(3);
        game.tick(now + 10, &mut picker);
        assert_eq!(game.mode(), GameMode::ShowPattern);
        assert_eq!(game.pattern(), &[3, 7]);
        assert_eq!(game.progress(), 0);
    }

    #[test]
    fn wrong_click_ends_the_run_no_matter_what_else_is_queued() {
        let mut game = game();
        let mut picker = ScriptedPicker::new(&[3]);

        game.tick(1000, &mut picker);
        let now = present(&mut game, &mut picker, 1000);

        game.push_click(5);
        game.push_click(3);
        game.tick(now + 10, &mut picker);
        assert_eq!(game.mode(), GameMode::GameOver);
        assert_eq!(game.progress(), 0);
        assert_eq!(game.cells()[5].lit_at, now + 10);
    }

    #[test]
    fn clicks_are_consumed_one_per_tick_in_arrival_order() {
        let mut game = game();
        let mut picker = ScriptedPicker::new(&[5, 2, 9]);

        game.tick(1000, &mut picker);
        let now = present(&mut game, &mut picker, 1000);

        game.push_click(5);
        game.tick(now + 10, &mut picker);
        let now = present(&mut game, &mut picker, now + 10);
        assert_eq!(game.pattern(), &[5, 2]);

        game.push_click(5);
        game.push_click(2);
        game.push_click(3);
        game.tick(now + 10, &mut picker);
        assert_eq!(game.mode(), GameMode::GetClick);
        assert_eq!(game.progress(), 1);

        game.tick(now + 20, &mut picker);
        assert_eq!(game.mode(), GameMode::ShowPattern);
        assert_eq!(game.pattern(), &[5, 2, 9]);
    }

    #[test]
    fn game_over_keeps_flashing_random_cells() {
        let mut game = game();
        let mut picker = ScriptedPicker::new(&[3, 6, 11]);

        game.tick(1000, &mut picker);
        let now = present(&mut game, &mut picker, 1000);

        game.push_click(1);
        game.tick(now + 10, &mut picker);
        assert_eq!(game.mode(), GameMode::GameOver);

        game.tick(now + 20, &mut picker);
        assert_eq!(game.cells()[6].lit_at, now + 20);
        game.tick(now + 30, &mut picker);
        assert_eq!(game.cells()[11].lit_at, now + 30);
        assert_eq!(game.mode(), GameMode::GameOver);
    }

    #[test]
    fn restart_returns_to_waiting_with_a_clean_slate() {
        let mut game = game();
        let mut picker = ScriptedPicker::new(&[3, 6, 2]);

        game.tick(1000, &mut picker);
        let now = present(&mut game, &mut picker, 1000);
        game.push_click(0);
        game.tick(now + 10, &mut picker);
        game.tick(now + 20, &mut picker);
        assert_eq!(game.mode(), GameMode::GameOver);

        game.restart(5000);
        assert_eq!(game.mode(), GameMode::WaitForPlayer);
        assert_eq!(game.pattern_len(), 0);
        assert_eq!(game.progress(), 0);

        game.tick(5999, &mut picker);
        assert_eq!(game.mode(), GameMode::WaitForPlayer);
        game.tick(6000, &mut picker);
        assert_eq!(game.mode(), GameMode::ShowPattern);
        assert_eq!(game.pattern(), &[2]);
    }

    #[test]
    fn out_of_range_clicks_are_dropped() {
        let mut game = game();
        let mut picker = ScriptedPicker::new(&[3]);

        game.tick(1000, &mut picker);
        let now = present(&mut game, &mut picker, 1000);

        game.push_click(99);
        game.tick(now + 10, &mut picker);
        assert_eq!(game.mode(), GameMode::GetClick);
        assert_eq!(game.progress(), 0);
    }

    #[test]
    fn rejects_a_grid_with_no_cells() {
        let mut config = SequenceConfig::default();
        config.grid.dims = (0, 3);
        assert!(SequenceGame::new(config, (1280.0, 720.0)).is_err());
    }
}
