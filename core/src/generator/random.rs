use rand::prelude::*;
use rand::seq::index;

use super::*;

/// Uniform picker backed by a small seeded RNG, so runs can be replayed.
#[derive(Clone, Debug)]
pub struct RandomPicker {
    rng: SmallRng,
}

impl RandomPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl CellPicker for RandomPicker {
    fn pick_cell(&mut self, cell_count: CellCount) -> CellId {
        self.rng.random_range(0..cell_count)
    }

    fn pick_targets(&mut self, pool: CellCount, wanted: CellCount) -> Vec<CellId> {
        let wanted = if wanted > pool {
            log::warn!(
                "Sample pool only holds {} cells, requested {}, clamped",
                pool,
                wanted
            );
            pool
        } else {
            wanted
        };

        index::sample(&mut self.rng, pool as usize, wanted as usize)
            .into_iter()
            .map(|id| id as CellId)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_the_same_picks() {
        let mut a = RandomPicker::new(7);
        let mut b = RandomPicker::new(7);
        for _ in 0..32 {
            assert_eq!(a.pick_cell(16), b.pick_cell(16));
        }
        assert_eq!(a.pick_targets(8, 3), b.pick_targets(8, 3));
    }

    #[test]
    fn picked_cells_stay_in_range() {
        let mut picker = RandomPicker::new(99);
        for _ in 0..256 {
            assert!(picker.pick_cell(16) < 16);
        }
    }

    #[test]
    fn targets_are_distinct_and_inside_the_pool() {
        let mut picker = RandomPicker::new(3);
        let targets = picker.pick_targets(8, 5);
        assert_eq!(targets.len(), 5);
        assert!(targets.iter().all(|&id| id < 8));

        let mut sorted = targets.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
    }

    #[test]
    fn oversized_requests_clamp_to_the_pool() {
        let mut picker = RandomPicker::new(1);
        let targets = picker.pick_targets(4, 9);
        assert_eq!(targets.len(), 4);
    }
}
