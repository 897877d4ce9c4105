use web_time::Instant;

use crate::Millis;

/// Monotonic wall clock, sampled once per tick by the loop driver.
///
/// Engines take the sampled timestamp as a plain argument, so tests drive
/// them with literal values instead of a clock.
#[derive(Copy, Clone, Debug)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was started.
    pub fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}
