//! Host time seam

use std::time::Instant;

/// Wall-clock source supplied by the host runtime.
///
/// Only "now" comes from the clock; the game tick counter travels with
/// each status-change notification instead.
pub trait GameClock {
    fn now(&self) -> Instant;
}

/// System clock for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl GameClock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
