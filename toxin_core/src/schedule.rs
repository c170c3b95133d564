//! Predicting when toxin damage lands and when the effect decays

use std::time::{Duration, Instant};

use crate::constants::{GAME_TICK_MILLIS, TOXIN_DECAY_MILLIS, TOXIN_TICK_LENGTH};
use crate::types::is_venom;

/// Predicted game tick of the next toxin damage hit.
///
/// The prediction only moves when it has already passed or when the
/// affliction is fresh; an unrelated status change in between leaves the
/// cadence untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSchedule {
    next_tick: Option<u32>,
}

impl TickSchedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently predicted tick index, if any
    pub fn next_tick(&self) -> Option<u32> {
        self.next_tick
    }

    /// Re-anchor the prediction when it is stale.
    ///
    /// The prediction moves to `current_tick + TOXIN_TICK_LENGTH` if none
    /// exists, the scheduled tick is not in the future, or the previous
    /// status value was zero. Returns the new tick index when it moved.
    pub fn reschedule(&mut self, current_tick: u32, was_neutral: bool) -> Option<u32> {
        let stale = self.next_tick.map_or(true, |tick| tick <= current_tick);
        if stale || was_neutral {
            let tick = current_tick + TOXIN_TICK_LENGTH;
            self.next_tick = Some(tick);
            return Some(tick);
        }
        None
    }

    /// Wall-clock instant of the next damage hit.
    ///
    /// Collapses to `now` when nothing is scheduled or the scheduled tick
    /// is not in the future.
    pub fn next_hit_time(&self, now: Instant, current_tick: u32) -> Instant {
        let ticks_away = self
            .next_tick
            .map_or(0, |tick| tick.saturating_sub(current_tick));
        now + Duration::from_millis(GAME_TICK_MILLIS * u64::from(ticks_away))
    }

    /// Drop the prediction
    pub fn clear(&mut self) {
        self.next_tick = None;
    }
}

/// Instant at which the toxin or antidote effect decays.
///
/// Each unit of status value magnitude contributes one decay period past
/// the next hit. Venom never decays on its own, so the venom regime has
/// no decay instant.
pub fn decay_time(next_hit: Instant, value: i32) -> Option<Instant> {
    if is_venom(value) {
        return None;
    }
    let units = u64::from(value.unsigned_abs());
    Some(next_hit + Duration::from_millis(TOXIN_DECAY_MILLIS * units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VENOM_THRESHOLD;

    #[test]
    fn test_reschedule_fresh_affliction() {
        let mut schedule = TickSchedule::new();
        assert_eq!(schedule.reschedule(100, true), Some(130));
        assert_eq!(schedule.next_tick(), Some(130));
    }

    #[test]
    fn test_reschedule_keeps_future_prediction() {
        let mut schedule = TickSchedule::new();
        schedule.reschedule(100, true);
        // Status changed again mid-cadence; prediction holds
        assert_eq!(schedule.reschedule(110, false), None);
        assert_eq!(schedule.next_tick(), Some(130));
    }

    #[test]
    fn test_reschedule_replaces_past_prediction() {
        let mut schedule = TickSchedule::new();
        schedule.reschedule(100, true);
        assert_eq!(schedule.reschedule(130, false), Some(160));
    }

    #[test]
    fn test_reschedule_resets_after_neutral() {
        let mut schedule = TickSchedule::new();
        schedule.reschedule(100, true);
        // Cured and re-poisoned before the old prediction elapsed
        assert_eq!(schedule.reschedule(110, true), Some(140));
    }

    #[test]
    fn test_next_hit_time_spacing() {
        let mut schedule = TickSchedule::new();
        schedule.reschedule(100, true);
        let now = Instant::now();

        let at_anchor = schedule.next_hit_time(now, 100);
        assert_eq!(at_anchor - now, Duration::from_millis(30 * 600));

        let mid_cadence = schedule.next_hit_time(now, 110);
        assert_eq!(mid_cadence - now, Duration::from_millis(20 * 600));
    }

    #[test]
    fn test_next_hit_time_empty_schedule() {
        let schedule = TickSchedule::new();
        let now = Instant::now();
        assert_eq!(schedule.next_hit_time(now, 5), now);
    }

    #[test]
    fn test_decay_time_poison() {
        let now = Instant::now();
        let decay = decay_time(now, 10).unwrap();
        assert_eq!(decay - now, Duration::from_millis(10 * 18_000));
    }

    #[test]
    fn test_decay_time_antidote_uses_magnitude() {
        let now = Instant::now();
        let decay = decay_time(now, -25).unwrap();
        assert_eq!(decay - now, Duration::from_millis(25 * 18_000));
    }

    #[test]
    fn test_decay_time_absent_for_venom() {
        let now = Instant::now();
        assert_eq!(decay_time(now, VENOM_THRESHOLD), None);
        assert_eq!(decay_time(now, VENOM_THRESHOLD + 8), None);
    }

    #[test]
    fn test_clear() {
        let mut schedule = TickSchedule::new();
        schedule.reschedule(0, true);
        schedule.clear();
        assert_eq!(schedule.next_tick(), None);
    }
}
