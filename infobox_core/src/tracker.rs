//! The status tracker
//!
//! Watches the player's toxin status value, predicts the next damage hit
//! and the decay instant, and keeps up to three timer infoboxes in sync
//! with the prediction. All recomputation happens synchronously inside
//! the status-change notification, which the host invokes serially.

use std::time::{Duration, Instant};

use log::debug;

use toxin_core::constants::{TOXIN_DECAY_MILLIS, VENOM_IMMUNITY_FLOOR};
use toxin_core::{classify_antidote, decay_time, is_venom, next_damage, TickSchedule, ToxinKind};

use crate::clock::GameClock;
use crate::config::TrackerConfig;
use crate::icon::IconSource;
use crate::infobox::{Infobox, InfoboxId, InfoboxKind, InfoboxManager, TextTone};
use crate::tooltip::Tooltip;

/// Ids of the infoboxes currently displayed.
///
/// At most one toxin box and at most one of the antidote pair is ever
/// live at a time.
#[derive(Debug, Clone, Copy, Default)]
struct ActiveBoxes {
    toxin: Option<InfoboxId>,
    antidote: Option<InfoboxId>,
    antivenom: Option<InfoboxId>,
}

/// Tracker state, owned exclusively by the tracker and mutated only from
/// the notification handlers and `stop`.
#[derive(Debug, Default)]
struct TrackerState {
    last_value: i32,
    last_damage: i32,
    envenomed: bool,
    schedule: TickSchedule,
    next_hit_time: Option<Instant>,
    decay_time: Option<Instant>,
    active: ActiveBoxes,
    next_id: u64,
}

/// Tracks the poison/venom status variable and owns the timer infoboxes.
///
/// Collaborators are injected at construction; the host calls
/// [`start`](StatusTracker::start) and [`stop`](StatusTracker::stop)
/// around the tracker's lifetime and forwards status-change and
/// config-change notifications in between.
pub struct StatusTracker<C, I, M> {
    config: TrackerConfig,
    clock: C,
    icons: I,
    manager: M,
    state: TrackerState,
}

impl<C, I, M> StatusTracker<C, I, M>
where
    C: GameClock,
    I: IconSource,
    M: InfoboxManager,
{
    pub fn new(config: TrackerConfig, clock: C, icons: I, manager: M) -> Self {
        StatusTracker {
            config,
            clock,
            icons,
            manager,
            state: TrackerState::default(),
        }
    }

    /// Begin tracking from a clean slate
    pub fn start(&mut self) {
        self.state = TrackerState::default();
    }

    /// Remove every infobox and return all fields to their initial values
    pub fn stop(&mut self) {
        self.remove_infoboxes();
        self.state = TrackerState::default();
    }

    /// Handle a change notification for the polled status value.
    ///
    /// A notification that does not change the value is a no-op: nothing
    /// is recomputed and no infoboxes move.
    pub fn status_changed(&mut self, value: i32, current_tick: u32) {
        if value == self.state.last_value {
            return;
        }

        // The hit cadence only moves if the old prediction elapsed or the
        // affliction is fresh
        let was_neutral = self.state.last_value == 0;
        if let Some(tick) = self.state.schedule.reschedule(current_tick, was_neutral) {
            debug!("next toxin hit expected at tick {tick}");
        }

        let now = self.clock.now();
        let next_hit = self.state.schedule.next_hit_time(now, current_tick);
        self.state.next_hit_time = Some(next_hit);
        self.state.decay_time = decay_time(next_hit, value);
        self.state.envenomed = is_venom(value);
        self.state.last_damage = next_damage(value, self.state.envenomed);
        self.state.last_value = value;

        self.refresh_infoboxes(value, now, next_hit);
    }

    /// Swap in a new display configuration.
    ///
    /// Turning every category off withdraws whatever is on screen.
    pub fn config_changed(&mut self, config: TrackerConfig) {
        self.config = config;
        if self.config.all_hidden() {
            self.remove_infoboxes();
        }
    }

    /// Damage predicted for the next hit
    pub fn last_damage(&self) -> i32 {
        self.state.last_damage
    }

    /// Last-seen status value
    pub fn last_value(&self) -> i32 {
        self.state.last_value
    }

    /// Whether the current status value encodes venom
    pub fn is_envenomed(&self) -> bool {
        self.state.envenomed
    }

    /// Predicted instant of the next damage hit
    pub fn next_hit_time(&self) -> Option<Instant> {
        self.state.next_hit_time
    }

    /// Predicted instant at which the effect decays (absent while envenomed)
    pub fn decay_at(&self) -> Option<Instant> {
        self.state.decay_time
    }

    /// Tooltip for the toxin infobox, rendered against the current clock
    /// reading. Empty while the status value is negative or neutral.
    pub fn tooltip_text(&self) -> String {
        self.current_tooltip()
            .map(|tooltip| tooltip.render(self.clock.now()))
            .unwrap_or_default()
    }

    fn current_tooltip(&self) -> Option<Tooltip> {
        if self.state.last_value < 0 {
            return None;
        }
        let next_hit = self.state.next_hit_time?;
        let kind = if self.state.envenomed {
            ToxinKind::Venom
        } else {
            ToxinKind::Poison
        };
        Some(Tooltip {
            kind,
            damage: self.state.last_damage,
            next_hit,
            decay: self.state.decay_time,
        })
    }

    /// Withdraw every active infobox, then re-add whichever the new state
    /// calls for
    fn refresh_infoboxes(&mut self, value: i32, now: Instant, next_hit: Instant) {
        self.remove_infoboxes();

        if self.config.show_toxin_infoboxes && value > 1 {
            self.add_toxin_infobox(now, next_hit);
        }
        if self.config.show_antidote_infoboxes && value < -1 {
            self.add_antidote_infobox(value, now);
        }
    }

    fn add_toxin_infobox(&mut self, now: Instant, next_hit: Instant) {
        let kind = if self.state.envenomed {
            ToxinKind::Venom
        } else {
            ToxinKind::Poison
        };
        let Some(base) = self.icons.splat(kind) else {
            return;
        };

        let icon = base.with_badge(self.state.last_damage.to_string());
        let duration = next_hit.saturating_duration_since(now);
        let id = self.allocate_id();
        self.manager.add(Infobox::new(
            id,
            InfoboxKind::Toxin,
            icon,
            duration,
            TextTone::Danger,
            self.current_tooltip(),
        ));
        self.state.active.toxin = Some(id);
    }

    fn add_antidote_infobox(&mut self, value: i32, now: Instant) {
        let Some(kind) = classify_antidote(value) else {
            return;
        };
        let Some(icon) = self.icons.remedy(kind) else {
            return;
        };
        let Some(decay) = self.state.decay_time else {
            return;
        };

        if value <= VENOM_IMMUNITY_FLOOR {
            // The venom-immunity countdown runs over a shorter window than
            // the antidote decay itself
            let offset = Duration::from_millis(
                TOXIN_DECAY_MILLIS * u64::from(VENOM_IMMUNITY_FLOOR.unsigned_abs()),
            );
            let duration = decay.saturating_duration_since(now + offset);
            let id = self.allocate_id();
            self.manager.add(Infobox::new(
                id,
                InfoboxKind::Antivenom,
                icon,
                duration,
                TextTone::Immunity,
                None,
            ));
            self.state.active.antivenom = Some(id);
        } else {
            let duration = decay.saturating_duration_since(now);
            let id = self.allocate_id();
            self.manager.add(Infobox::new(
                id,
                InfoboxKind::Antidote,
                icon,
                duration,
                TextTone::Neutral,
                None,
            ));
            self.state.active.antidote = Some(id);
        }
    }

    fn remove_infoboxes(&mut self) {
        let ids = [
            self.state.active.toxin.take(),
            self.state.active.antivenom.take(),
            self.state.active.antidote.take(),
        ];
        for id in ids.into_iter().flatten() {
            debug!("withdrawing infobox {id:?}");
            self.manager.remove(id);
        }
    }

    fn allocate_id(&mut self) -> InfoboxId {
        let id = InfoboxId(self.state.next_id);
        self.state.next_id += 1;
        id
    }
}
