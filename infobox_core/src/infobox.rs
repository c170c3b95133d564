//! Timer infoboxes owned by the tracker

use std::time::{Duration, Instant};

use crate::icon::Icon;
use crate::tooltip::Tooltip;

/// Identifier for a displayed infobox, allocated by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoboxId(pub(crate) u64);

/// The three infobox categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoboxKind {
    /// Active poison or venom: counts down to the next damage hit
    Toxin,
    /// Antipoison protection: counts down to the decay instant
    Antidote,
    /// Antivenom protection: counts down the venom-immunity window
    Antivenom,
}

/// Countdown text colour hint for the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    /// The countdown ends at the next damage hit
    Danger,
    /// The countdown ends before the decay instant (venom-immunity window)
    Immunity,
    /// Everything else
    Neutral,
}

/// An on-screen countdown widget.
///
/// The countdown is advisory; it never drives tracker logic. The host
/// renders the icon, runs the timer down, and queries the tooltip at
/// display time.
#[derive(Debug, Clone)]
pub struct Infobox {
    id: InfoboxId,
    kind: InfoboxKind,
    icon: Icon,
    duration: Duration,
    tone: TextTone,
    tooltip: Option<Tooltip>,
}

impl Infobox {
    pub(crate) fn new(
        id: InfoboxId,
        kind: InfoboxKind,
        icon: Icon,
        duration: Duration,
        tone: TextTone,
        tooltip: Option<Tooltip>,
    ) -> Self {
        Infobox {
            id,
            kind,
            icon,
            duration,
            tone,
            tooltip,
        }
    }

    pub fn id(&self) -> InfoboxId {
        self.id
    }

    pub fn kind(&self) -> InfoboxKind {
        self.kind
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Time remaining when the infobox was created
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn tone(&self) -> TextTone {
        self.tone
    }

    /// Tooltip text rendered against the current clock reading.
    ///
    /// Antidote-category infoboxes carry no tooltip and render empty.
    pub fn tooltip_text(&self, now: Instant) -> String {
        self.tooltip
            .as_ref()
            .map(|tooltip| tooltip.render(now))
            .unwrap_or_default()
    }
}

/// Overlay subsystem seam: displays and withdraws infoboxes.
///
/// Implementations must treat removal of an id that is not displayed as
/// a safe no-op.
pub trait InfoboxManager {
    fn add(&mut self, infobox: Infobox);
    fn remove(&mut self, id: InfoboxId);
}
