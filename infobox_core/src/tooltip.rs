//! Render-time tooltip text for the toxin infobox

use std::time::Instant;

use toxin_core::ToxinKind;

/// Snapshot of the state a toxin tooltip renders from.
///
/// The text is produced at display time against the current clock
/// reading, so the countdowns stay live while the snapshot itself does
/// not change between status updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub kind: ToxinKind,
    pub damage: i32,
    pub next_hit: Instant,
    pub decay: Option<Instant>,
}

impl Tooltip {
    /// Two lines for poison, one for venom (venom never cures on its own)
    pub fn render(&self, now: Instant) -> String {
        let mut text = format!(
            "Next {} damage: {}\nTime until damage: {}",
            self.kind,
            self.damage,
            format_countdown(now, self.next_hit)
        );
        if self.kind == ToxinKind::Poison {
            if let Some(decay) = self.decay {
                text.push_str(&format!(
                    "\nTime until cure: {}",
                    format_countdown(now, decay)
                ));
            }
        }
        text
    }
}

/// Minutes and seconds until `end`, clamped to `0:00` once the instant
/// has passed.
pub fn format_countdown(now: Instant, end: Instant) -> String {
    let left = end.saturating_duration_since(now);
    let seconds = left.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
