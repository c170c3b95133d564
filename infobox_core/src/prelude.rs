//! Prelude module for convenient imports
//!
//! ```rust
//! use infobox_core::prelude::*;
//! ```

// Tracker
pub use crate::tracker::StatusTracker;

// Host seams
pub use crate::clock::{GameClock, SystemClock};
pub use crate::icon::{Icon, IconSource};
pub use crate::infobox::{Infobox, InfoboxId, InfoboxKind, InfoboxManager, TextTone};

// Configuration
pub use crate::config::{ConfigError, TrackerConfig};

// Re-exports from toxin_core
pub use toxin_core::{AntidoteKind, StatusRegime, ToxinKind};
