//! infobox_core - Toxin status tracking and infobox bookkeeping
//!
//! This library provides:
//! - StatusTracker: Recomputes predicted damage and timings on each status change
//! - Infobox / InfoboxManager: Timer widgets owned by the tracker
//! - IconSource / GameClock: Host-supplied asset and time seams
//! - TrackerConfig: Display options loaded from TOML
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use infobox_core::prelude::*;
//!
//! let config = TrackerConfig::load_from_path(Path::new("config/tracker.toml"))?;
//! let mut tracker = StatusTracker::new(config, SystemClock, icons, manager);
//! tracker.start();
//!
//! // Host notification handler, invoked serially:
//! tracker.status_changed(status_value, current_tick);
//! ```

pub mod clock;
pub mod config;
pub mod icon;
pub mod infobox;
pub mod prelude;
pub mod tooltip;
pub mod tracker;

// Core API - what most users need
pub use tracker::StatusTracker;
pub use infobox::{Infobox, InfoboxId, InfoboxKind, InfoboxManager, TextTone};
pub use icon::{Icon, IconSource};
pub use clock::{GameClock, SystemClock};

// Configuration
pub use config::{ConfigError, TrackerConfig};

// Tooltip rendering
pub use tooltip::{format_countdown, Tooltip};

// Re-export commonly needed toxin_core types
pub use toxin_core::{AntidoteKind, StatusRegime, ToxinKind};
