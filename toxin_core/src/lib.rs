//! toxin_core - Poison and venom mechanics for the status tracker
//!
//! This library provides:
//! - StatusRegime: Classification of the raw in-game status value
//! - next_damage: The two damage curves (poison and venom)
//! - classify_antidote: The antidote threshold ladder
//! - TickSchedule: Predicting the next damage hit and the decay instant
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::time::Instant;
//! use toxin_core::{is_venom, next_damage, TickSchedule};
//!
//! // Status value polled from the game client
//! let value = 12;
//!
//! let mut schedule = TickSchedule::new();
//! schedule.reschedule(current_tick, true);
//!
//! let next_hit = schedule.next_hit_time(Instant::now(), current_tick);
//! let damage = next_damage(value, is_venom(value));
//! println!("{} damage expected at {:?}", damage, next_hit);
//! ```

pub mod constants;
pub mod damage;
pub mod schedule;
pub mod types;

// Core API - what most users need
pub use damage::next_damage;
pub use schedule::{decay_time, TickSchedule};
pub use types::{classify_antidote, is_venom, AntidoteKind, StatusRegime, ToxinKind};
