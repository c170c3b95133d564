//! Fixed game-balance constants
//!
//! These are observed client values, not tunables. They are preserved
//! literally so the predicted timings line up with the live game.

/// Length of one game tick in milliseconds
pub const GAME_TICK_MILLIS: u64 = 600;

/// Game ticks between two toxin damage hits
pub const TOXIN_TICK_LENGTH: u32 = 30;

/// Milliseconds of decay contributed by each unit of status value
pub const TOXIN_DECAY_MILLIS: u64 = 18_000;

/// Status values at or above this encode venom rather than poison
pub const VENOM_THRESHOLD: i32 = 1_000_000;

/// Venom damage cap; the status value keeps increasing past it
pub const VENOM_MAX_DAMAGE: i32 = 20;

/// Status value at or below which venom cannot be applied.
///
/// Its magnitude, in decay units, is also the offset of the antivenom
/// countdown window against the decay instant.
pub const VENOM_IMMUNITY_FLOOR: i32 = -41;
