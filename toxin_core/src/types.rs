//! Core types for the toxin status model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::VENOM_THRESHOLD;

/// Which damage-over-time affliction the status value encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToxinKind {
    Poison,
    Venom,
}

impl fmt::Display for ToxinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToxinKind::Poison => write!(f, "poison"),
            ToxinKind::Venom => write!(f, "venom"),
        }
    }
}

/// Antidote tier, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntidoteKind {
    Antipoison,
    SuperAntipoison,
    AntidotePlus,
    AntidotePlusPlus,
    Antivenom,
    AntivenomPlus,
}

impl AntidoteKind {
    /// Get all antidote tiers, weakest first
    pub fn all() -> &'static [AntidoteKind] {
        &[
            AntidoteKind::Antipoison,
            AntidoteKind::SuperAntipoison,
            AntidoteKind::AntidotePlus,
            AntidoteKind::AntidotePlusPlus,
            AntidoteKind::Antivenom,
            AntidoteKind::AntivenomPlus,
        ]
    }

    /// Whether this tier also blocks venom application
    pub fn grants_venom_immunity(&self) -> bool {
        matches!(self, AntidoteKind::Antivenom | AntidoteKind::AntivenomPlus)
    }
}

impl fmt::Display for AntidoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntidoteKind::Antipoison => write!(f, "antipoison"),
            AntidoteKind::SuperAntipoison => write!(f, "super antipoison"),
            AntidoteKind::AntidotePlus => write!(f, "antidote+"),
            AntidoteKind::AntidotePlusPlus => write!(f, "antidote++"),
            AntidoteKind::Antivenom => write!(f, "antivenom"),
            AntidoteKind::AntivenomPlus => write!(f, "antivenom+"),
        }
    }
}

/// Total classification of a raw status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRegime {
    /// No toxin and no protection
    Neutral,
    /// Actively poisoned or envenomed
    Toxin(ToxinKind),
    /// Under antidote protection
    Protected(AntidoteKind),
}

impl StatusRegime {
    /// Classify a raw status value
    pub fn of(value: i32) -> StatusRegime {
        if value == 0 {
            StatusRegime::Neutral
        } else if value > 0 {
            let kind = if is_venom(value) {
                ToxinKind::Venom
            } else {
                ToxinKind::Poison
            };
            StatusRegime::Toxin(kind)
        } else {
            match classify_antidote(value) {
                Some(kind) => StatusRegime::Protected(kind),
                None => StatusRegime::Neutral,
            }
        }
    }
}

/// Whether a status value encodes venom rather than poison
pub fn is_venom(value: i32) -> bool {
    value >= VENOM_THRESHOLD
}

/// Map a status value to the antidote tier protecting the player.
///
/// First matching threshold wins; the tiers are mutually exclusive by
/// construction. Values below the deepest tier carry no protection.
pub fn classify_antidote(value: i32) -> Option<AntidoteKind> {
    if value >= -5 {
        Some(AntidoteKind::Antipoison)
    } else if value >= -20 {
        // Super antipoison or Sanfew serum
        Some(AntidoteKind::SuperAntipoison)
    } else if value >= -30 {
        Some(AntidoteKind::AntidotePlus)
    } else if value >= -40 {
        Some(AntidoteKind::AntidotePlusPlus)
    } else if value >= -41 {
        Some(AntidoteKind::Antivenom)
    } else if value >= -50 {
        Some(AntidoteKind::AntivenomPlus)
    } else {
        None
    }
}
