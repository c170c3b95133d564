//! Host icon seam

use toxin_core::{AntidoteKind, ToxinKind};

/// Cheap handle to a host-managed image, plus an optional damage badge.
///
/// The tracker never draws pixels itself; it names the asset and the
/// badge text, and the host's overlay subsystem composes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    asset: String,
    badge: Option<String>,
}

impl Icon {
    /// Wrap a host asset key
    pub fn new(asset: impl Into<String>) -> Self {
        Icon {
            asset: asset.into(),
            badge: None,
        }
    }

    /// Annotated copy with a damage numeral drawn over the centre.
    ///
    /// The shared base icon is left untouched; each cycle badges a fresh
    /// copy.
    pub fn with_badge(&self, text: impl Into<String>) -> Self {
        Icon {
            asset: self.asset.clone(),
            badge: Some(text.into()),
        }
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }
}

/// Image lookup supplied by the host runtime.
///
/// A missing asset is not an error; the corresponding infobox is simply
/// skipped for the cycle.
pub trait IconSource {
    /// Hit-splat sprite for the given toxin
    fn splat(&self, toxin: ToxinKind) -> Option<Icon>;

    /// Item image for the given antidote tier
    fn remedy(&self, antidote: AntidoteKind) -> Option<Icon>;
}
