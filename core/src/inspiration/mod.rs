//! Daily inspiration: fetch a localized verse from a generative-text service
//! with a deterministic offline fallback.
//!
//! The flow is deliberately simple: one outbound attempt, no retry, and any
//! failure collapses into the curated fallback so the home surface never
//! observes an error for this decorative feature.

pub mod client;
pub mod fallback;
pub mod provider;

pub use client::{RemoteInspirationClient, VerseSource};
pub use fallback::fallback_verse;
pub use provider::InspirationProvider;

use serde::{Deserialize, Serialize};

/// The localized inspirational record shown on the home surface. A verse
/// handed to callers is always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub text: String,
    pub source: String,
    pub theme: String,
}

impl Verse {
    /// True when all three fields carry non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.text.trim().is_empty()
            && !self.source.trim().is_empty()
            && !self.theme.trim().is_empty()
    }
}
