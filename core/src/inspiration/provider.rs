//! Orchestrates the daily verse: remote when configured, fallback otherwise.

use std::sync::Arc;

use serde_json::json;

use crate::errors::InspirationError;
use crate::i18n::Language;
use crate::logging::EventLog;

use super::{fallback_verse, Verse, VerseSource};

/// Produces exactly one fully-populated [`Verse`] per request and never
/// surfaces an error to its caller.
pub struct InspirationProvider {
    source: Arc<dyn VerseSource>,
    events: Arc<EventLog>,
}

impl InspirationProvider {
    pub fn new(source: Arc<dyn VerseSource>, events: Arc<EventLog>) -> Arc<Self> {
        Arc::new(Self { source, events })
    }

    /// Fetch the verse for `language`. At most one outbound attempt, no
    /// retry; every failure collapses into the curated fallback.
    pub async fn daily_verse(&self, language: Language) -> Verse {
        if !self.source.is_configured() {
            log::debug!(
                "no inspiration credential configured, serving the {} fallback",
                language.code()
            );
            return fallback_verse(language);
        }

        match self.source.request_verse(language).await {
            Ok(verse) if verse.is_complete() => verse,
            Ok(_) => {
                self.note_failure(
                    language,
                    &InspirationError::MalformedResponse(
                        "remote verse had empty fields".to_string(),
                    ),
                );
                fallback_verse(language)
            }
            Err(err) => {
                self.note_failure(language, &err);
                fallback_verse(language)
            }
        }
    }

    fn note_failure(&self, language: Language, err: &InspirationError) {
        match err {
            // Expected when the credential disappears between checks; the
            // fallback is the normal path here, not a fault.
            InspirationError::RemoteUnavailable => {
                log::debug!("inspiration source unavailable: {err}");
            }
            _ => self.events.record(
                "warn",
                Some(err.code()),
                "inspiration",
                "Daily verse request failed",
                Some("Serving the static fallback"),
                Some(json!({
                    "language": language.code(),
                    "error": err.to_string(),
                })),
            ),
        }
    }
}
