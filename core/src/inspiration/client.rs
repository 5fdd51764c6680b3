//! Thin adapter over the Gemini `generateContent` endpoint.
//!
//! The client performs exactly one attempt per call; retry policy belongs to
//! the caller, and the provider chooses to fall back instead of retrying. A
//! bounded timeout keeps the fallback path reachable under a hung connection.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::errors::InspirationError;
use crate::i18n::Language;

use super::Verse;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Seam between the provider and the remote service so tests can substitute
/// a scripted source.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// Whether a credential is configured. When false the provider serves
    /// the fallback without any network attempt.
    fn is_configured(&self) -> bool;

    /// Request one localized verse. Exactly one attempt, no retry.
    async fn request_verse(&self, language: Language) -> Result<Verse, InspirationError>;
}

pub struct RemoteInspirationClient {
    client: Client,
    credential: Option<String>,
    base_url: String,
    model: String,
}

impl RemoteInspirationClient {
    /// Build a client around an optional credential. A missing credential is
    /// not an error; it routes every request to the fallback path.
    pub fn new(credential: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("Osra-Core/0.1 (+https://github.com/osra)")
            .build()
            .context("failed to construct HTTP client")?;
        let credential = credential
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(Self {
            client,
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Read the credential once from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var("GEMINI_API_KEY").ok())
    }
}

#[async_trait]
impl VerseSource for RemoteInspirationClient {
    fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    async fn request_verse(&self, language: Language) -> Result<Verse, InspirationError> {
        let secret = self
            .credential
            .as_ref()
            .ok_or(InspirationError::RemoteUnavailable)?;
        let endpoint = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            secret
        );

        let payload = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{"text": build_prompt(language)}]
                }
            ],
            "generationConfig": {
                "temperature": 0.7,
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        let response = self
            .client
            .post(endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?
            .error_for_status()
            .map_err(transport_error)?;
        let body: Value = response
            .json()
            .await
            .map_err(|err| InspirationError::MalformedResponse(err.to_string()))?;

        parse_verse_reply(&body)
    }
}

fn build_prompt(language: Language) -> String {
    let lang_instruction = match language {
        Language::Ar => "in Arabic",
        Language::En => "in English",
    };
    format!(
        "Provide a short, inspiring Quranic verse or Hadith suitable for a family \
         dashboard {lang_instruction}. Focus on themes of patience, gratitude, family \
         bonding, or kindness. Return strictly JSON."
    )
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "text": {"type": "STRING", "description": "The text of the verse or hadith"},
            "source": {"type": "STRING", "description": "The surah/verse number or narrator"},
            "theme": {"type": "STRING", "description": "A very short 1-2 word theme"}
        },
        "required": ["text", "source", "theme"]
    })
}

/// Extract the JSON verse out of a `generateContent` reply and validate it.
fn parse_verse_reply(body: &Value) -> Result<Verse, InspirationError> {
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            InspirationError::MalformedResponse("reply carried no text part".to_string())
        })?;
    let verse: Verse = serde_json::from_str(text.trim())
        .map_err(|err| InspirationError::MalformedResponse(err.to_string()))?;
    if !verse.is_complete() {
        return Err(InspirationError::MalformedResponse(
            "one or more verse fields were empty".to_string(),
        ));
    }
    Ok(verse)
}

fn transport_error(err: reqwest::Error) -> InspirationError {
    if err.is_timeout() {
        InspirationError::NetworkFailure("request timed out".to_string())
    } else {
        InspirationError::NetworkFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_with(inner: &str) -> Value {
        json!({
            "candidates": [
                {"content": {"parts": [{"text": inner}]}}
            ]
        })
    }

    #[test]
    fn prompt_names_the_language_and_the_themes() {
        let ar = build_prompt(Language::Ar);
        let en = build_prompt(Language::En);
        assert!(ar.contains("in Arabic"));
        assert!(en.contains("in English"));
        for prompt in [ar, en] {
            assert!(prompt.contains("patience"));
            assert!(prompt.contains("gratitude"));
            assert!(prompt.contains("kindness"));
            assert!(prompt.contains("JSON"));
        }
    }

    #[test]
    fn schema_requires_all_three_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, vec!["text", "source", "theme"]);
    }

    #[test]
    fn parses_a_well_formed_reply() {
        let body = reply_with(
            r#"{"text": "Verily, with hardship comes ease.", "source": "Surah Ash-Sharh - Verse 6", "theme": "Patience"}"#,
        );
        let verse = parse_verse_reply(&body).unwrap();
        assert_eq!(verse.text, "Verily, with hardship comes ease.");
        assert_eq!(verse.theme, "Patience");
    }

    #[test]
    fn missing_field_is_a_malformed_response() {
        let body = reply_with(r#"{"text": "A verse", "source": "Somewhere"}"#);
        let err = parse_verse_reply(&body).unwrap_err();
        assert!(matches!(err, InspirationError::MalformedResponse(_)));
        assert_eq!(err.code(), "AI-2003");
    }

    #[test]
    fn empty_field_is_a_malformed_response() {
        let body = reply_with(r#"{"text": "A verse", "source": "Somewhere", "theme": "  "}"#);
        let err = parse_verse_reply(&body).unwrap_err();
        assert!(matches!(err, InspirationError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_payload_is_a_malformed_response() {
        let body = reply_with("Here is your verse: be patient!");
        assert!(matches!(
            parse_verse_reply(&body),
            Err(InspirationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn reply_without_candidates_is_a_malformed_response() {
        let body = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        assert!(matches!(
            parse_verse_reply(&body),
            Err(InspirationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn unconfigured_client_reports_itself() {
        let client = RemoteInspirationClient::new(None).unwrap();
        assert!(!client.is_configured());
        let client = RemoteInspirationClient::new(Some("   ".to_string())).unwrap();
        assert!(!client.is_configured());
        let client = RemoteInspirationClient::new(Some("key".to_string())).unwrap();
        assert!(client.is_configured());
    }
}
