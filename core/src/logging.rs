//! Structured diagnostics for the dashboard session.
//!
//! The journal is a capped in-memory ring: the application holds no database
//! and persists nothing across launches, so diagnostics live exactly as long
//! as the session they describe. Every record is mirrored to the `log` facade
//! so the app shell's file logger sees the same stream.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

const EVENT_CAPACITY: usize = 512;

/// One structured diagnostic entry surfaced to the debugger UI.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub id: String,
    pub ts: i64,
    pub level: String,
    pub code: Option<String>,
    pub module: String,
    pub message: String,
    pub explain: Option<String>,
    pub data: Option<Value>,
}

/// Capped, newest-last journal of [`EventRecord`]s.
#[derive(Default)]
pub struct EventLog {
    entries: Mutex<VecDeque<EventRecord>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, dropping the oldest entry once the cap is reached.
    pub fn record(
        &self,
        level: &str,
        code: Option<&str>,
        module: &str,
        message: &str,
        explain: Option<&str>,
        data: Option<Value>,
    ) {
        let record = EventRecord {
            id: Uuid::new_v4().to_string(),
            ts: OffsetDateTime::now_utc().unix_timestamp(),
            level: level.to_string(),
            code: code.map(str::to_string),
            module: module.to_string(),
            message: message.to_string(),
            explain: explain.map(str::to_string),
            data,
        };
        mirror_to_log(&record);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() == EVENT_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(record);
    }

    /// Return events newest first, optionally capped at `limit`.
    pub fn recent(&self, limit: Option<usize>) -> Vec<EventRecord> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let take = limit.unwrap_or(entries.len());
        entries.iter().rev().take(take).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn mirror_to_log(record: &EventRecord) {
    let code = record.code.as_deref().unwrap_or("-");
    match record.level.as_str() {
        "error" => log::error!("[{}] {} {}", record.module, code, record.message),
        "warn" => log::warn!("[{}] {} {}", record.module, code, record.message),
        "debug" => log::debug!("[{}] {} {}", record.module, code, record.message),
        _ => log::info!("[{}] {} {}", record.module, code, record.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_returns_newest_first() {
        let journal = EventLog::new();
        journal.record("info", Some("T-0001"), "test", "first", None, None);
        journal.record("warn", Some("T-0002"), "test", "second", None, None);

        let events = journal.recent(None);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "second");
        assert_eq!(events[1].message, "first");
    }

    #[test]
    fn recent_honours_limit() {
        let journal = EventLog::new();
        for i in 0..5 {
            journal.record("info", None, "test", &format!("event {i}"), None, None);
        }
        let events = journal.recent(Some(2));
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "event 4");
    }

    #[test]
    fn journal_is_capped() {
        let journal = EventLog::new();
        for i in 0..(EVENT_CAPACITY + 40) {
            journal.record("info", None, "test", &format!("event {i}"), None, None);
        }
        assert_eq!(journal.len(), EVENT_CAPACITY);
        let newest = journal.recent(Some(1));
        assert_eq!(newest[0].message, format!("event {}", EVENT_CAPACITY + 39));
    }
}
