//! Version 1 of the Tauri IPC API.
//!
//! Commands are intentionally thin wrappers that validate input, delegate to
//! the session state or the inspiration provider, and return JSON-friendly
//! payloads to the UI.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tauri::State;
use time::OffsetDateTime;

use crate::catalog::{Expense, Goal, Task};
use crate::i18n::{self, Language};
use crate::inspiration::InspirationProvider;
use crate::logging::{EventLog, EventRecord};
use crate::state::{DailyVerseView, DashboardState, ExpenseSummary};

/// Shared state injected into each Tauri command handler.
#[derive(Clone)]
pub struct ApiState {
    pub dashboard: Arc<DashboardState>,
    pub inspiration: Arc<InspirationProvider>,
    pub events: Arc<EventLog>,
}

/// Simple health-check endpoint for UI components.
#[tauri::command]
pub fn ping() -> serde_json::Value {
    json!({
        "ok": true,
        "ts": OffsetDateTime::now_utc().unix_timestamp(),
    })
}

/// Active locale and its text direction.
#[derive(Serialize)]
pub struct SettingsView {
    pub language: Language,
    pub dir: &'static str,
}

#[tauri::command]
pub fn get_settings(state: State<ApiState>) -> SettingsView {
    let language = state.dashboard.language();
    SettingsView {
        language,
        dir: language.dir(),
    }
}

#[derive(Deserialize)]
pub struct SetLanguageInput {
    pub language: String,
}

/// Switch the active language. Every mock dataset is reseeded and pending
/// edits are discarded.
#[tauri::command]
pub fn set_language(state: State<ApiState>, input: SetLanguageInput) -> SettingsView {
    let language = Language::from_code(&input.language);
    state.dashboard.set_language(language);
    state.events.record(
        "info",
        Some("LNG-0001"),
        "i18n",
        "Active language changed",
        Some("Mock datasets were reseeded"),
        Some(json!({ "language": language.code() })),
    );
    SettingsView {
        language,
        dir: language.dir(),
    }
}

/// The UI string catalog for the active language.
#[tauri::command]
pub fn ui_strings(state: State<ApiState>) -> BTreeMap<&'static str, &'static str> {
    i18n::strings_for(state.dashboard.language())
}

#[tauri::command]
pub fn list_tasks(state: State<ApiState>) -> Vec<Task> {
    state.dashboard.tasks()
}

#[derive(Deserialize)]
pub struct ToggleTaskInput {
    pub id: String,
}

#[tauri::command]
pub fn toggle_task(state: State<ApiState>, input: ToggleTaskInput) -> Result<Task, String> {
    state
        .dashboard
        .toggle_task(&input.id)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn list_expenses(state: State<ApiState>) -> Vec<Expense> {
    state.dashboard.expenses()
}

#[derive(Deserialize)]
pub struct AddExpenseInput {
    pub category: String,
    pub amount: i64,
    pub color: Option<String>,
    pub date: Option<String>,
}

#[tauri::command]
pub fn add_expense(state: State<ApiState>, input: AddExpenseInput) -> Result<Expense, String> {
    state
        .dashboard
        .add_expense(input.category, input.amount, input.color, input.date)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn expense_summary(state: State<ApiState>) -> ExpenseSummary {
    state.dashboard.expense_summary()
}

#[tauri::command]
pub fn list_goals(state: State<ApiState>) -> Vec<Goal> {
    state.dashboard.goals()
}

#[derive(Deserialize)]
pub struct AddGoalInput {
    pub title: String,
    pub target: i64,
    pub unit: Option<String>,
}

#[tauri::command]
pub fn add_goal(state: State<ApiState>, input: AddGoalInput) -> Result<Goal, String> {
    state
        .dashboard
        .add_goal(input.title, input.target, input.unit)
        .map_err(|e| e.to_string())
}

#[derive(Deserialize)]
pub struct GoalIdInput {
    pub id: String,
}

#[tauri::command]
pub fn increment_goal(state: State<ApiState>, input: GoalIdInput) -> Result<Goal, String> {
    state
        .dashboard
        .increment_goal(&input.id)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_goal(state: State<ApiState>, input: GoalIdInput) -> Result<(), String> {
    state
        .dashboard
        .delete_goal(&input.id)
        .map_err(|e| e.to_string())
}

/// Fetch the daily verse for the active language. The reply echoes the
/// language it was requested for; when the language changes mid-flight the
/// stale result is not stored and the panel should discard it.
#[tauri::command]
pub async fn daily_verse(state: State<'_, ApiState>) -> Result<DailyVerseView, String> {
    let (language, generation) = state.dashboard.begin_verse_request();
    let verse = state.inspiration.daily_verse(language).await;
    let view = DailyVerseView { language, verse };
    if !state.dashboard.store_verse(generation, view.clone()) {
        log::debug!("discarding stale daily verse for {}", language.code());
    }
    Ok(view)
}

/// Return recent diagnostic events, newest first.
#[tauri::command]
pub fn list_events(state: State<ApiState>, limit: Option<usize>) -> Vec<EventRecord> {
    state.events.recent(limit)
}
