use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use tauri::Manager;

use osra_core::api::v1::{self, ApiState};
use osra_core::i18n::Language;
use osra_core::inspiration::{InspirationProvider, RemoteInspirationClient, VerseSource};
use osra_core::logging::EventLog;
use osra_core::state::DashboardState;

fn log_dir() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "Osra", "Osra") {
        proj.data_dir().join("logs")
    } else {
        std::env::temp_dir().join("Osra")
    }
}

fn init_logging() -> Option<LoggerHandle> {
    let spec = FileSpec::default().directory(log_dir()).basename("osra");
    match Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.log_to_file(spec).start())
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("file logging unavailable: {err}");
            None
        }
    }
}

fn main() {
    let _logger = init_logging();
    tauri::Builder::default()
        .setup(|app| {
            let events = Arc::new(EventLog::new());
            let dashboard = Arc::new(DashboardState::new(Language::default()));
            let client =
                RemoteInspirationClient::from_env().expect("failed to initialise verse client");
            if !client.is_configured() {
                log::info!("GEMINI_API_KEY not set, daily verse will use the static fallback");
            }
            let inspiration = InspirationProvider::new(Arc::new(client), events.clone());
            app.manage(ApiState {
                dashboard,
                inspiration,
                events,
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            v1::ping,
            v1::get_settings,
            v1::set_language,
            v1::ui_strings,
            v1::list_tasks,
            v1::toggle_task,
            v1::list_expenses,
            v1::add_expense,
            v1::expense_summary,
            v1::list_goals,
            v1::add_goal,
            v1::increment_goal,
            v1::delete_goal,
            v1::daily_verse,
            v1::list_events
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
