//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a small executable that exercises `dashkit_core` end to end.
//! - Keep output deterministic apart from the "today" date.

use chrono::Local;
use dashkit_core::db::open_db_in_memory;
use dashkit_core::seed::{seed_board, seed_events};
use dashkit_core::{
    default_log_level, init_logging, BoardStore, ColumnId, DragLocation, DragOutcome, EventStore,
    SettingsService, SqliteSettingsRepository,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "DASHKIT_LOG_DIR";

fn main() -> ExitCode {
    let log_dir = std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("dashkit-logs"));
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("dashkit: logging disabled: {err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("dashkit: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("dashkit_core ping={}", dashkit_core::ping());
    println!("dashkit_core version={}", dashkit_core::core_version());

    let mut board = BoardStore::new(seed_board()?);
    board.apply_drag(DragOutcome::Moved {
        source: DragLocation::new(ColumnId::Todo, 0),
        destination: DragLocation::new(ColumnId::InProgress, 0),
    });
    for column in board.snapshot().columns() {
        println!("board column={} tasks={}", column.id, column.len());
    }

    let today = Local::now().date_naive();
    let events = EventStore::with_events(seed_events(today))?;
    for event in events.events_on(today) {
        println!("today event={} type={}", event.title, event.kind.as_str());
    }

    let conn = open_db_in_memory()?;
    let settings = SettingsService::new(SqliteSettingsRepository::new(&conn));
    let loaded = settings.load()?;
    println!(
        "settings theme_mode={} accent={}",
        loaded.theme_mode.as_str(),
        loaded.accent_hex()
    );

    Ok(())
}
