//! Timetable Query CLI
//!
//! Diagnostic harness for the schedule resolution engine: runs a single
//! query against the configured schedule documents and prints the structured
//! answer as JSON. It is not the chat presentation layer — rendering for end
//! users lives outside this crate.
//!
//! # Usage
//!
//! ```bash
//! TIMETABLE_DIR=./data cargo run --bin timetable-query -- today
//! TIMETABLE_DIR=./data cargo run --bin timetable-query -- next
//! TIMETABLE_DIR=./data cargo run --bin timetable-query -- weekday 2
//! ```
//!
//! # Environment Variables
//!
//! - `TIMETABLE_DIR`: directory with the two schedule documents (required)
//! - `TIMETABLE_ODD_FILE` / `TIMETABLE_EVEN_FILE`: document file names
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timetable_rust::config::StoreConfig;
use timetable_rust::services::ScheduleResolver;
use timetable_rust::store::{CachedScheduleStore, FileScheduleStore};

const USAGE: &str = "usage: timetable-query <today|tomorrow|week|weekday N|current|next|room>";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = StoreConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(dir = %config.dir.display(), "using schedule document directory");

    let store = Arc::new(CachedScheduleStore::new(FileScheduleStore::from_config(
        &config,
    )));
    let resolver = ScheduleResolver::new(store);

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("today");
    let now = Utc::now();

    let output = match command {
        "today" => serde_json::to_string_pretty(&resolver.schedule_today(now)?)?,
        "tomorrow" => serde_json::to_string_pretty(&resolver.schedule_tomorrow(now)?)?,
        "week" => serde_json::to_string_pretty(&resolver.working_days(now)?)?,
        "weekday" => {
            let index: u8 = args
                .get(1)
                .ok_or_else(|| anyhow::anyhow!("weekday requires an index 0..6"))?
                .parse()?;
            serde_json::to_string_pretty(&resolver.schedule_for_weekday(now, index)?)?
        }
        "current" => serde_json::to_string_pretty(&resolver.current_lesson(now)?)?,
        "next" => serde_json::to_string_pretty(&resolver.next_lesson(now)?)?,
        "room" => serde_json::to_string_pretty(&resolver.current_room(now)?)?,
        other => anyhow::bail!("unknown command {other:?}\n{USAGE}"),
    };

    println!("{output}");
    Ok(())
}
