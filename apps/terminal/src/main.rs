//! # POS Terminal Entry Point
//!
//! Runs the terminal's view layer against an in-memory store and a headless
//! window, driven from the console.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load UI config (ui.toml, then POS_UI_* overrides)
//! 3. Seed the in-memory store
//! 4. Build the session (store, host, console dialogs)
//! 5. Start effects (resize listener, clock, theme, store watchers)
//! 6. Read commands until `quit` or end of input
//! 7. Stop the session, releasing listeners and timers

mod commands;
mod console;

use std::sync::Arc;

use pos_view_core::ShopSettings;
use pos_view_state::{HeadlessWindow, MemoryStore, SessionBuilder, StoreData, UiConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::console::{ConsoleDialogs, LineReader};

/// Window width the headless host starts with.
const INITIAL_WIDTH_PX: u32 = 1280;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = UiConfig::load_or_default(None);
    let store = Arc::new(MemoryStore::new(seed_data(config.favorites())));
    let host = Arc::new(HeadlessWindow::new(INITIAL_WIDTH_PX));
    let input = Arc::new(LineReader::stdin());
    let dialogs = Arc::new(ConsoleDialogs::new(Arc::clone(&input)));

    let session = SessionBuilder::new(config)
        .with_store(store.clone())
        .with_host(host.clone())
        .with_confirmer(dialogs.clone())
        .with_prompter(dialogs)
        .build()?;

    session.start()?;
    info!(date = %session.manager.current_date(), "POS terminal ready");
    println!("POS terminal. Type `help` for commands.");

    while let Some(line) = input.read_line("> ").await {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(%e, "Rejected console input");
                println!("{e}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        let output = commands::execute(command, &session, &store, &host).await;
        match output {
            serde_json::Value::String(text) => println!("{text}"),
            other => println!("{}", serde_json::to_string_pretty(&other)?),
        }
    }

    session.stop();
    info!("POS terminal stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pos_view_state=trace` - Show clock ticks and focus moves
/// - Default: INFO, DEBUG for the view crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pos_view=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A small bilingual menu so every icon rule has something to match.
fn seed_data(favorites: &str) -> StoreData {
    let categories = [
        favorites,
        "เครื่องดื่ม",
        "Coffee & Tea",
        "ข้าว",
        "Noodles",
        "Desserts",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    StoreData {
        categories,
        active_category: favorites.to_string(),
        shop_settings: ShopSettings {
            theme: None,
            is_keyboard_nav_enabled: true,
        },
        ..StoreData::default()
    }
}
