// src/main.rs
use energy_dash_locale::core::constants::{APP_TITLE, VERSION};
use energy_dash_locale::{create_handler, Config, LanguageStore, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(path).await?,
        None => Config::load().await?,
    };

    env_logger::Builder::new()
        .filter_level(config.log_level_filter())
        .parse_default_env()
        .init();

    log::info!("{} v{}", APP_TITLE, VERSION);

    let handler = create_handler(&config).await?;
    let overlay = tokio::spawn(watch_overlay(handler.store().clone()));

    println!("{}", handler.store().translate("app.title"));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let result = handler.handle_input(&line).await;
        if !result.message.is_empty() {
            println!("{}", result.message);
        }
        if result.should_exit {
            break;
        }
    }

    // stdin closed without `exit`: still let a pending change commit
    handler.store().settle().await;
    overlay.abort();
    Ok(())
}

/// Stand-in for the UI overlay: prints whenever it shows or hides.
async fn watch_overlay(store: LanguageStore) {
    let mut rx = store.subscribe();
    let mut shown = rx.borrow().is_changing_language;

    while rx.changed().await.is_ok() {
        let state = *rx.borrow_and_update();
        if state.is_changing_language != shown {
            shown = state.is_changing_language;
            if shown {
                println!("[overlay] {}", store.translate("overlay.changing_language"));
            } else {
                println!("[overlay] {} ({})", store.translate("app.title"), state.language);
            }
        }
    }
}
