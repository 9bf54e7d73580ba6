use chrono::Local;
use dotenvy::dotenv;

use gastrotrack::{
    handlers::{refresh, DataState},
    models::MonthCursor,
    snapshot::load_snapshot,
    utils::config::Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    env_logger::init();

    let config = Config::from_env()?;

    // The only clock read; everything below takes `today` explicitly.
    let today = config.today.unwrap_or_else(|| Local::now().date_naive());
    let cursor = config
        .display_month
        .unwrap_or_else(|| MonthCursor::containing(today));

    log::info!("refreshing dashboard for {} (today {})", cursor.title(), today);

    let source = load_snapshot(&config.snapshot_path).await;
    let state = refresh(source, cursor, today, &config);

    println!("{}", serde_json::to_string_pretty(&state)?);

    if let DataState::Unavailable { .. } = state {
        std::process::exit(2);
    }
    Ok(())
}
