//! Weapon stats server
//!
//! Loads the weapon catalog once at startup and serves scaled stats and
//! ratings over HTTP. Config path: `WEAPON_API_CONFIG` (default
//! `weapon_api.toml`, missing file means defaults).

use std::path::PathBuf;
use weapon_api::{build_catalog, router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("WEAPON_API_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("weapon_api.toml"));
    let config = ApiConfig::load(&config_path)?;
    setup_logging(&config)?;

    let catalog = build_catalog(&config)?;
    log::info!("Catalog ready: {} weapons", catalog.len());

    let address = config.bind_address();
    let app = router(AppState::new(catalog, config));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    log::info!("Listening on http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}

fn setup_logging(config: &ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Utc::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(config.log_level_filter()?)
        .chain(std::io::stdout());

    if let Some(path) = &config.log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;
    Ok(())
}
