//! weapon_api - HTTP surface over the weapon catalog
//!
//! Routes:
//! - `GET /` liveness text
//! - `GET /api/weapons` all weapons for a player context (`?type=` filter)
//! - `GET /api/weapons/:name` one weapon for a player context
//! - `GET /api/types` weapon type labels
//! - `GET /api/rankings` weapons sorted by rating, best first
//!
//! Player context comes from the query string: `level`, `strength`,
//! `dexterity`, `intelligence`, `faith`, `arcane`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use weapon_core::{default_catalog, load_catalog, Catalog, CatalogError};

pub use config::ApiConfig;
pub use error::ApiError;

/// Shared, read-only state for handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: ApiConfig) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

/// Load the catalog named by the config, or the bundled one
pub fn build_catalog(config: &ApiConfig) -> Result<Catalog, CatalogError> {
    match &config.catalog_path {
        Some(path) => {
            let (catalog, report) = load_catalog(path, config.descriptions_path.as_deref())?;
            if !report.is_clean() {
                log::warn!(
                    "{} weapon records in {} were skipped",
                    report.skipped.len(),
                    path.display()
                );
            }
            Ok(catalog)
        }
        None => Ok(default_catalog()),
    }
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/weapons", get(handlers::list_weapons))
        .route("/api/weapons/:name", get(handlers::get_weapon))
        .route("/api/types", get(handlers::list_types))
        .route("/api/rankings", get(handlers::rankings))
        .layer(cors)
        .with_state(state)
}
