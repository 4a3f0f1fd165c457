//! Thin HTTP handlers: parse the query, evaluate against the catalog, serialize

use crate::error::ApiError;
use crate::models::WeaponQuery;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::collections::HashMap;
use weapon_core::WeaponSummary;

/// Liveness check
pub async fn index() -> &'static str {
    "Weapon stats API is running!"
}

/// Every weapon evaluated for the request's context
pub async fn list_weapons(
    State(app_state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<WeaponSummary>>, ApiError> {
    let query = WeaponQuery::from_params(&params)?;
    let weapons = app_state
        .catalog
        .instances(&query.context, query.weapon_type.as_deref());

    log::debug!("Serving {} weapons", weapons.len());
    Ok(Json(weapons.iter().map(WeaponSummary::from).collect()))
}

/// One weapon evaluated for the request's context
pub async fn get_weapon(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<WeaponSummary>, ApiError> {
    let query = WeaponQuery::from_params(&params)?;
    let weapon = app_state.catalog.instance(&name, &query.context)?;

    log::debug!(
        "Evaluated '{}' at +{} -> rating {:.2}",
        weapon.name(),
        weapon.level(),
        weapon.value()
    );
    Ok(Json(WeaponSummary::from(&weapon)))
}

/// Weapon type labels
pub async fn list_types(State(app_state): State<AppState>) -> Json<Vec<String>> {
    Json(app_state.catalog.weapon_types().map(str::to_string).collect())
}

/// Weapons sorted by rating for the request's context, best first
pub async fn rankings(
    State(app_state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<WeaponSummary>>, ApiError> {
    let query = WeaponQuery::from_params(&params)?;
    let ranked = app_state
        .catalog
        .ranked(&query.context, query.weapon_type.as_deref());
    Ok(Json(ranked.iter().map(WeaponSummary::from).collect()))
}
