//! API errors and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use weapon_core::CatalogError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: String, value: String },
    #[error("Weapon not found: {0}")]
    WeaponNotFound(String),
    #[error("Catalog error: {0}")]
    Catalog(CatalogError),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::WeaponNotFound(name) => ApiError::WeaponNotFound(name),
            other => ApiError::Catalog(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            ApiError::WeaponNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let invalid = ApiError::InvalidParameter {
            name: "level".to_string(),
            value: "ten".to_string(),
        };
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let missing: ApiError = CatalogError::WeaponNotFound("Excalibur".to_string()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "Weapon not found: Excalibur");
    }
}
