use thiserror::Error;

use crate::geojson::ValidationErrors;
use crate::model::FeatureId;

#[derive(Error, Debug)]
pub enum GeomarkError {
    #[error("Feature not found: {0}")]
    FeatureNotFound(FeatureId),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, GeomarkError>;
