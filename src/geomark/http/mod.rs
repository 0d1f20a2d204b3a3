//! HTTP layer: axum router, handlers, and the error-to-status mapping.
//!
//! This is the only module that knows about status codes and JSON response
//! shapes. Handlers authenticate via [`auth::AuthUser`], take the store lock,
//! and dispatch through the [`FeatureApi`] facade; ownership and validation
//! decisions come back as [`GeomarkError`] values and are translated here.

use std::sync::Arc;

use axum::extract::{FromRef, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::api::FeatureApi;
use crate::error::GeomarkError;
use crate::model::{FeatureId, FeatureRecord};
use crate::store::FeatureStore;

pub mod auth;

use auth::{AuthUser, SessionStore};

/// Shared server state: the feature API behind a lock, plus the session map.
/// The lock is the storage engine's atomicity boundary; each request holds it
/// for exactly one operation, so last writer wins on concurrent updates.
pub struct AppState<S: FeatureStore> {
    pub api: Arc<RwLock<FeatureApi<S>>>,
    pub sessions: SessionStore,
}

impl<S: FeatureStore> AppState<S> {
    pub fn new(store: S, sessions: SessionStore) -> Self {
        Self {
            api: Arc::new(RwLock::new(FeatureApi::new(store))),
            sessions,
        }
    }
}

impl<S: FeatureStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

impl<S: FeatureStore> FromRef<AppState<S>> for SessionStore {
    fn from_ref(state: &AppState<S>) -> Self {
        state.sessions.clone()
    }
}

/// Request-level errors, translated to HTTP at the boundary.
#[derive(Debug)]
pub enum ApiError {
    Unauthenticated,
    Unverified,
    App(GeomarkError),
}

impl From<GeomarkError> for ApiError {
    fn from(err: GeomarkError) -> Self {
        Self::App(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Unauthenticated"})),
            )
                .into_response(),
            ApiError::Unverified => (
                StatusCode::FORBIDDEN,
                Json(json!({"message": "Account not verified"})),
            )
                .into_response(),
            ApiError::App(GeomarkError::Validation(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "message": "The given data was invalid",
                    "errors": errors,
                })),
            )
                .into_response(),
            // NotFound is folded into Unauthorized so callers cannot probe
            // for the existence of other users' records.
            ApiError::App(GeomarkError::Unauthorized | GeomarkError::FeatureNotFound(_)) => (
                StatusCode::FORBIDDEN,
                Json(json!({"message": "Unauthorized"})),
            )
                .into_response(),
            ApiError::App(err) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeatureRequest {
    feature: Value,
}

pub fn router<S>(state: AppState<S>) -> Router
where
    S: FeatureStore + Send + Sync + 'static,
{
    Router::new()
        .route("/maps", get(list_features::<S>))
        .route("/feature", post(create_feature::<S>))
        .route(
            "/features/{id}",
            put(update_feature::<S>).delete(delete_feature::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_features<S>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Value>>, ApiError>
where
    S: FeatureStore + Send + Sync + 'static,
{
    let api = state.api.read().await;
    let records = api.list_features(user.id)?;
    Ok(Json(
        records.iter().map(FeatureRecord::document_with_id).collect(),
    ))
}

async fn create_feature<S>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
    Json(body): Json<FeatureRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
    S: FeatureStore + Send + Sync + 'static,
{
    let record = state
        .api
        .write()
        .await
        .create_feature(user.id, &body.feature)?;
    Ok((StatusCode::CREATED, Json(record.document_with_id())))
}

async fn update_feature<S>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
    Path(id): Path<FeatureId>,
    Json(body): Json<FeatureRequest>,
) -> Result<Json<FeatureRecord>, ApiError>
where
    S: FeatureStore + Send + Sync + 'static,
{
    let record = state
        .api
        .write()
        .await
        .update_feature(user.id, id, &body.feature)?;
    Ok(Json(record))
}

async fn delete_feature<S>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
    Path(id): Path<FeatureId>,
) -> Result<StatusCode, ApiError>
where
    S: FeatureStore + Send + Sync + 'static,
{
    state.api.write().await.delete_feature(user.id, id)?;
    Ok(StatusCode::NO_CONTENT)
}
