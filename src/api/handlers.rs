use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;

use crate::analysis::{
    engagement_metrics, growth_trends, process_user_data, EngagementMetrics, GrowthTrend,
    UserAnalysisReport, UserFilter,
};
use crate::models::{CreateUserRequest, User};
use crate::store::{StoreError, UserStore};

pub struct AppState {
    pub store: Arc<dyn UserStore>,
    /// Report responses cached per canonical filter representation
    pub report_cache: Cache<String, Arc<UserAnalysisReport>>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn internal_error(message: String) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
}

/// Create a new user
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), HandlerError> {
    if payload.email.as_deref().is_some_and(str::is_empty) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Email cannot be empty".to_string(),
            }),
        ));
    }

    match state.store.insert(payload).await {
        Ok(user) => {
            // stored data changed, cached reports are stale
            state.report_cache.invalidate_all();
            Ok((StatusCode::CREATED, Json(user)))
        }
        Err(StoreError::Conflict) => Err((
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Email already registered".to_string(),
            }),
        )),
        Err(e) => Err(internal_error(format!("Failed to create user: {}", e))),
    }
}

/// Get a user by id
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<User>, HandlerError> {
    match state.store.get(id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "User not found".to_string(),
            }),
        )),
        Err(e) => Err(internal_error(format!("Failed to get user: {}", e))),
    }
}

/// List all stored users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, HandlerError> {
    match state.store.list().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => Err(internal_error(format!("Failed to list users: {}", e))),
    }
}

/// Run the analysis over the current store snapshot
///
/// Results are cached per filter combination for the configured TTL; any
/// user mutation invalidates the whole cache.
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<UserFilter>,
) -> Result<Json<Arc<UserAnalysisReport>>, HandlerError> {
    let key = filter.cache_key();
    if let Some(cached) = state.report_cache.get(&key).await {
        return Ok(Json(cached));
    }

    let users = state
        .store
        .list()
        .await
        .map_err(|e| internal_error(format!("Failed to list users: {}", e)))?;

    match process_user_data(&users, Some(&filter)) {
        Ok(report) => {
            let report = Arc::new(report);
            state
                .report_cache
                .insert(key, Arc::clone(&report))
                .await;
            Ok(Json(report))
        }
        Err(e) => {
            tracing::error!("Failed to generate report: {}", e);
            Err(internal_error("Failed to process user data".to_string()))
        }
    }
}

/// Growth trend series over the trailing twelve months
pub async fn get_growth(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GrowthTrend>>, HandlerError> {
    let users = state
        .store
        .list()
        .await
        .map_err(|e| internal_error(format!("Failed to list users: {}", e)))?;

    Ok(Json(growth_trends(&users, Utc::now())))
}

/// Engagement rates derived from update timestamps
pub async fn get_engagement(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EngagementMetrics>, HandlerError> {
    let users = state
        .store
        .list()
        .await
        .map_err(|e| internal_error(format!("Failed to list users: {}", e)))?;

    Ok(Json(engagement_metrics(&users, Utc::now())))
}

/// Health check endpoint
pub async fn health_check() -> Json<SuccessResponse> {
    Json(SuccessResponse {
        message: "OK".to_string(),
    })
}
