use axum::{
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::config::CacheConfig;
use crate::store::UserStore;

use super::handlers::{
    create_user, get_engagement, get_growth, get_report, get_user, health_check, list_users,
    AppState,
};

pub fn create_api_router(store: Arc<dyn UserStore>, cache: &CacheConfig) -> Router {
    let report_cache = Cache::builder()
        .max_capacity(cache.max_entries)
        .time_to_live(Duration::from_secs(cache.ttl_secs))
        .build();

    let state = Arc::new(AppState {
        store,
        report_cache,
    });

    let api_routes = Router::new()
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/analytics/report", get(get_report))
        .route("/analytics/growth", get(get_growth))
        .route("/analytics/engagement", get(get_engagement))
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}
