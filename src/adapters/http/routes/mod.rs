pub mod account;
pub mod admins;
pub mod auth;

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/auth", auth::router())
        .nest("/account", account::router(app_state.clone()))
        .nest("/admins", admins::router(app_state))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
