use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::validators,
};

#[derive(Deserialize)]
struct LoginPayload {
    email: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshPayload {
    refresh_token: String,
}

#[derive(Deserialize)]
struct ForgotPasswordPayload {
    email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordPayload {
    token: String,
    new_password: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
}

async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<impl IntoResponse> {
    if !validators::is_valid_email(&payload.email) {
        return Err(AppError::InvalidInput("email must be a valid email".into()));
    }
    let pair = app_state
        .auth_use_cases
        .login(payload.email.trim(), &payload.password)
        .await?;
    Ok(Json(pair))
}

async fn refresh(
    State(app_state): State<AppState>,
    Json(payload): Json<RefreshPayload>,
) -> AppResult<impl IntoResponse> {
    let pair = app_state
        .auth_use_cases
        .refresh_session(&payload.refresh_token)?;
    Ok(Json(pair))
}

async fn forgot_password(
    State(app_state): State<AppState>,
    Json(payload): Json<ForgotPasswordPayload>,
) -> AppResult<impl IntoResponse> {
    if !validators::is_valid_email(&payload.email) {
        return Err(AppError::InvalidInput("email must be a valid email".into()));
    }
    app_state
        .auth_use_cases
        .forgot_password(payload.email.trim())
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn reset_password(
    State(app_state): State<AppState>,
    Json(payload): Json<ResetPasswordPayload>,
) -> AppResult<impl IntoResponse> {
    if let Err(reason) = validators::check_password_strength(&payload.new_password) {
        return Err(AppError::InvalidInput(reason.into()));
    }
    app_state
        .auth_use_cases
        .redeem_reset_token(&payload.token, &payload.new_password)
        .await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Password has been reset successfully" })),
    ))
}
