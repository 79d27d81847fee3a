use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppError,
    application::{
        jwt::{self, TokenError, TokenPurpose},
        password_policy,
    },
};

/// The verified identity of the caller, threaded explicitly to handlers as a
/// request extension. Nothing else carries "who is logged in".
#[derive(Clone, Copy, Debug)]
pub struct CurrentAdmin(pub Uuid);

/// Verifies the bearer access token and attaches [`CurrentAdmin`].
pub async fn require_auth(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or(AppError::InvalidSession)?;

    let claims = jwt::verify(&token, TokenPurpose::Access, &app_state.config.jwt_secret)
        .map_err(|e| match e {
            TokenError::Expired => AppError::SessionExpired,
            TokenError::Malformed => AppError::InvalidSession,
        })?;
    let admin_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidSession)?;

    request.extensions_mut().insert(CurrentAdmin(admin_id));
    Ok(next.run(request).await)
}

/// Rejects requests from accounts whose password is older than the policy
/// allows. Layered on every authenticated route except the password change
/// itself, which is the one way out of the expired state.
pub async fn password_age_gate(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let CurrentAdmin(admin_id) = *request
        .extensions()
        .get::<CurrentAdmin>()
        .ok_or(AppError::InvalidSession)?;

    let admin = app_state
        .admin_repo
        .find_by_id(admin_id)
        .await?
        .ok_or(AppError::InvalidSession)?;

    let now = Utc::now().naive_utc();
    if password_policy::is_expired(
        admin.last_password_change_at,
        app_state.config.password_max_age,
        now,
    ) {
        return Err(AppError::PasswordExpired {
            last_password_change_at: admin.last_password_change_at,
        });
    }

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<String> {
    let header = request.headers().get(axum::http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
