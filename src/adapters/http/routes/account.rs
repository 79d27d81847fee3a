use axum::{
    Extension, Json, Router,
    extract::State,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::Deserialize;

use crate::{
    adapters::http::{
        app_state::AppState,
        middleware::{CurrentAdmin, password_age_gate, require_auth},
    },
    app_error::{AppError, AppResult},
    application::validators,
    use_cases::ProfileUpdate,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordPayload {
    old_password: String,
    new_password: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UpdateProfilePayload {
    admin_name: Option<String>,
    uses_login_email_as_contact: Option<bool>,
    contact_email: Option<String>,
}

pub fn router(app_state: AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/me", get(get_me))
        .route("/profile", patch(update_profile))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            password_age_gate,
        ));

    // The password change stays reachable when the age gate is tripped; it is
    // the only way out of the expired state.
    Router::new()
        .route("/password", post(change_password))
        .merge(gated)
        .layer(axum_middleware::from_fn_with_state(app_state, require_auth))
}

async fn get_me(
    State(app_state): State<AppState>,
    Extension(CurrentAdmin(admin_id)): Extension<CurrentAdmin>,
) -> AppResult<impl IntoResponse> {
    let profile = app_state.account_use_cases.get_profile(admin_id).await?;
    Ok(Json(profile))
}

async fn change_password(
    State(app_state): State<AppState>,
    Extension(CurrentAdmin(admin_id)): Extension<CurrentAdmin>,
    Json(payload): Json<ChangePasswordPayload>,
) -> AppResult<impl IntoResponse> {
    if let Err(reason) = validators::check_password_strength(&payload.new_password) {
        return Err(AppError::InvalidInput(reason.into()));
    }
    app_state
        .account_use_cases
        .change_password(admin_id, &payload.old_password, &payload.new_password)
        .await?;
    Ok(Json(serde_json::json!({ "message": "Password updated successfully" })))
}

async fn update_profile(
    State(app_state): State<AppState>,
    Extension(CurrentAdmin(admin_id)): Extension<CurrentAdmin>,
    Json(payload): Json<UpdateProfilePayload>,
) -> AppResult<impl IntoResponse> {
    if let Some(contact) = payload.contact_email.as_deref()
        && !validators::is_valid_email(contact)
    {
        return Err(AppError::InvalidInput(
            "contactEmail must be a valid email".into(),
        ));
    }
    let update = ProfileUpdate {
        admin_name: payload.admin_name,
        uses_login_email_as_contact: payload.uses_login_email_as_contact,
        contact_email: payload.contact_email,
    };
    let profile = app_state
        .account_use_cases
        .update_profile(admin_id, update)
        .await?;
    Ok(Json(profile))
}
