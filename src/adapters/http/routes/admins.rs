use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;

use crate::{
    adapters::http::{
        app_state::AppState,
        middleware::{password_age_gate, require_auth},
    },
    app_error::{AppError, AppResult},
    application::validators,
    use_cases::account::NewAdminRequest,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAdminPayload {
    login_email: String,
    admin_name: Option<String>,
    employee_id: Option<String>,
    contact_email: Option<String>,
    #[serde(default = "default_routing_flag")]
    uses_login_email_as_contact: bool,
}

fn default_routing_flag() -> bool {
    true
}

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_admin))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            password_age_gate,
        ))
        .layer(axum_middleware::from_fn_with_state(app_state, require_auth))
}

async fn create_admin(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateAdminPayload>,
) -> AppResult<impl IntoResponse> {
    if !validators::is_valid_email(&payload.login_email) {
        return Err(AppError::InvalidInput(
            "loginEmail must be a valid email".into(),
        ));
    }
    if let Some(contact) = payload.contact_email.as_deref()
        && !validators::is_valid_email(contact)
    {
        return Err(AppError::InvalidInput(
            "contactEmail must be a valid email".into(),
        ));
    }

    let profile = app_state
        .account_use_cases
        .create_admin(NewAdminRequest {
            login_email: payload.login_email.trim().to_string(),
            admin_name: payload.admin_name,
            employee_id: payload.employee_id,
            contact_email: payload.contact_email,
            uses_login_email_as_contact: payload.uses_login_email_as_contact,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::test_utils::{TestAppStateBuilder, create_test_admin, issue_test_access_token};

    fn test_server(app_state: AppState) -> TestServer {
        TestServer::new(router(app_state.clone()).with_state(app_state)).unwrap()
    }

    #[tokio::test]
    async fn provisioning_requires_authentication() {
        let app_state = TestAppStateBuilder::new().build();
        let server = test_server(app_state);

        let response = server
            .post("/")
            .json(&json!({ "loginEmail": "new@example.com" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn provisioning_creates_an_account_and_emails_the_password() {
        let caller = create_test_admin(|_| {});
        let caller_id = caller.id;
        let (app_state, email) = TestAppStateBuilder::new()
            .with_admin(caller)
            .build_with_email_mock();
        let token = issue_test_access_token(&app_state, caller_id);
        let server = test_server(app_state);

        let response = server
            .post("/")
            .add_header("Authorization", format!("Bearer {token}"))
            .json(&json!({
                "loginEmail": "new@example.com",
                "adminName": "New Admin",
                "employeeId": "E-1001",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["loginEmail"], "new@example.com");
        assert!(body.get("passwordHash").is_none());

        let sent = email.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "new@example.com");
    }

    #[tokio::test]
    async fn provisioning_rejects_a_bad_login_email() {
        let caller = create_test_admin(|_| {});
        let caller_id = caller.id;
        let app_state = TestAppStateBuilder::new().with_admin(caller).build();
        let token = issue_test_access_token(&app_state, caller_id);
        let server = test_server(app_state);

        let response = server
            .post("/")
            .add_header("Authorization", format!("Bearer {token}"))
            .json(&json!({ "loginEmail": "not-an-email" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn provisioning_enforces_the_contact_routing_invariant() {
        let caller = create_test_admin(|_| {});
        let caller_id = caller.id;
        let app_state = TestAppStateBuilder::new().with_admin(caller).build();
        let token = issue_test_access_token(&app_state, caller_id);
        let server = test_server(app_state);

        let response = server
            .post("/")
            .add_header("Authorization", format!("Bearer {token}"))
            .json(&json!({
                "loginEmail": "new@example.com",
                "usesLoginEmailAsContact": false,
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "MISSING_CONTACT_EMAIL");
    }
}
