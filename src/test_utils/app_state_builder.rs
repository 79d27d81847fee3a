//! Test app state builder for HTTP-level integration testing.
//!
//! Creates a minimal `AppState` backed by in-memory mocks.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    application::{
        jwt::{self, TokenPurpose},
        notifications::{EmailSender, NotificationRouter},
    },
    domain::entities::admin::Admin,
    infra::config::AppConfig,
    test_utils::{InMemoryAdminRepo, RecordingEmailSender},
    use_cases::{AdminRepo, account::AccountUseCases, auth::AuthUseCases},
};

pub const TEST_JWT_SECRET: &str = "test-signing-secret";
pub const TEST_APP_ORIGIN: &str = "http://localhost:3000";

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_secret: SecretString::from(TEST_JWT_SECRET),
        access_token_ttl: Duration::minutes(10),
        refresh_token_ttl: Duration::minutes(30),
        reset_token_ttl: Duration::minutes(10),
        password_max_age: chrono::Duration::days(90),
        app_origin: TEST_APP_ORIGIN.to_string(),
        cors_origin: HeaderValue::from_static(TEST_APP_ORIGIN),
        bind_addr: "127.0.0.1:0".parse::<SocketAddr>().unwrap(),
        database_url: String::new(),
        resend_api_key: SecretString::from(""),
        email_from: "noreply@example.test".to_string(),
    }
}

/// Build an `AuthUseCases` over the given mocks, returning the signing secret
/// so tests can mint or inspect tokens directly.
pub fn test_auth_use_cases(
    repo: Arc<dyn AdminRepo>,
    email: Arc<dyn EmailSender>,
) -> (AuthUseCases, SecretString) {
    let secret = SecretString::from(TEST_JWT_SECRET);
    let auth = AuthUseCases::new(
        repo,
        NotificationRouter::new(email),
        secret.clone(),
        Duration::minutes(10),
        Duration::minutes(30),
        Duration::minutes(10),
        TEST_APP_ORIGIN.to_string(),
    );
    (auth, secret)
}

pub fn test_account_use_cases(
    repo: Arc<dyn AdminRepo>,
    email: Arc<dyn EmailSender>,
) -> AccountUseCases {
    AccountUseCases::new(
        repo,
        NotificationRouter::new(email),
        TEST_APP_ORIGIN.to_string(),
    )
}

/// Mint an access token signed with the state's configured secret.
pub fn issue_test_access_token(app_state: &AppState, admin_id: Uuid) -> String {
    jwt::issue(
        admin_id,
        TokenPurpose::Access,
        &app_state.config.jwt_secret,
        app_state.config.access_token_ttl,
    )
    .unwrap()
}

pub struct TestAppStateBuilder {
    admins: Vec<Admin>,
    email_sender: Option<Arc<dyn EmailSender>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            admins: vec![],
            email_sender: None,
        }
    }

    pub fn with_admin(mut self, admin: Admin) -> Self {
        self.admins.push(admin);
        self
    }

    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Build with a recording email sender, returned for test assertions.
    pub fn build_with_email_mock(self) -> (AppState, Arc<RecordingEmailSender>) {
        let email = Arc::new(RecordingEmailSender::new());
        let app_state = self.with_email_sender(email.clone()).build();
        (app_state, email)
    }

    pub fn build(self) -> AppState {
        let config = test_config();
        let repo: Arc<dyn AdminRepo> = Arc::new(InMemoryAdminRepo::with_admins(self.admins));
        let email: Arc<dyn EmailSender> = self
            .email_sender
            .unwrap_or_else(|| Arc::new(RecordingEmailSender::new()));
        let notifier = NotificationRouter::new(email);

        let auth_use_cases = AuthUseCases::new(
            repo.clone(),
            notifier.clone(),
            config.jwt_secret.clone(),
            config.access_token_ttl,
            config.refresh_token_ttl,
            config.reset_token_ttl,
            config.app_origin.clone(),
        );
        let account_use_cases = AccountUseCases::new(
            repo.clone(),
            notifier,
            config.app_origin.clone(),
        );

        AppState {
            config: Arc::new(config),
            auth_use_cases: Arc::new(auth_use_cases),
            account_use_cases: Arc::new(account_use_cases),
            admin_repo: repo,
        }
    }
}
