use crate::{
    adapters::{email::resend::ResendEmailSender, http::app_state::AppState},
    application::notifications::NotificationRouter,
    infra::{config::AppConfig, postgres_persistence},
    use_cases::{AdminRepo, account::AccountUseCases, auth::AuthUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let email = Arc::new(ResendEmailSender::new(
        config.resend_api_key.clone(),
        config.email_from.clone(),
    ));
    let notifier = NotificationRouter::new(email);

    let admin_repo = postgres_arc as Arc<dyn AdminRepo>;

    let auth_use_cases = AuthUseCases::new(
        admin_repo.clone(),
        notifier.clone(),
        config.jwt_secret.clone(),
        config.access_token_ttl,
        config.refresh_token_ttl,
        config.reset_token_ttl,
        config.app_origin.clone(),
    );

    let account_use_cases = AccountUseCases::new(
        admin_repo.clone(),
        notifier,
        config.app_origin.clone(),
    );

    Ok(AppState {
        config: Arc::new(config),
        auth_use_cases: Arc::new(auth_use_cases),
        account_use_cases: Arc::new(account_use_cases),
        admin_repo,
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "admindesk_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
