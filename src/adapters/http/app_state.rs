use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{AdminRepo, account::AccountUseCases, auth::AuthUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth_use_cases: Arc<AuthUseCases>,
    pub account_use_cases: Arc<AccountUseCases>,
    pub admin_repo: Arc<dyn AdminRepo>,
}
