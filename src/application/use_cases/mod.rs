pub mod account;
pub mod auth;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{app_error::AppResult, domain::entities::admin::Admin};

/// Named optional fields only; anything not listed here cannot be updated
/// through the profile endpoint.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub admin_name: Option<String>,
    pub uses_login_email_as_contact: Option<bool>,
    pub contact_email: Option<String>,
}

/// The only surface through which persisted admin rows are read or written.
#[async_trait]
pub trait AdminRepo: Send + Sync {
    async fn find_by_login_email(&self, login_email: &str) -> AppResult<Option<Admin>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>>;
    async fn insert(&self, admin: &Admin) -> AppResult<()>;
    async fn update_password(
        &self,
        id: Uuid,
        new_hash: &str,
        new_history: &[String],
        changed_at: NaiveDateTime,
    ) -> AppResult<()>;
    async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> AppResult<Admin>;
}
