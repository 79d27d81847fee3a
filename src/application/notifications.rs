//! Routing of security email to the right address for an account.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::admin::Admin,
};

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

#[derive(Clone)]
pub struct NotificationRouter {
    email: Arc<dyn EmailSender>,
}

impl NotificationRouter {
    pub fn new(email: Arc<dyn EmailSender>) -> Self {
        Self { email }
    }

    /// The address security notifications for this account go to.
    ///
    /// Account creation and profile updates enforce that a contact email exists
    /// whenever the routing flag requires one, so the error arm here is a
    /// defensive check, not an expected path.
    pub fn resolve_address<'a>(&self, admin: &'a Admin) -> AppResult<&'a str> {
        if admin.uses_login_email_as_contact {
            return Ok(&admin.login_email);
        }
        admin
            .contact_email
            .as_deref()
            .ok_or(AppError::MissingContactEmail)
    }

    pub async fn dispatch(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        self.email.send(to, subject, html).await
    }
}
