use std::sync::Arc;

use base64::Engine;
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::{email_templates, notifications::NotificationRouter, password_policy},
    domain::entities::admin::Admin,
    use_cases::{AdminRepo, ProfileUpdate},
};

/// What the API exposes about an admin. No hash material ever appears here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    pub login_email: String,
    pub admin_name: Option<String>,
    pub employee_id: Option<String>,
    pub contact_email: Option<String>,
    pub uses_login_email_as_contact: bool,
    pub last_password_change: NaiveDateTime,
}

impl From<Admin> for AdminProfile {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            login_email: admin.login_email,
            admin_name: admin.admin_name,
            employee_id: admin.employee_id,
            contact_email: admin.contact_email,
            uses_login_email_as_contact: admin.uses_login_email_as_contact,
            last_password_change: admin.last_password_change_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAdminRequest {
    pub login_email: String,
    pub admin_name: Option<String>,
    pub employee_id: Option<String>,
    pub contact_email: Option<String>,
    pub uses_login_email_as_contact: bool,
}

#[derive(Clone)]
pub struct AccountUseCases {
    repo: Arc<dyn AdminRepo>,
    notifier: NotificationRouter,
    app_origin: String,
}

impl AccountUseCases {
    pub fn new(repo: Arc<dyn AdminRepo>, notifier: NotificationRouter, app_origin: String) -> Self {
        Self {
            repo,
            notifier,
            app_origin,
        }
    }

    pub async fn get_profile(&self, admin_id: Uuid) -> AppResult<AdminProfile> {
        let admin = self
            .repo
            .find_by_id(admin_id)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(admin.into())
    }

    #[instrument(skip(self, old_password, new_password))]
    pub async fn change_password(
        &self,
        admin_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let Some(admin) = self.repo.find_by_id(admin_id).await? else {
            return Err(AppError::InvalidCredentials);
        };
        if !crate::infra::password::verify(old_password, &admin.password_hash) {
            return Err(AppError::InvalidCredentials);
        }
        if password_policy::is_reused_or_current(
            new_password,
            &admin.password_hash,
            &admin.password_history,
        ) {
            return Err(AppError::PasswordReused);
        }

        let new_hash = crate::infra::password::hash(new_password)?;
        // The outgoing hash rotates into history, not the incoming one.
        let new_history = password_policy::rotate_history(&admin.password_hash, &admin.password_history);
        let now = Utc::now().naive_utc();
        self.repo
            .update_password(admin.id, &new_hash, &new_history, now)
            .await
    }

    /// Provisions a new admin with a generated temporary password and emails
    /// it to the resolved notification address. The insert is authoritative;
    /// a failed email never rolls it back.
    #[instrument(skip(self, request))]
    pub async fn create_admin(&self, request: NewAdminRequest) -> AppResult<AdminProfile> {
        ensure_contact_routing(
            request.uses_login_email_as_contact,
            &request.login_email,
            request.contact_email.as_deref(),
        )?;

        let temp_password = generate_temp_password();
        let password_hash = crate::infra::password::hash(&temp_password)?;
        let now = Utc::now().naive_utc();

        let admin = Admin {
            id: Uuid::new_v4(),
            login_email: request.login_email,
            password_hash,
            password_history: Vec::new(),
            last_password_change_at: now,
            admin_name: request.admin_name,
            employee_id: request.employee_id,
            contact_email: request.contact_email,
            uses_login_email_as_contact: request.uses_login_email_as_contact,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.repo.insert(&admin).await?;

        // resolve_address cannot fail here, ensure_contact_routing ran above.
        let to = self.notifier.resolve_address(&admin)?.to_string();
        let (subject, html) = email_templates::temporary_password_email(
            &self.app_origin,
            &admin.login_email,
            &temp_password,
        );
        if let Err(err) = self.notifier.dispatch(&to, &subject, &html).await {
            tracing::warn!(admin_id = %admin.id, error = ?err, "temporary password email delivery failed");
        }

        Ok(admin.into())
    }

    #[instrument(skip(self, update))]
    pub async fn update_profile(
        &self,
        admin_id: Uuid,
        update: ProfileUpdate,
    ) -> AppResult<AdminProfile> {
        let Some(admin) = self.repo.find_by_id(admin_id).await? else {
            return Err(AppError::NotFound);
        };

        let effective_flag = update
            .uses_login_email_as_contact
            .unwrap_or(admin.uses_login_email_as_contact);
        let effective_contact = update
            .contact_email
            .as_deref()
            .or(admin.contact_email.as_deref());
        ensure_contact_routing(effective_flag, &admin.login_email, effective_contact)?;

        let updated = self.repo.update_profile(admin_id, &update).await?;
        Ok(updated.into())
    }
}

/// Routing invariant: when notifications do not go to the login email, a
/// distinct contact email must exist.
fn ensure_contact_routing(
    uses_login_email_as_contact: bool,
    login_email: &str,
    contact_email: Option<&str>,
) -> AppResult<()> {
    if uses_login_email_as_contact {
        return Ok(());
    }
    match contact_email {
        None => Err(AppError::MissingContactEmail),
        Some(contact) if contact == login_email => Err(AppError::InvalidInput(
            "Contact email must differ from the login email".into(),
        )),
        Some(_) => Ok(()),
    }
}

fn generate_temp_password() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 12];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
