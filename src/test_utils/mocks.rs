//! In-memory mock implementations for the persistence and email ports.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::notifications::EmailSender,
    domain::entities::admin::Admin,
    use_cases::{AdminRepo, ProfileUpdate},
};

// ============================================================================
// InMemoryAdminRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryAdminRepo {
    pub admins: Mutex<HashMap<Uuid, Admin>>,
}

impl InMemoryAdminRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admins(admins: Vec<Admin>) -> Self {
        let map: HashMap<Uuid, Admin> = admins.into_iter().map(|a| (a.id, a)).collect();
        Self {
            admins: Mutex::new(map),
        }
    }
}

#[async_trait]
impl AdminRepo for InMemoryAdminRepo {
    async fn find_by_login_email(&self, login_email: &str) -> AppResult<Option<Admin>> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .values()
            .find(|a| a.login_email == login_email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        Ok(self.admins.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, admin: &Admin) -> AppResult<()> {
        let mut admins = self.admins.lock().unwrap();
        if admins.values().any(|a| a.login_email == admin.login_email) {
            return Err(AppError::InvalidInput(
                "A record with this value already exists".into(),
            ));
        }
        admins.insert(admin.id, admin.clone());
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        new_hash: &str,
        new_history: &[String],
        changed_at: NaiveDateTime,
    ) -> AppResult<()> {
        let mut admins = self.admins.lock().unwrap();
        let admin = admins.get_mut(&id).ok_or(AppError::NotFound)?;
        admin.password_hash = new_hash.to_string();
        admin.password_history = new_history.to_vec();
        admin.last_password_change_at = changed_at;
        admin.updated_at = Some(changed_at);
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> AppResult<Admin> {
        let mut admins = self.admins.lock().unwrap();
        let admin = admins.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = &update.admin_name {
            admin.admin_name = Some(name.clone());
        }
        if let Some(flag) = update.uses_login_email_as_contact {
            admin.uses_login_email_as_contact = flag;
        }
        if let Some(contact) = &update.contact_email {
            admin.contact_email = Some(contact.clone());
        }
        admin.updated_at = Some(chrono::Utc::now().naive_utc());
        Ok(admin.clone())
    }
}

// ============================================================================
// Email senders
// ============================================================================

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Records every send for later assertions.
#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<SentEmail>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Fails every send, for exercising delivery-failure paths.
#[derive(Default)]
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> AppResult<()> {
        Err(AppError::Delivery("simulated transport failure".into()))
    }
}
