use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    domain::entities::admin::Admin,
    use_cases::{AdminRepo, ProfileUpdate},
};

// Admin row as stored in the db. `password_history` is a JSONB array of hash
// strings, most recent first.
#[derive(sqlx::FromRow, Debug)]
struct AdminDb {
    id: Uuid,
    login_email: String,
    password_hash: String,
    password_history: serde_json::Value,
    last_password_change_at: NaiveDateTime,
    admin_name: Option<String>,
    employee_id: Option<String>,
    contact_email: Option<String>,
    uses_login_email_as_contact: bool,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
}

impl AdminDb {
    fn into_admin(self) -> Admin {
        let password_history = parse_history(&self.password_history, &self.id);
        Admin {
            id: self.id,
            login_email: self.login_email,
            password_hash: self.password_hash,
            password_history,
            last_password_change_at: self.last_password_change_at,
            admin_name: self.admin_name,
            employee_id: self.employee_id,
            contact_email: self.contact_email,
            uses_login_email_as_contact: self.uses_login_email_as_contact,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parse the stored history array, falling back to empty on corruption.
/// SQL NULL is a valid empty state and does not warn.
fn parse_history(json: &serde_json::Value, admin_id: &Uuid) -> Vec<String> {
    if json.is_null() {
        return Vec::new();
    }
    serde_json::from_value(json.clone()).unwrap_or_else(|err| {
        tracing::warn!(
            admin_id = %admin_id,
            error = %err,
            "Failed to parse password_history, treating as empty"
        );
        Vec::new()
    })
}

const SELECT_ADMIN: &str = "SELECT id, login_email, password_hash, password_history, \
     last_password_change_at, admin_name, employee_id, contact_email, \
     uses_login_email_as_contact, created_at, updated_at FROM admins";

#[async_trait]
impl AdminRepo for PostgresPersistence {
    async fn find_by_login_email(&self, login_email: &str) -> AppResult<Option<Admin>> {
        let rec = sqlx::query_as::<_, AdminDb>(&format!("{SELECT_ADMIN} WHERE login_email = $1"))
            .bind(login_email)
            .fetch_optional(self.pool())
            .await?;
        Ok(rec.map(AdminDb::into_admin))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        let rec = sqlx::query_as::<_, AdminDb>(&format!("{SELECT_ADMIN} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(rec.map(AdminDb::into_admin))
    }

    async fn insert(&self, admin: &Admin) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO admins (id, login_email, password_hash, password_history, \
             last_password_change_at, admin_name, employee_id, contact_email, \
             uses_login_email_as_contact, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(admin.id)
        .bind(&admin.login_email)
        .bind(&admin.password_hash)
        .bind(serde_json::json!(admin.password_history))
        .bind(admin.last_password_change_at)
        .bind(&admin.admin_name)
        .bind(&admin.employee_id)
        .bind(&admin.contact_email)
        .bind(admin.uses_login_email_as_contact)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        new_hash: &str,
        new_history: &[String],
        changed_at: NaiveDateTime,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE admins SET password_hash = $2, password_history = $3, \
             last_password_change_at = $4, updated_at = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(new_hash)
        .bind(serde_json::json!(new_history))
        .bind(changed_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> AppResult<Admin> {
        let rec = sqlx::query_as::<_, AdminDb>(
            "UPDATE admins SET \
             admin_name = COALESCE($2, admin_name), \
             uses_login_email_as_contact = COALESCE($3, uses_login_email_as_contact), \
             contact_email = COALESCE($4, contact_email), \
             updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id, login_email, password_hash, password_history, \
             last_password_change_at, admin_name, employee_id, contact_email, \
             uses_login_email_as_contact, created_at, updated_at",
        )
        .bind(id)
        .bind(&update.admin_name)
        .bind(update.uses_login_email_as_contact)
        .bind(&update.contact_email)
        .fetch_one(self.pool())
        .await?;
        Ok(rec.into_admin())
    }
}
