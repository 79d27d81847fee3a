use chrono::NaiveDateTime;
use uuid::Uuid;

/// A panel administrator as the application sees it. `password_hash` and
/// `password_history` stay inside the auth flows; profile views expose neither.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub login_email: String,
    pub password_hash: String,
    /// Prior password hashes, most recent first, at most three.
    pub password_history: Vec<String>,
    pub last_password_change_at: NaiveDateTime,
    pub admin_name: Option<String>,
    pub employee_id: Option<String>,
    pub contact_email: Option<String>,
    /// When true, security email goes to `login_email`; otherwise to
    /// `contact_email`, which must then be present and distinct.
    pub uses_login_email_as_contact: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
