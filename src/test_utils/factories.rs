//! Test data factories.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::admin::Admin;

/// The plaintext behind every factory admin's `password_hash`.
pub const DEFAULT_TEST_PASSWORD: &str = "Sup3rSecretPass";

/// Create a test admin with sensible defaults, customised via the closure.
///
/// The default account logs in as `admin@example.com` with
/// [`DEFAULT_TEST_PASSWORD`], routes notifications to its login email and has
/// a fresh password.
pub fn create_test_admin(overrides: impl FnOnce(&mut Admin)) -> Admin {
    let now = Utc::now().naive_utc();
    let mut admin = Admin {
        id: Uuid::new_v4(),
        login_email: "admin@example.com".to_string(),
        password_hash: crate::infra::password::hash(DEFAULT_TEST_PASSWORD).unwrap(),
        password_history: Vec::new(),
        last_password_change_at: now,
        admin_name: Some("Test Admin".to_string()),
        employee_id: Some("E-0001".to_string()),
        contact_email: None,
        uses_login_email_as_contact: true,
        created_at: Some(now),
        updated_at: Some(now),
    };
    overrides(&mut admin);
    admin
}
