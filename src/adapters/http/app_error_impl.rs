use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        let code = self.code().as_str();
        let (status, body) = match &self {
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "code": code, "message": "Database error" }),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "code": code, "message": "Invalid credentials" }),
            ),
            AppError::InvalidSession => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "code": code, "message": "Invalid session" }),
            ),
            AppError::SessionExpired => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "code": code, "message": "Session expired, please sign in again" }),
            ),
            AppError::PasswordExpired {
                last_password_change_at,
            } => (
                StatusCode::FORBIDDEN,
                serde_json::json!({
                    "code": code,
                    "message": "Password has expired and must be changed",
                    "lastPasswordChange": last_password_change_at,
                }),
            ),
            AppError::PasswordReused => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "code": code,
                    "message": "New password cannot match the current password or any of the last 3 passwords",
                }),
            ),
            AppError::InvalidOrExpiredToken => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "code": code, "message": "Invalid or expired token" }),
            ),
            AppError::MissingContactEmail => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "code": code, "message": "A contact email is required" }),
            ),
            AppError::Delivery(_) => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({ "code": code, "message": "Email delivery failed" }),
            ),
            AppError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "code": code, "message": msg }),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "code": code, "message": "Not found" }),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "code": code, "message": "Internal error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
