use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid session")]
    InvalidSession,

    #[error("Session expired")]
    SessionExpired,

    #[error("Password has expired and must be changed")]
    PasswordExpired {
        last_password_change_at: NaiveDateTime,
    },

    #[error("New password matches a recently used password")]
    PasswordReused,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("No contact email configured for this account")]
    MissingContactEmail,

    #[error("Email delivery failed: {0}")]
    Delivery(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    DatabaseError,
    InvalidCredentials,
    InvalidSession,
    SessionExpired,
    PasswordExpired,
    PasswordReused,
    InvalidOrExpiredToken,
    MissingContactEmail,
    DeliveryFailed,
    InvalidInput,
    NotFound,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::InvalidSession => "INVALID_SESSION",
            ErrorCode::SessionExpired => "SESSION_EXPIRED",
            ErrorCode::PasswordExpired => "PASSWORD_EXPIRED",
            ErrorCode::PasswordReused => "PASSWORD_REUSED",
            ErrorCode::InvalidOrExpiredToken => "INVALID_OR_EXPIRED_TOKEN",
            ErrorCode::MissingContactEmail => "MISSING_CONTACT_EMAIL",
            ErrorCode::DeliveryFailed => "DELIVERY_FAILED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::InvalidSession => ErrorCode::InvalidSession,
            AppError::SessionExpired => ErrorCode::SessionExpired,
            AppError::PasswordExpired { .. } => ErrorCode::PasswordExpired,
            AppError::PasswordReused => ErrorCode::PasswordReused,
            AppError::InvalidOrExpiredToken => ErrorCode::InvalidOrExpiredToken,
            AppError::MissingContactEmail => ErrorCode::MissingContactEmail,
            AppError::Delivery(_) => ErrorCode::DeliveryFailed,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NotFound => ErrorCode::NotFound,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
