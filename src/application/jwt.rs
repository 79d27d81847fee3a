use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::app_error::{AppError, AppResult};
use secrecy::ExposeSecret;

/// What a token is allowed to be used for. Carried as a claim so an access
/// token can never stand in for a refresh token or a reset token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    Access,
    Refresh,
    PasswordReset,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub purpose: TokenPurpose,
    pub exp: i64,
    pub iat: i64,
}

/// Reset tokens additionally pin the notification address the link was sent to.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    pub sub: String,
    pub email: String,
    pub purpose: TokenPurpose,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Malformed,
}

pub fn issue(
    admin_id: Uuid,
    purpose: TokenPurpose,
    secret: &secrecy::SecretString,
    ttl: Duration,
) -> AppResult<String> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let exp = now + ttl.whole_seconds();
    let claims = Claims {
        sub: admin_id.to_string(),
        purpose,
        iat: now,
        exp,
    };
    let header = Header::new(Algorithm::HS256);
    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

pub fn verify(
    token: &str,
    expected: TokenPurpose,
    secret: &secrecy::SecretString,
) -> Result<Claims, TokenError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(map_decode_error)?;

    if claims.purpose != expected {
        return Err(TokenError::Malformed);
    }
    Ok(claims)
}

pub fn issue_reset(
    admin_id: Uuid,
    notify_email: &str,
    secret: &secrecy::SecretString,
    ttl: Duration,
) -> AppResult<String> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let exp = now + ttl.whole_seconds();
    let claims = ResetClaims {
        sub: admin_id.to_string(),
        email: notify_email.to_string(),
        purpose: TokenPurpose::PasswordReset,
        iat: now,
        exp,
    };
    let header = Header::new(Algorithm::HS256);
    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

pub fn verify_reset(
    token: &str,
    secret: &secrecy::SecretString,
) -> Result<ResetClaims, TokenError> {
    let claims = decode::<ResetClaims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(map_decode_error)?;

    if claims.purpose != TokenPurpose::PasswordReset {
        return Err(TokenError::Malformed);
    }
    Ok(claims)
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // No clock-skew leeway; expiry is boundary-exact.
    validation.leeway = 0;
    validation
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
