use std::sync::Arc;

use chrono::Utc;
use secrecy::SecretString;
use serde::Serialize;
use time::Duration;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        email_templates,
        jwt::{self, TokenError, TokenPurpose},
        notifications::NotificationRouter,
    },
    use_cases::AdminRepo,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

/// Login, session refresh and the password-reset flows. Password changes for
/// an authenticated admin live in [`super::account`].
#[derive(Clone)]
pub struct AuthUseCases {
    repo: Arc<dyn AdminRepo>,
    notifier: NotificationRouter,
    jwt_secret: SecretString,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
    reset_token_ttl: Duration,
    app_origin: String,
}

impl AuthUseCases {
    pub fn new(
        repo: Arc<dyn AdminRepo>,
        notifier: NotificationRouter,
        jwt_secret: SecretString,
        access_token_ttl: Duration,
        refresh_token_ttl: Duration,
        reset_token_ttl: Duration,
        app_origin: String,
    ) -> Self {
        Self {
            repo,
            notifier,
            jwt_secret,
            access_token_ttl,
            refresh_token_ttl,
            reset_token_ttl,
            app_origin,
        }
    }

    /// Unknown login and wrong password answer identically so the endpoint
    /// cannot be used to enumerate accounts.
    #[instrument(skip(self, password))]
    pub async fn login(&self, login_email: &str, password: &str) -> AppResult<TokenPair> {
        let Some(admin) = self.repo.find_by_login_email(login_email).await? else {
            return Err(AppError::InvalidCredentials);
        };
        if !crate::infra::password::verify(password, &admin.password_hash) {
            return Err(AppError::InvalidCredentials);
        }
        self.issue_pair(admin.id)
    }

    /// Rotates the pair; the old refresh token is not revoked and simply dies
    /// by its TTL.
    #[instrument(skip(self, refresh_token))]
    pub fn refresh_session(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = jwt::verify(refresh_token, TokenPurpose::Refresh, &self.jwt_secret)
            .map_err(|e| match e {
                TokenError::Expired => AppError::SessionExpired,
                TokenError::Malformed => AppError::InvalidSession,
            })?;
        let admin_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidSession)?;
        self.issue_pair(admin_id)
    }

    /// Always succeeds from the caller's point of view: an unknown login, a
    /// misrouted account and a failed delivery all log and return Ok so the
    /// endpoint reveals nothing about account existence.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, login_email: &str) -> AppResult<()> {
        let Some(admin) = self.repo.find_by_login_email(login_email).await? else {
            tracing::debug!("password reset requested for unknown login");
            return Ok(());
        };

        let to = match self.notifier.resolve_address(&admin) {
            Ok(address) => address.to_string(),
            Err(err) => {
                tracing::error!(admin_id = %admin.id, error = ?err, "cannot route reset email");
                return Ok(());
            }
        };

        let token = jwt::issue_reset(admin.id, &to, &self.jwt_secret, self.reset_token_ttl)?;
        let link = format!("{}/reset-password?token={}", self.app_origin, token);
        let (subject, html) = email_templates::password_reset_email(&self.app_origin, &link);

        if let Err(err) = self.notifier.dispatch(&to, &subject, &html).await {
            tracing::warn!(admin_id = %admin.id, error = ?err, "reset email delivery failed");
        }
        Ok(())
    }

    /// Out-of-band recovery: the reuse-history check is deliberately skipped
    /// here, unlike an authenticated password change.
    #[instrument(skip(self, token, new_password))]
    pub async fn redeem_reset_token(&self, token: &str, new_password: &str) -> AppResult<()> {
        let claims = jwt::verify_reset(token, &self.jwt_secret)
            .map_err(|_| AppError::InvalidOrExpiredToken)?;
        let admin_id =
            Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidOrExpiredToken)?;
        let Some(admin) = self.repo.find_by_id(admin_id).await? else {
            return Err(AppError::InvalidOrExpiredToken);
        };

        let new_hash = crate::infra::password::hash(new_password)?;
        let now = Utc::now().naive_utc();
        self.repo
            .update_password(admin.id, &new_hash, &admin.password_history, now)
            .await
    }

    fn issue_pair(&self, admin_id: Uuid) -> AppResult<TokenPair> {
        Ok(TokenPair {
            token: jwt::issue(
                admin_id,
                TokenPurpose::Access,
                &self.jwt_secret,
                self.access_token_ttl,
            )?,
            refresh_token: jwt::issue(
                admin_id,
                TokenPurpose::Refresh,
                &self.jwt_secret,
                self.refresh_token_ttl,
            )?,
        })
    }
}
