use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

pub struct AppConfig {
    pub jwt_secret: SecretString,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub reset_token_ttl: Duration,
    /// Maximum password age before the expiry gate trips.
    pub password_max_age: chrono::Duration,
    pub app_origin: String,
    pub cors_origin: HeaderValue,
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub resend_api_key: SecretString,
    pub email_from: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret: SecretString = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set")
            .into();

        let access_token_ttl_secs: i64 = env::var("ACCESS_TOKEN_TTL_SECS")
            .unwrap_or("600".to_string())
            .parse()
            .expect("ACCESS_TOKEN_TTL_SECS must be a valid number");

        let refresh_token_ttl_secs: i64 = env::var("REFRESH_TOKEN_TTL_SECS")
            .unwrap_or("1800".to_string())
            .parse()
            .expect("REFRESH_TOKEN_TTL_SECS must be a valid number");

        let reset_token_ttl_secs: i64 = env::var("RESET_TOKEN_TTL_SECS")
            .unwrap_or("600".to_string())
            .parse()
            .expect("RESET_TOKEN_TTL_SECS must be a valid number");

        let password_max_age_days: i64 = env::var("PASSWORD_MAX_AGE_DAYS")
            .unwrap_or("90".to_string())
            .parse()
            .expect("PASSWORD_MAX_AGE_DAYS must be a valid number");

        let app_origin = env::var("APP_ORIGIN").expect("APP_ORIGIN must be set");
        let cors_origin: HeaderValue = env::var("CORS_ORIGIN")
            .unwrap_or("http://localhost:3000".to_string())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:3001".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let resend_api_key: SecretString = env::var("RESEND_API_KEY")
            .expect("RESEND_API_KEY must be set")
            .into();
        let email_from = env::var("EMAIL_FROM").expect("EMAIL_FROM must be set");

        Self {
            jwt_secret,
            access_token_ttl: Duration::seconds(access_token_ttl_secs),
            refresh_token_ttl: Duration::seconds(refresh_token_ttl_secs),
            reset_token_ttl: Duration::seconds(reset_token_ttl_secs),
            password_max_age: chrono::Duration::days(password_max_age_days),
            app_origin,
            cors_origin,
            bind_addr,
            database_url,
            resend_api_key,
            email_from,
        }
    }
}
