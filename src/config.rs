use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEV_SESSION_SECRET: &str = "dev_session_secret_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_secret: SecretString,
    pub session_ttl_hours: i64,
    pub cookie_secure: bool,
    pub admin_email: Option<String>,
    pub admin_password: Option<SecretString>,
    pub admin_full_name: String,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://quiz_master.db".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(5),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            session_secret: SecretString::from(
                env::var("SESSION_SECRET").unwrap_or_else(|_| DEV_SESSION_SECRET.to_string()),
            ),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            admin_email: env::var("ADMIN_EMAIL").ok().filter(|e| !e.trim().is_empty()),
            admin_password: env::var("ADMIN_PASSWORD").ok().map(SecretString::from),
            admin_full_name: env::var("ADMIN_FULL_NAME")
                .unwrap_or_else(|_| "Administrator".to_string()),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects secrets that are fine for local work but not for a deployment.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let secret = self.session_secret.expose_secret();

        if secret == DEV_SESSION_SECRET {
            return Err(AppError::InternalError(
                "SESSION_SECRET is using the default value".to_string(),
            ));
        }

        if secret.len() < 32 {
            return Err(AppError::InternalError(format!(
                "SESSION_SECRET is too short ({}), it must be at least 32 characters",
                secret.len()
            )));
        }

        if !self.cookie_secure {
            log::warn!("COOKIE_SECURE is off in production");
        }

        Ok(())
    }

    /// Admin credentials for the provisioning step, when both are configured.
    pub fn admin_credentials(&self) -> Option<(&str, &SecretString)> {
        match (&self.admin_email, &self.admin_password) {
            (Some(email), Some(password)) => Some((email.as_str(), password)),
            _ => None,
        }
    }

    pub fn test_config() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            session_secret: SecretString::from("test_session_secret_key".to_string()),
            session_ttl_hours: 1,
            cookie_secure: false,
            admin_email: None,
            admin_password: None,
            admin_full_name: "Administrator".to_string(),
            app_env: "test".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.database_url.is_empty());
        assert!(config.db_max_connections > 0);
        assert!(config.session_ttl_hours > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.db_max_connections, 1);
        assert!(config.admin_credentials().is_none());
    }

    #[test]
    fn test_production_rejects_dev_secret() {
        let mut config = Config::test_config();
        config.session_secret = SecretString::from(DEV_SESSION_SECRET.to_string());
        assert!(config.validate_for_production().is_err());

        config.session_secret = SecretString::from("short".to_string());
        assert!(config.validate_for_production().is_err());

        config.session_secret = SecretString::from("x".repeat(48));
        assert!(config.validate_for_production().is_ok());
    }

    #[test]
    fn test_admin_credentials_require_both_values() {
        let mut config = Config::test_config();
        config.admin_email = Some("root@example.com".to_string());
        assert!(config.admin_credentials().is_none());

        config.admin_password = Some(SecretString::from("s3cret-pass".to_string()));
        let (email, _) = config.admin_credentials().expect("credentials should be present");
        assert_eq!(email, "root@example.com");
    }
}
