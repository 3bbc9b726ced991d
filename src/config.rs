//! Environment-driven configuration.

use crate::error::AppError;

const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// HS256 signing secret for bearer tokens.
    pub jwt_key: String,
    pub auth_user: String,
    pub auth_pass: String,
}

impl Config {
    /// Read configuration from process environment. `PORT` defaults to 8080;
    /// everything else is required.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Config(format!("missing required env var {}", key)))
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("PORT is not a valid port: {}", raw)))?,
            None => DEFAULT_PORT,
        };
        Ok(Config {
            database_url: require("DATABASE_URL")?,
            port,
            jwt_key: require("JWT_KEY")?,
            auth_user: require("AUTH_USER")?,
            auth_pass: require("AUTH_PASS")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_set() -> HashMap<String, String> {
        vars(&[
            ("DATABASE_URL", "postgres://localhost/vanfleet"),
            ("JWT_KEY", "secret"),
            ("AUTH_USER", "admin"),
            ("AUTH_PASS", "hunter2"),
        ])
    }

    #[test]
    fn port_defaults_when_absent() {
        let env = full_set();
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn port_parse_failure_is_config_error() {
        let mut env = full_set();
        env.insert("PORT".into(), "not-a-port".into());
        assert!(Config::from_lookup(|k| env.get(k).cloned()).is_err());
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let mut env = full_set();
        env.remove("DATABASE_URL");
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let mut env = full_set();
        env.insert("JWT_KEY".into(), String::new());
        assert!(Config::from_lookup(|k| env.get(k).cloned()).is_err());
    }
}
