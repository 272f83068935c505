//! Connection settings for the source and target database instances.
//!
//! Settings are read from the environment exactly once at process start and
//! passed by reference into every component; nothing else in the workspace
//! reads ambient environment state.

use thiserror::Error;

const DEFAULT_PORT: u16 = 5432;

/// Environment variables the settings are read from.
const DB_HOST: &str = "DB_HOST";
const DB_PORT: &str = "DB_PORT";
const DB_USER: &str = "DB_USER";
const DB_PASSWORD: &str = "DB_PASSWORD";
const DB_DEV_NAME: &str = "DB_DEV_NAME";
const DB_PROD_NAME: &str = "DB_PROD_NAME";

/// Typed settings failures, so callers branch on kind instead of matching
/// message text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid DB_PORT value '{0}'")]
    InvalidPort(String),
}

/// Connection parameters for both database instances.
///
/// `source_db` is the DEV instance (the authoritative staging area) and
/// `target_db` the PROD instance end-user-facing systems read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub source_db: String,
    pub target_db: String,
}

impl ConnectionSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary lookup, letting tests inject a fake
    /// environment without mutating process globals.
    ///
    /// `DB_PORT` is optional and defaults to 5432; every other variable is
    /// required and must be non-empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(SettingsError::Missing(name))
        };

        let port = match lookup(DB_PORT).filter(|value| !value.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: required(DB_HOST)?,
            port,
            user: required(DB_USER)?,
            password: required(DB_PASSWORD)?,
            source_db: required(DB_DEV_NAME)?,
            target_db: required(DB_PROD_NAME)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DB_HOST", "localhost"),
            ("DB_PORT", "5433"),
            ("DB_USER", "postgres"),
            ("DB_PASSWORD", "secret"),
            ("DB_DEV_NAME", "corpus_dev"),
            ("DB_PROD_NAME", "corpus_prod"),
        ])
    }

    fn settings_from(vars: &HashMap<&'static str, &'static str>) -> Result<ConnectionSettings, SettingsError> {
        ConnectionSettings::from_lookup(|name| vars.get(name).map(|value| value.to_string()))
    }

    #[test]
    fn reads_all_variables() {
        let settings = settings_from(&env()).unwrap();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 5433);
        assert_eq!(settings.source_db, "corpus_dev");
        assert_eq!(settings.target_db, "corpus_prod");
    }

    #[test]
    fn missing_variable_is_reported_by_name() {
        let mut vars = env();
        vars.remove("DB_HOST");
        assert_eq!(settings_from(&vars), Err(SettingsError::Missing("DB_HOST")));
    }

    #[test]
    fn empty_variable_counts_as_missing() {
        let mut vars = env();
        vars.insert("DB_PASSWORD", "");
        assert_eq!(settings_from(&vars), Err(SettingsError::Missing("DB_PASSWORD")));
    }

    #[test]
    fn port_defaults_when_unset() {
        let mut vars = env();
        vars.remove("DB_PORT");
        assert_eq!(settings_from(&vars).unwrap().port, 5432);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut vars = env();
        vars.insert("DB_PORT", "not-a-port");
        assert_eq!(
            settings_from(&vars),
            Err(SettingsError::InvalidPort("not-a-port".to_string()))
        );
    }
}
