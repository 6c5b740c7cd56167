use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Storage key the site has always written inquiries under.
pub const DEFAULT_STORE_KEY: &str = "pc_inquiries";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup function so tests can feed a
/// plain map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("PINECAMP_ENV", "development"))?;
    let log_level = or_default("PINECAMP_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("PINECAMP_DATA_DIR", "./data"));

    let store_key = or_default("PINECAMP_STORE_KEY", DEFAULT_STORE_KEY);
    if !is_valid_store_key(&store_key) {
        return Err(ConfigError::InvalidEnvVar {
            var: "PINECAMP_STORE_KEY".to_string(),
            reason: format!(
                "'{store_key}' must be non-empty ASCII letters, digits, '_', '-' or '.' and not start with '.'"
            ),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        store_key,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PINECAMP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Storage keys double as file names, so they are limited to a safe set.
#[must_use]
pub fn is_valid_store_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
