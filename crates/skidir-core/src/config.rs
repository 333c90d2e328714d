use std::path::PathBuf;

use crate::app_config::{ApiConfig, AppConfig, EndpointPaths, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load application configuration with the remote API switched off.
///
/// `SKIDIR_USE_FALLBACK` is ignored and treated as `true`, so no API key is
/// required. Every other variable is read as in [`load_app_config`].
///
/// # Errors
///
/// Returns `ConfigError` if any remaining value is invalid.
pub fn load_offline_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(offline_lookup(|key| std::env::var(key)))
}

fn offline_lookup<F>(lookup: F) -> impl Fn(&str) -> Result<String, std::env::VarError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    move |key| {
        if key == "SKIDIR_USE_FALLBACK" {
            Ok("true".to_string())
        } else {
            lookup(key)
        }
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here, decoupled from the process environment,
/// so tests can drive it with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SKIDIR_ENV", "development"))?;
    let log_level = or_default("SKIDIR_LOG_LEVEL", "info");

    // Development runs against the embedded dataset unless told otherwise.
    let fallback_default = if env == Environment::Development {
        "true"
    } else {
        "false"
    };
    let use_fallback = parse_bool(
        "SKIDIR_USE_FALLBACK",
        &or_default("SKIDIR_USE_FALLBACK", fallback_default),
    )?;

    let api_key = match lookup("SKIDIR_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ if use_fallback => String::new(),
        _ => return Err(ConfigError::MissingEnvVar("SKIDIR_API_KEY".to_string())),
    };

    let base_url = or_default("SKIDIR_API_BASE_URL", "https://api.skiapi.com/v1");
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "SKIDIR_API_BASE_URL".to_string(),
            reason: format!("'{base_url}' is not an http(s) URL"),
        });
    }

    let defaults = EndpointPaths::default();
    let endpoints = EndpointPaths {
        all_resorts: or_default("SKIDIR_API_RESORTS_PATH", &defaults.all_resorts),
        single_resort: or_default("SKIDIR_API_RESORT_PATH", &defaults.single_resort),
        search_resorts: or_default("SKIDIR_API_SEARCH_PATH", &defaults.search_resorts),
    };

    let api = ApiConfig {
        base_url,
        endpoints,
        api_key,
        api_host: or_default("SKIDIR_API_HOST", "rapidapi.com"),
        use_fallback,
        request_timeout_secs: parse_u64("SKIDIR_REQUEST_TIMEOUT_SECS", "30")?,
        user_agent: or_default("SKIDIR_USER_AGENT", "skidir/0.1 (resort-directory)"),
    };

    let dataset_path = lookup("SKIDIR_DATASET_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        api,
        dataset_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SKIDIR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
