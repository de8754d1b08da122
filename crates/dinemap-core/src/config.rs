use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

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

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("DINEMAP_ENV", "development"))?;
    let log_level = or_default("DINEMAP_LOG_LEVEL", "info");
    let records_path = PathBuf::from(or_default(
        "DINEMAP_RECORDS_PATH",
        "./data/restaurants.json",
    ));

    let geocoder_base_url = or_default(
        "DINEMAP_GEOCODER_BASE_URL",
        "https://nominatim.openstreetmap.org/search",
    );
    let geocoder_user_agent = or_default("DINEMAP_GEOCODER_USER_AGENT", "RestaurantMap/1.0");
    let geocoder_region_suffix =
        or_default("DINEMAP_GEOCODER_REGION_SUFFIX", "Melbourne, Australia");
    let geocoder_timeout_secs = parse_u64("DINEMAP_GEOCODER_TIMEOUT_SECS", "30")?;
    let geocoder_min_interval_ms = parse_u64("DINEMAP_GEOCODER_MIN_INTERVAL_MS", "1000")?;
    let geocoder_max_concurrent = parse_usize("DINEMAP_GEOCODER_MAX_CONCURRENT", "1")?;

    if geocoder_max_concurrent == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "DINEMAP_GEOCODER_MAX_CONCURRENT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        records_path,
        geocoder_base_url,
        geocoder_user_agent,
        geocoder_region_suffix,
        geocoder_timeout_secs,
        geocoder_min_interval_ms,
        geocoder_max_concurrent,
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
            var: "DINEMAP_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
