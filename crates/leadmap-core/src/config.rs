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
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values count as unset so `KEY=` in a .env file disables the key.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        optional(var)
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    };

    let env = parse_environment(&or_default("LEADMAP_ENV", "development"))?;
    let bind_addr = parse_addr("LEADMAP_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LEADMAP_LOG_LEVEL", "info");

    let gemini_api_key = optional("GEMINI_API_KEY");
    let gemini_model = or_default("LEADMAP_GEMINI_MODEL", "gemini-2.5-flash");
    let gemini_base_url = or_default(
        "LEADMAP_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com",
    );
    let model_timeout_secs = parse_optional_u64("LEADMAP_MODEL_TIMEOUT_SECS")?;

    let backend_url = or_default("LEADMAP_BACKEND_URL", "http://127.0.0.1:3000");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        model_timeout_secs,
        backend_url,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LEADMAP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
