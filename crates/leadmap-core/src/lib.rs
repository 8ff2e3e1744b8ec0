//! Shared domain types and configuration for the lead map workspace.

pub mod app_config;
pub mod config;
pub mod lead;
pub mod search;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use lead::{Lead, NOT_AVAILABLE};
pub use search::{SearchMode, SearchParams};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Validation failures raised before any search work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("please provide a city")]
    MissingCity,

    #[error("please provide at least one city")]
    NoCities,
}
