use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalysisSettings, BonusByProfitParams, Config, Logging, Policies};

/// Prefix for environment overrides, e.g. `SALES__ANALYSIS__TOP_PRODUCTS_LIMIT=5`.
pub const ENV_PREFIX: &str = "SALES";

/// Loads the application configuration from a TOML file plus `SALES__*` environment overrides.
///
/// A missing file is not an error: the defaults then apply.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    tracing::debug!(path = %path.display(), "Configuration loaded.");

    validate(config)
}

/// Parses configuration from an in-memory TOML document. No environment overrides apply.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    validate(builder.try_deserialize::<Config>()?)
}

fn validate(config: Config) -> Result<Config, ConfigError> {
    if config.analysis.top_products_limit == 0 {
        return Err(ConfigError::ValidationError(
            "analysis.top_products_limit must be greater than 0".to_string(),
        ));
    }
    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.level must not be empty".to_string(),
        ));
    }
    Ok(config)
}
