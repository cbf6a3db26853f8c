use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_VERSION;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Display version used when a record does not carry one.
    pub default_version: String,
    pub fold_lines: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `ROLODEX_`-prefixed environment variables
    /// and an optional `config.toml`. The TOML file takes precedence over the environment.
    ///
    /// Nested keys use a double underscore, e.g. `ROLODEX_OUTPUT__FOLD_LINES=true`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if the loaded values do not validate.
    pub fn load() -> CoreResult<Self> {
        let settings = Config::builder()
            .set_default("output.default_version", DEFAULT_VERSION)?
            .set_default("output.fold_lines", false)?
            .set_default("logging.level", "info")?
            .add_source(
                config::Environment::with_prefix("ROLODEX")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Errors
    /// Returns an error if `output.default_version` does not start with a numeric major version.
    pub fn validate(&self) -> CoreResult<()> {
        let version = &self.output.default_version;
        let major = version.split('.').next().unwrap_or_default().trim();

        if major.parse::<u32>().is_err() {
            return Err(CoreError::ValidationError(format!(
                "output.default_version must look like 3.0, got {version:?}"
            )));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    if let Err(err) = dotenvy::dotenv() {
        tracing::trace!(error = %err, "No .env file loaded");
    }

    Settings::load()
}
