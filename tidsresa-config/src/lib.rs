//! # Tidsresa Configuration System
//!
//! Hierarchical startup configuration for the tidsresa virtual clock.
//!
//! ## Features
//! - **Unified Configuration**: Single source of truth for clock and telemetry wiring
//! - **Validation**: Runtime validation of offsets and level names before anything is built
//! - **Environment Awareness**: Environment-specific overlays and `TIDSRESA_*` variables

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod telemetry;
mod travel;
mod validation;

pub use error::ConfigError;
pub use telemetry::TelemetrySettings;
pub use travel::TravelSettings;

/// Top-level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct TidsresaConfig {
    /// Travel clock startup state (enabled flag, initial offset).
    #[validate(nested)]
    pub travel: TravelSettings,

    /// Logging and metrics wiring parameters.
    #[validate(nested)]
    pub telemetry: TelemetrySettings,
}

impl TidsresaConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/tidsresa.yaml` - Base settings. If missing, defaults are used.
    /// 3. `config/<environment>.yaml` - Environment-specific overrides.
    /// 4. `TIDSRESA_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Start with defaults.
        let mut figment = Figment::from(Serialized::defaults(TidsresaConfig::default()));

        if Path::new("config/tidsresa.yaml").exists() {
            figment = figment.merge(Yaml::file("config/tidsresa.yaml"));
        } else {
            println!("config/tidsresa.yaml not found, using default configuration");
        }

        let env = std::env::var("TIDSRESA_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        figment
            .merge(Env::prefixed("TIDSRESA_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(
                path.to_string_lossy().to_string(),
            )));
        }

        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("TIDSRESA_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
