//! Layered settings for both binaries.
//!
//! Sources, lowest precedence first:
//! - Built-in defaults
//! - An optional TOML file (only when passed with `--config`)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `NUMSIFT_` and use double
//! underscores to separate nested levels:
//! - `NUMSIFT_SINK__LOG_FILE=/tmp/demo.log` sets `sink.log_file`
//! - `NUMSIFT_LOGGING__DEFAULT=debug` sets `logging.default`
//!
//! With no file and no variables present the defaults reproduce the fixed
//! behavior of the binaries (`app.log` in the working directory, `warn`
//! diagnostics).

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "NUMSIFT_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Diagnostic logging (tracing) configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Demo logger sink configuration
    #[serde(default)]
    pub sink: SinkConfig,
}

/// Diagnostic log levels, global and per module.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `numsift::numbers = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SinkConfig {
    /// File appended to while the file sink is active
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_log_file() -> PathBuf {
    PathBuf::from("app.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            sink: SinkConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Load settings from defaults and environment, plus `path` if given.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(path) = path {
            // Missing files are silently empty to figment; an explicit path must exist.
            if !path.is_file() {
                return Err(Box::new(figment::Error::custom(format!(
                    "settings file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Render the active settings as pretty TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
