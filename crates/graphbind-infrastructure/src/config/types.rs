//! Configuration types

use std::path::PathBuf;

use graphbind_domain::constants::DEFAULT_APPLICATION_TYPE;
use serde::{Deserialize, Serialize};

use crate::constants::{
    APPLICATION_DOCUMENT, DEFAULT_HOME_DIRECTORY, DEFAULT_LOG_LEVEL, MODULE_DOCUMENT,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Home directory settings
    pub home: HomeConfig,

    /// Binder selection
    pub binder: BinderConfig,

    /// Module graph documents
    pub modules: ModulesConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Home directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Explicit home directory, created when missing
    pub directory: Option<PathBuf>,

    /// Directory used when none is set and it exists
    pub default_directory: PathBuf,

    /// Configuration graph document inside the home directory
    pub configuration_file: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            directory: None,
            default_directory: PathBuf::from(DEFAULT_HOME_DIRECTORY),
            configuration_file: APPLICATION_DOCUMENT.to_string(),
        }
    }
}

/// Binder selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Binder implementation name, e.g. `graph`
    pub implementation: Option<String>,

    /// `rdf:type` of the application entity
    pub application_type: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            implementation: None,
            application_type: DEFAULT_APPLICATION_TYPE.to_string(),
        }
    }
}

/// Module document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Directories searched recursively for module documents
    pub paths: Vec<PathBuf>,

    /// File name a module document must have
    pub file_name: String,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            file_name: MODULE_DOCUMENT.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
