//! Configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from built-in defaults,
//! an optional `graphbind.toml` and `GRAPHBIND__`-prefixed environment
//! variables.
//!
//! A process may install the configuration it loaded with
//! [`set_active_config`]; binder factories registered through
//! `BINDER_IMPLEMENTATIONS` read it back with [`active_config`] since their
//! signature carries no configuration.

mod loader;
mod types;

use std::sync::OnceLock;

use graphbind_domain::error::Result;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, BinderConfig, HomeConfig, LoggingConfig, ModulesConfig};

static ACTIVE_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Install the process configuration
///
/// Returns `false` when a configuration was already installed; the first
/// one stays in effect.
pub fn set_active_config(config: AppConfig) -> bool {
    ACTIVE_CONFIG.set(config).is_ok()
}

/// The installed configuration, or a freshly loaded one
pub fn active_config() -> Result<AppConfig> {
    match ACTIVE_CONFIG.get() {
        Some(config) => Ok(config.clone()),
        None => ConfigLoader::new().load(),
    }
}
