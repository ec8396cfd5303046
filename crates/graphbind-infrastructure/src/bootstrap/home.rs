use std::path::PathBuf;

use graphbind_domain::error::Result;
use tracing::info;

use crate::config::HomeConfig;
use crate::error_ext::ErrorContext;

/// Locate the home directory
///
/// An explicit directory is created when missing. Otherwise the default
/// directory is used when it exists. Without either there is no home
/// directory.
pub fn resolve_home_directory(config: &HomeConfig) -> Result<Option<PathBuf>> {
    if let Some(directory) = &config.directory {
        if !directory.is_dir() {
            std::fs::create_dir_all(directory).io_context(format!(
                "Failed to create home directory {}",
                directory.display()
            ))?;
            info!("Created home directory {}", directory.display());
        }
        info!("Home directory: {}", directory.display());
        return Ok(Some(directory.clone()));
    }

    if config.default_directory.is_dir() {
        info!(
            "Home directory found in the working directory: {}",
            config.default_directory.display()
        );
        return Ok(Some(config.default_directory.clone()));
    }

    info!("Home directory is not set, continuing without one");
    Ok(None)
}
