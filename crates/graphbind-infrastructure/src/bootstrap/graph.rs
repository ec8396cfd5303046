use std::path::Path;

use graphbind_domain::ports::GraphStore;
use graphbind_providers::{load_document, load_file};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::config::{HomeConfig, ModulesConfig};

/// Configuration graph used when the home directory has none
pub const DEFAULT_CONFIGURATION: &str = include_str!("../../resources/application.json");

/// Read the configuration graph document into `store`
pub fn load_configuration(store: &dyn GraphStore, config: &HomeConfig, home: Option<&Path>) {
    let Some(home) = home else {
        info!("Reading default configuration");
        if let Err(e) = load_document(store, DEFAULT_CONFIGURATION) {
            error!(error = %e, "Could not read default configuration");
        }
        return;
    };

    let path = home.join(&config.configuration_file);
    if !path.exists() {
        warn!(
            "There is no {} in the home directory, writing the default configuration",
            config.configuration_file
        );
        if let Err(e) = std::fs::write(&path, DEFAULT_CONFIGURATION) {
            error!(error = %e, path = %path.display(), "Could not write default configuration");
        }
    }

    info!("Reading configuration from {}", path.display());
    if let Err(e) = load_file(store, &path) {
        error!(error = %e, path = %path.display(), "Could not read configuration");
    }
}

/// Merge every module document below the configured paths into `store`
///
/// Returns the number of documents loaded.
pub fn load_modules(store: &dyn GraphStore, config: &ModulesConfig) -> usize {
    let mut loaded = 0;
    for root in &config.paths {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!(error = %e, root = %root.display(), "Could not scan module directory");
                    continue;
                }
            };
            if !entry.file_type().is_file() || entry.file_name() != config.file_name.as_str() {
                continue;
            }

            debug!(path = %entry.path().display(), "Reading module document");
            match load_file(store, entry.path()) {
                Ok(_) => loaded += 1,
                Err(e) => {
                    error!(
                        error = %e,
                        path = %entry.path().display(),
                        "Could not read module document"
                    );
                }
            }
        }
    }
    loaded
}
