//! Configuration bootstrap
//!
//! Builds the configuration graph a binder reads:
//!
//! ```text
//! AppConfig
//!   │
//!   ├─ home directory ──► application.json (written from the default when missing)
//!   │        │
//!   │        └─ none ───► built-in default document
//!   │
//!   └─ modules.paths ───► every graphbind.json found below them
//! ```
//!
//! Unreadable documents are logged and skipped; bootstrap continues with
//! whatever was loaded.

mod graph;
mod home;

use std::path::PathBuf;
use std::sync::Arc;

use graphbind_application::GraphBinder;
use graphbind_domain::constants::HOME_DIRECTORY;
use graphbind_domain::error::Result;
use graphbind_domain::ports::{Activator, GraphStore};
use graphbind_domain::value_objects::Value;
use graphbind_providers::MemoryGraphStore;
use tracing::info;

use crate::config::AppConfig;

pub use graph::{DEFAULT_CONFIGURATION, load_configuration, load_modules};
pub use home::resolve_home_directory;

/// Configuration graph plus the home directory it came from
#[derive(Debug)]
pub struct BootstrappedGraph {
    /// Statements from the configuration and module documents
    pub store: Arc<MemoryGraphStore>,
    /// Home directory, when one was configured or found
    pub home: Option<PathBuf>,
}

/// Load the configuration graph described by `config`
pub fn bootstrap_graph(config: &AppConfig) -> Result<BootstrappedGraph> {
    let home = resolve_home_directory(&config.home)?;
    let store = Arc::new(MemoryGraphStore::new());

    load_configuration(store.as_ref(), &config.home, home.as_deref());
    let modules = load_modules(store.as_ref(), &config.modules);

    info!(
        statements = store.len(),
        modules, "Configuration graph loaded"
    );
    Ok(BootstrappedGraph { store, home })
}

/// Load the configuration graph and bind its application
///
/// The home directory, when present, is recorded on the application
/// entity under the home-directory predicate.
pub fn bootstrap_binder(
    config: &AppConfig,
    application_type: &str,
    activator: Arc<dyn Activator>,
) -> Result<GraphBinder> {
    let BootstrappedGraph { store, home } = bootstrap_graph(config)?;

    let mut builder = GraphBinder::builder(store, application_type, activator);
    if let Some(home) = home {
        builder = builder.annotate(HOME_DIRECTORY, Value::string(home.display().to_string()));
    }
    builder.build()
}
