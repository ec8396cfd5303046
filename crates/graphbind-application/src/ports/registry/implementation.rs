//! Component Implementation Registry
//!
//! Maps implementation type names, as written in the graph, to factories.

use graphbind_domain::error::{Error, Result};
use graphbind_domain::ports::{Activator, Instance};
use tracing::debug;

/// Registry entry for a component implementation
pub struct ImplementationEntry {
    /// Type name used in the graph (e.g., "app::Server")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a fresh instance
    pub factory: fn() -> Result<Instance>,
}

#[linkme::distributed_slice]
pub static IMPLEMENTATIONS: [ImplementationEntry] = [..];

/// Create an instance of the named implementation
///
/// # Returns
/// * `Ok(Instance)` - Newly created instance
/// * `Err(Error::NotFound)` - No entry registered under `name`
/// * `Err(_)` - Whatever the factory reported
pub fn resolve_implementation(name: &str) -> Result<Instance> {
    for entry in IMPLEMENTATIONS {
        if entry.name == name {
            debug!(implementation = name, "Creating registered implementation");
            return (entry.factory)();
        }
    }

    let available: Vec<&str> = IMPLEMENTATIONS.iter().map(|e| e.name).collect();
    Err(Error::not_found(format!(
        "implementation '{name}'. Available implementations: {available:?}"
    )))
}

/// List all registered implementations as (name, description)
pub fn list_implementations() -> Vec<(&'static str, &'static str)> {
    IMPLEMENTATIONS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

/// Activator backed by the [`IMPLEMENTATIONS`] registry
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryActivator;

impl RegistryActivator {
    /// Create a new registry activator
    pub fn new() -> Self {
        Self
    }
}

impl Activator for RegistryActivator {
    fn activate(&self, type_name: &str) -> Result<Instance> {
        resolve_implementation(type_name)
    }
}
