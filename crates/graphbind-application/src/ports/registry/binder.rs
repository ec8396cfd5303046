//! Binder Implementation Registry
//!
//! Binder implementations register a two-argument factory taking the
//! application type and the activator. The infrastructure selector
//! picks one by name.

use std::sync::Arc;

use graphbind_domain::error::{Error, Result};
use graphbind_domain::ports::{Activator, Binder};

/// Registry entry for a binder implementation
pub struct BinderEntry {
    /// Unique binder name (e.g., "graph")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory taking (application type IRI, activator)
    pub factory: fn(&str, Arc<dyn Activator>) -> Result<Arc<dyn Binder>>,
}

#[linkme::distributed_slice]
pub static BINDER_IMPLEMENTATIONS: [BinderEntry] = [..];

/// Construct the named binder implementation
///
/// Unknown names are a configuration error; factory errors are returned
/// unchanged.
pub fn resolve_binder(
    name: &str,
    application_type: &str,
    activator: Arc<dyn Activator>,
) -> Result<Arc<dyn Binder>> {
    for entry in BINDER_IMPLEMENTATIONS {
        if entry.name == name {
            return (entry.factory)(application_type, activator);
        }
    }

    let available: Vec<&str> = BINDER_IMPLEMENTATIONS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown binder implementation '{name}'. Available binders: {available:?}"
    )))
}

/// List all registered binder implementations as (name, description)
pub fn list_binders() -> Vec<(&'static str, &'static str)> {
    BINDER_IMPLEMENTATIONS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
