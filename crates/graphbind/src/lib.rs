//! # graphbind
//!
//! Binds the entities of an RDF-style configuration graph to live
//! instances. Every entity gets exactly one instance, created on first
//! reference from the implementation name the graph declares for it.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use graphbind::application::{GraphBinder, RegistryActivator};
//! use graphbind::providers::{MemoryGraphStore, load_document};
//!
//! let store = Arc::new(MemoryGraphStore::new());
//! load_document(store.as_ref(), include_str!("application.json"))?;
//!
//! let binder = GraphBinder::new(
//!     store,
//!     graphbind::constants::DEFAULT_APPLICATION_TYPE,
//!     Arc::new(RegistryActivator::new()),
//! )?;
//! let application = binder.application()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Graph values, binder ports and errors
//! - `application` - The graph binder and implementation registries
//! - `providers` - In-memory graph store and JSON graph documents
//! - `infrastructure` - Configuration, logging, bootstrap, binder selection

/// Domain layer - graph values, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use graphbind_domain::*;
}

/// Application layer - binder and registries
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use graphbind_application::*;
}

/// Providers - graph store and document loader
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use graphbind_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use graphbind_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export binder selection at the crate root
pub use infrastructure::{BinderSelector, for_application};
