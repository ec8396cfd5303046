//! Application Layer - graphbind
//!
//! The entity-instance binder and the registries it activates from.
//!
//! ## Architecture
//!
//! - `binder::GraphBinder`: binds graph entities to instances lazily,
//!   keeping one instance per entity for the binder's lifetime
//! - `ports::registry`: linkme slices where implementations and binder
//!   implementations register themselves at compile time
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `graphbind-domain`: graph values, binder ports, errors
//! - Pure Rust libraries for logging and registration

pub mod binder;
pub mod ports;

pub use binder::{GraphBinder, GraphBinderBuilder};
pub use ports::registry::{
    BINDER_IMPLEMENTATIONS, BinderEntry, IMPLEMENTATIONS, ImplementationEntry, RegistryActivator,
    list_binders, list_implementations, resolve_binder, resolve_implementation,
};
