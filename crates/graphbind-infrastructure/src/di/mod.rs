//! Binder selection
//!
//! [`BinderSelector`] chooses a registered binder implementation by name.
//! This crate contributes the `graph` binder, which bootstraps the
//! configuration graph and binds its application.

mod graph_binder;
mod selector;

pub use graph_binder::GRAPH_BINDER;
pub use selector::{BinderSelector, for_application};

/// Name of the binder this crate registers
///
/// Referencing it from a binary keeps the `graph` entry linked into
/// `BINDER_IMPLEMENTATIONS`.
pub fn builtin_binder() -> &'static str {
    GRAPH_BINDER.name
}
