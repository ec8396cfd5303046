//! Entity-instance binding
//!
//! [`GraphBinder`] is the graph-backed implementation of the
//! [`graphbind_domain::Binder`] port.

mod graph_binder;
mod identity;

pub use graph_binder::{GraphBinder, GraphBinderBuilder};
