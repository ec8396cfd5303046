//! Domain Port Interfaces
//!
//! Boundary contracts between the binder and its collaborators.
//!
//! ## Organization
//!
//! - **graph** - The triple store the binder reads configuration from
//! - **activator** - Turns an implementation name into a new instance
//! - **component** - What a bound instance is, and the optional bind callback
//! - **binder** - The query surface components use to wire themselves

/// Implementation activation port
pub mod activator;
/// Binder query surface
pub mod binder;
/// Bound instance contracts
pub mod component;
/// Graph store port
pub mod graph;

pub use activator::Activator;
pub use binder::Binder;
pub use component::{Bindable, Component, EmptyComponent, Instance, identity};
pub use graph::GraphStore;
