//! # Domain Layer
//!
//! Core types and boundary contracts for graphbind, the graph-driven
//! object binder.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Entities, values and triples read from the graph |
//! | [`ports`] | Graph store, activator, component and binder contracts |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Vocabulary IRIs the binder understands |
//!
//! The domain crate has no knowledge of how a graph is stored or how an
//! implementation name becomes an object. Both are injected through
//! [`ports::GraphStore`] and [`ports::Activator`].

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Activator, Bindable, Binder, Component, EmptyComponent, GraphStore, Instance};
pub use value_objects::{Entity, Literal, Triple, Value};
