//! Value objects read from the configuration graph
//!
//! Entities, values and triples are produced and owned by the graph
//! store. The binder only reads them; it never creates or mutates an
//! entity.

/// Graph node identifiers
pub mod entity;
/// Subject / predicate / object statements
pub mod triple;
/// Literal and entity-valued objects
pub mod value;

pub use entity::Entity;
pub use triple::Triple;
pub use value::{Literal, Value};
