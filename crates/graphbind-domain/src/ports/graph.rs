//! Graph Store Port
//!
//! The binder consumes the graph as an opaque data source. Stores are
//! read-mostly: after bootstrap the only mutation is a single optional
//! [`GraphStore::add`] recording runtime-derived facts on the
//! application entity.

use crate::error::Result;
use crate::value_objects::{Entity, Triple, Value};

/// Triple store queried by the binder
///
/// All sequences are returned in the store's insertion order, with
/// duplicates removed where the operation yields entities or predicates.
pub trait GraphStore: Send + Sync {
    /// All subjects having `predicate` pointing at `object`
    fn project(&self, predicate: &str, object: &Value) -> Vec<Entity>;

    /// All subjects having any object for `predicate`
    fn project_any(&self, predicate: &str) -> Vec<Entity>;

    /// All objects for `(subject, predicate)`
    fn values(&self, subject: &Entity, predicate: &str) -> Vec<Value>;

    /// First object for `(subject, predicate)`
    fn first(&self, subject: &Entity, predicate: &str) -> Option<Value> {
        self.values(subject, predicate).into_iter().next()
    }

    /// All distinct predicates used by `subject`
    fn properties(&self, subject: &Entity) -> Vec<String>;

    /// Add statements to the store
    fn add(&self, triples: Vec<Triple>) -> Result<()>;

    /// Number of statements held
    fn len(&self) -> usize;

    /// Whether the store holds no statements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
