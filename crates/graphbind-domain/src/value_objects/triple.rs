use serde::{Deserialize, Serialize};

use super::{Entity, Value};

/// A single graph statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject entity
    pub subject: Entity,
    /// Predicate IRI
    pub predicate: String,
    /// Object value
    pub object: Value,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: Entity, predicate: impl Into<String>, object: Value) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}
