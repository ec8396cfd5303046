//! In-memory graph store
//!
//! Statements are kept in insertion order with per-subject and
//! per-predicate indexes. Adding a statement that is already present is
//! a no-op, so the store has set semantics.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use graphbind_domain::error::Result;
use graphbind_domain::ports::GraphStore;
use graphbind_domain::value_objects::{Entity, Triple, Value};
use itertools::Itertools;
use tracing::debug;

#[derive(Debug, Default)]
struct Index {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    by_subject: HashMap<Entity, Vec<usize>>,
    by_predicate: HashMap<String, Vec<usize>>,
}

impl Index {
    fn insert(&mut self, triple: Triple) -> bool {
        if !self.seen.insert(triple.clone()) {
            return false;
        }
        let position = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(position);
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(position);
        self.triples.push(triple);
        true
    }

    fn with_predicate<'a>(&'a self, predicate: &str) -> impl Iterator<Item = &'a Triple> + 'a {
        self.by_predicate
            .get(predicate)
            .into_iter()
            .flatten()
            .map(|&position| &self.triples[position])
    }

    fn with_subject<'a>(&'a self, subject: &Entity) -> impl Iterator<Item = &'a Triple> + 'a {
        self.by_subject
            .get(subject)
            .into_iter()
            .flatten()
            .map(|&position| &self.triples[position])
    }
}

/// Indexed triple store held in memory
///
/// # Example
///
/// ```
/// use graphbind_domain::{Entity, GraphStore, Triple, Value};
/// use graphbind_providers::MemoryGraphStore;
///
/// let store = MemoryGraphStore::from_triples([Triple::new(
///     Entity::iri("urn:app"),
///     "urn:p:name",
///     Value::string("demo"),
/// )]);
/// assert_eq!(store.first(&Entity::iri("urn:app"), "urn:p:name"), Some(Value::string("demo")));
/// ```
#[derive(Debug, Default)]
pub struct MemoryGraphStore {
    index: RwLock<Index>,
}

impl MemoryGraphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `triples`
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut index = Index::default();
        for triple in triples {
            index.insert(triple);
        }
        Self {
            index: RwLock::new(index),
        }
    }

    /// Copy of every statement, in insertion order
    pub fn triples(&self) -> Vec<Triple> {
        self.read().triples.clone()
    }

    // Indexes stay consistent even if a writer panicked: every insert
    // pushes the triple last, after its index entries.
    fn read(&self) -> RwLockReadGuard<'_, Index> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GraphStore for MemoryGraphStore {
    fn project(&self, predicate: &str, object: &Value) -> Vec<Entity> {
        self.read()
            .with_predicate(predicate)
            .filter(|triple| triple.object == *object)
            .map(|triple| triple.subject.clone())
            .unique()
            .collect()
    }

    fn project_any(&self, predicate: &str) -> Vec<Entity> {
        self.read()
            .with_predicate(predicate)
            .map(|triple| triple.subject.clone())
            .unique()
            .collect()
    }

    fn values(&self, subject: &Entity, predicate: &str) -> Vec<Value> {
        self.read()
            .with_subject(subject)
            .filter(|triple| triple.predicate == predicate)
            .map(|triple| triple.object.clone())
            .collect()
    }

    fn first(&self, subject: &Entity, predicate: &str) -> Option<Value> {
        self.read()
            .with_subject(subject)
            .find(|triple| triple.predicate == predicate)
            .map(|triple| triple.object.clone())
    }

    fn properties(&self, subject: &Entity) -> Vec<String> {
        self.read()
            .with_subject(subject)
            .map(|triple| triple.predicate.clone())
            .unique()
            .collect()
    }

    fn add(&self, triples: Vec<Triple>) -> Result<()> {
        let mut index = self.index.write().unwrap_or_else(PoisonError::into_inner);
        let offered = triples.len();
        let added = triples
            .into_iter()
            .filter(|triple| index.insert(triple.clone()))
            .count();
        debug!(offered, added, total = index.triples.len(), "Statements added");
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().triples.len()
    }
}
