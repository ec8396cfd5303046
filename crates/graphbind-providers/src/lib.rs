//! # Provider Implementations
//!
//! Concrete adapters behind the domain ports.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`graph`] | In-memory indexed triple store |
//! | [`loader`] | JSON graph documents into triples |

pub mod graph;
pub mod loader;

pub use graph::MemoryGraphStore;
pub use loader::{load_document, load_file, parse_document};
