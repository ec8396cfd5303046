//! Graph document loader
//!
//! Reads the JSON graph documents configuration is written in. The
//! accepted shape is a small subset of JSON-LD:
//!
//! ```json
//! {
//!   "@context": { "server": "http://purl.org/openapp/server/" },
//!   "@graph": [
//!     {
//!       "@id": "urn:app",
//!       "@type": "server:Application",
//!       "server:implementation": {
//!         "@value": "app::Server",
//!         "@type": "server:rustTypeName"
//!       },
//!       "urn:app:port": 8080,
//!       "urn:app:handler": [{ "@id": "urn:app:static" }, { "urn:app:root": "/srv" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Node objects without `@id` become fresh blank nodes. Numbers and
//! booleans become literals tagged with the matching XSD datatype.

mod document;

use std::path::Path;

use graphbind_domain::error::{Error, Result};
use graphbind_domain::ports::GraphStore;
use tracing::debug;

pub use document::parse_document;

/// Parse `text` and add its statements to `store`
///
/// Returns the number of statements the document contained.
pub fn load_document(store: &dyn GraphStore, text: &str) -> Result<usize> {
    let triples = parse_document(text)?;
    let count = triples.len();
    store.add(triples)?;
    Ok(count)
}

/// Read a graph document from `path` into `store`
pub fn load_file(store: &dyn GraphStore, path: &Path) -> Result<usize> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::io_with_source(format!("Failed to read {}", path.display()), e))?;
    let count = load_document(store, &text)?;
    debug!(path = %path.display(), statements = count, "Graph document loaded");
    Ok(count)
}
