//! Vocabulary constants
//!
//! IRIs the binder gives meaning to. Everything else in the graph is
//! opaque data handed to the bound components.

// ============================================================================
// RDF VOCABULARY
// ============================================================================

/// The `rdf:type` predicate
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// XSD namespace, used to tag numeric and boolean literals
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

// ============================================================================
// SERVER VOCABULARY
// ============================================================================

/// Namespace of the server vocabulary
pub const SERVER_NAMESPACE: &str = "http://purl.org/openapp/server/";

/// Predicate linking an entity to its implementation type name
pub const IMPLEMENTATION: &str = "http://purl.org/openapp/server/implementation";

/// Datatype marking an implementation value as a registered Rust type name
pub const TYPE_NAME_DATATYPE: &str = "http://purl.org/openapp/server/rustTypeName";

/// Predicate recording the home directory on the application entity
pub const HOME_DIRECTORY: &str = "http://purl.org/openapp/server/homeDirectory";

/// Type marking the application root entity
pub const DEFAULT_APPLICATION_TYPE: &str = "http://purl.org/openapp/server/Application";

/// Blank node label prefix
pub const BLANK_NODE_PREFIX: &str = "_:";
