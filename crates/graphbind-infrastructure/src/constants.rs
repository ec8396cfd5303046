//! Infrastructure layer constants
//!
//! Vocabulary IRIs live in `graphbind_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "graphbind.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "graphbind";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore, e.g.
/// `GRAPHBIND__BINDER__IMPLEMENTATION`.
pub const CONFIG_ENV_PREFIX: &str = "GRAPHBIND";

/// Separator between environment prefix and nested keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HOME DIRECTORY CONSTANTS
// ============================================================================

/// Home directory looked up in the working directory
pub const DEFAULT_HOME_DIRECTORY: &str = "graphbind";

/// Configuration graph document inside the home directory
pub const APPLICATION_DOCUMENT: &str = "application.json";

/// File name of module graph documents
pub const MODULE_DOCUMENT: &str = "graphbind.json";

// ============================================================================
// BINDER CONSTANTS
// ============================================================================

/// Name of the built-in graph binder
pub const GRAPH_BINDER_NAME: &str = "graph";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "GRAPHBIND_LOG";
