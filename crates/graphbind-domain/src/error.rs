//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for graphbind
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Graph document did not have the expected shape
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the malformed input
        message: String,
    },

    /// Configuration data is missing or unusable
    ///
    /// Raised when no application root entity exists, or when no binder
    /// implementation can be selected. Never retried.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An implementation could not be activated
    #[error("Error instantiating {implementation}: {source}")]
    Activation {
        /// The implementation name that was attempted
        implementation: String,
        /// Why activation failed
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A query was made for an instance this binder never bound
    #[error("Instance not bound: {instance}")]
    NotBound {
        /// Diagnostic description of the unknown instance
        instance: String,
    },

    /// An entity-valued object was expected but a literal was found
    #[error("Property {property} holds literal {value:?}, not an entity")]
    NotAnEntity {
        /// The property that was followed
        property: String,
        /// The literal found in its place
        value: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a not bound error
    pub fn not_bound<S: Into<String>>(instance: S) -> Self {
        Self::NotBound {
            instance: instance.into(),
        }
    }

    /// Create a not an entity error
    pub fn not_an_entity<P: Into<String>, V: Into<String>>(property: P, value: V) -> Self {
        Self::NotAnEntity {
            property: property.into(),
            value: value.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and activation error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap an activation failure with the implementation name that failed
    pub fn activation<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        implementation: S,
        source: E,
    ) -> Self {
        Self::Activation {
            implementation: implementation.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error means the configuration graph is unusable
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this error came from activating an implementation
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Activation { .. })
    }
}
