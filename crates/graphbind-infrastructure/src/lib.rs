//! Infrastructure Layer - graphbind
//!
//! Everything the binder needs from the outside world: configuration
//! files and environment, logging, the home directory, graph documents on
//! disk and the selection of a binder implementation.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | `AppConfig` and its figment loader |
//! | [`logging`] | tracing subscriber setup |
//! | [`bootstrap`] | Home directory and configuration graph loading |
//! | [`di`] | Binder selection and the built-in `graph` binder |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{BootstrappedGraph, bootstrap_binder, bootstrap_graph};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{BinderSelector, builtin_binder, for_application};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
