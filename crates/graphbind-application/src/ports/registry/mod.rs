//! Implementation Registry System
//!
//! Defines the auto-registration infrastructure for components and
//! binder implementations. Uses the `linkme` crate for compile-time
//! registration of entries that are discovered by name at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Implementation Registration Flow                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Crate defines:     #[linkme::distributed_slice(IMPLS)]      │
//! │                        static ENTRY: ImplementationEntry = ...  │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static IMPLS: [Entry] = [..]         │
//! │                              ↓                                  │
//! │  3. Activator queries: IMPLEMENTATIONS.iter()                   │
//! │                              ↓                                  │
//! │  4. Graph selects:     "app::Server"^^rustTypeName              │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use graphbind_application::ports::registry::{ImplementationEntry, IMPLEMENTATIONS};
//!
//! #[linkme::distributed_slice(IMPLEMENTATIONS)]
//! static SERVER: ImplementationEntry = ImplementationEntry {
//!     name: "app::Server",
//!     description: "HTTP front end",
//!     factory: || Ok(Arc::new(Server::default())),
//! };
//! ```

pub mod binder;
pub mod implementation;

pub use binder::{BINDER_IMPLEMENTATIONS, BinderEntry, list_binders, resolve_binder};
pub use implementation::{
    IMPLEMENTATIONS, ImplementationEntry, RegistryActivator, list_implementations,
    resolve_implementation,
};
