//! Application ports
//!
//! Registration points other crates plug into.

pub mod registry;
