//! Graph store providers

pub mod memory;

pub use memory::MemoryGraphStore;
