//! Activator Port
//!
//! Given an implementation name, produce a new instance. The binder
//! never constructs components itself; the activator is injected at
//! construction so tests can substitute a fake one.

use crate::error::Result;

use super::component::Instance;

/// Creates instances from implementation type names
///
/// Failures should say why the name could not be activated (unknown
/// name, constructor error). The binder wraps them in
/// [`crate::Error::Activation`] together with the attempted name.
pub trait Activator: Send + Sync {
    /// Create a new instance of the named implementation
    fn activate(&self, type_name: &str) -> Result<Instance>;
}

impl<F> Activator for F
where
    F: Fn(&str) -> Result<Instance> + Send + Sync,
{
    fn activate(&self, type_name: &str) -> Result<Instance> {
        self(type_name)
    }
}
