//! Bound instance contracts
//!
//! Every instance the binder hands out is an [`Instance`], a shared
//! `dyn Component`. Components recover their concrete type through
//! `downcast-rs`, and opt into graph-driven wiring by exposing
//! [`Bindable`] from [`Component::as_bindable`].

use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::error::Result;

use super::binder::Binder;

/// An object materialized for exactly one entity
pub trait Component: DowncastSync {
    /// The optional bind capability of this component
    ///
    /// Components that implement [`Bindable`] return `Some(self)`.
    fn as_bindable(&self) -> Option<&dyn Bindable> {
        None
    }

    /// Concrete type name, for diagnostics
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl_downcast!(sync Component);

/// Shared handle to a bound component
pub type Instance = Arc<dyn Component>;

/// Post-construction callback capability
///
/// Invoked exactly once, right after the instance is registered with
/// the binder. Querying the binder for the instance's own entity from
/// inside the callback returns the already registered instance.
pub trait Bindable: Send + Sync {
    /// Receive the binder that created this instance
    fn on_bound(&self, binder: &dyn Binder) -> Result<()>;
}

/// Behaviourless instance bound to entities without an implementation
#[derive(Debug, Default)]
pub struct EmptyComponent;

impl Component for EmptyComponent {}

/// Identity key of an instance: the address of its data
///
/// Two instances are the same instance only if they share an address,
/// regardless of their contents.
pub fn identity(instance: &dyn Component) -> usize {
    std::ptr::from_ref(instance).cast::<()>() as usize
}
