//! Binder Port
//!
//! The query surface components use to navigate the configuration graph
//! as typed properties and relations. Every method taking a
//! `&dyn Component` looks the component up by identity; components the
//! binder never bound are reported as [`crate::Error::NotBound`].

use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::Entity;

use super::activator::Activator;
use super::component::{Component, Instance};

/// Entity-instance binder
///
/// # Example
///
/// ```ignore
/// impl Bindable for HttpServer {
///     fn on_bound(&self, binder: &dyn Binder) -> Result<()> {
///         let port = binder.value(self, "urn:server:port")?;
///         let handlers = binder.instances(self, "urn:server:handler")?;
///         // ...
///         Ok(())
///     }
/// }
/// ```
pub trait Binder: Send + Sync {
    /// The instance bound to the application root entity
    fn application(&self) -> Result<Instance>;

    /// The activator this binder creates instances with
    fn activator(&self) -> Arc<dyn Activator>;

    /// The entity a bound instance was created for
    fn entity_of(&self, instance: &dyn Component) -> Result<Entity>;

    /// All distinct properties used by the instance's entity
    fn properties(&self, instance: &dyn Component) -> Result<Vec<String>>;

    /// First value of `property`: literal payload, or the IRI of an entity
    fn value(&self, instance: &dyn Component, property: &str) -> Result<Option<String>>;

    /// All values of `property`, coerced as in [`Binder::value`]
    fn values(&self, instance: &dyn Component, property: &str) -> Result<Vec<String>>;

    /// Instance bound to the first entity-valued object of `property`
    fn instance(&self, instance: &dyn Component, property: &str) -> Result<Option<Instance>>;

    /// Instances bound to every entity-valued object of `property`
    fn instances(&self, instance: &dyn Component, property: &str) -> Result<Vec<Instance>>;

    /// Instance of the first entity in the graph with `property` = `value`
    fn find_instance(&self, property: &str, value: &str) -> Result<Option<Instance>>;

    /// Instances of every entity in the graph with `property` = `value`
    fn find_instances(&self, property: &str, value: &str) -> Result<Vec<Instance>>;

    /// Instances of every entity in the graph using `property`
    fn instances_with(&self, property: &str) -> Result<Vec<Instance>>;
}
