//! Graph-backed binder
//!
//! Resolves entities to instances on first reference and caches the
//! binding for the binder's lifetime.
//!
//! ## Resolution
//!
//! ```text
//! resolve(entity)
//!   │
//!   ├─ bound already? ──────────────► cached instance
//!   │
//!   ├─ implementation ^^rustTypeName? ─ no ─► EmptyComponent
//!   │                                  yes ─► Activator::activate(name)
//!   │
//!   ├─ register entity ↔ instance
//!   │
//!   └─ Bindable::on_bound(binder)   (lock released)
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use graphbind_domain::constants::{IMPLEMENTATION, RDF_TYPE, TYPE_NAME_DATATYPE};
use graphbind_domain::error::{Error, Result};
use graphbind_domain::ports::{Activator, Binder, Component, EmptyComponent, GraphStore, Instance};
use graphbind_domain::value_objects::{Entity, Triple, Value};
use itertools::Itertools;
use tracing::{debug, info, warn};

use super::identity::BindingTable;

/// Builder for [`GraphBinder`]
///
/// Collects the optional annotations recorded on the application entity
/// before it is resolved.
pub struct GraphBinderBuilder {
    store: Arc<dyn GraphStore>,
    application_type: String,
    activator: Arc<dyn Activator>,
    annotations: Vec<(String, Value)>,
}

impl GraphBinderBuilder {
    /// Record `predicate` = `value` on the application entity at build time
    pub fn annotate(mut self, predicate: impl Into<String>, value: Value) -> Self {
        self.annotations.push((predicate.into(), value));
        self
    }

    /// Locate the application entity and bind it
    ///
    /// Fails with [`Error::Configuration`] when no entity has the
    /// application type. When several do, the one whose IRI sorts first
    /// is chosen.
    pub fn build(self) -> Result<GraphBinder> {
        let candidates: Vec<Entity> = self
            .store
            .project(RDF_TYPE, &Value::iri(self.application_type.as_str()))
            .into_iter()
            .sorted_by_key(Entity::to_iri)
            .collect();

        let Some(application_entity) = candidates.first().cloned() else {
            return Err(Error::configuration(format!(
                "Subject definition of application {} not found",
                self.application_type
            )));
        };

        if candidates.len() > 1 {
            warn!(
                application_type = %self.application_type,
                chosen = %application_entity,
                "Several application entities found: {}",
                candidates.iter().join(", ")
            );
        }

        if !self.annotations.is_empty() {
            let triples = self
                .annotations
                .into_iter()
                .map(|(predicate, value)| Triple::new(application_entity.clone(), predicate, value))
                .collect();
            self.store.add(triples)?;
        }

        let binder = GraphBinder {
            store: self.store,
            activator: self.activator,
            bindings: Mutex::new(BindingTable::default()),
            application_entity,
            application: OnceLock::new(),
        };
        binder.resolve(&binder.application_entity)?;

        info!(
            application = %binder.application_entity,
            bound = binder.bound_count()?,
            "Application bound"
        );
        Ok(binder)
    }
}

/// Binds graph entities to instances, one instance per entity
///
/// Construction either binds the application root or fails; there is no
/// partially initialized binder. All later instances are created lazily
/// by the query methods of [`Binder`].
pub struct GraphBinder {
    store: Arc<dyn GraphStore>,
    activator: Arc<dyn Activator>,
    bindings: Mutex<BindingTable>,
    application_entity: Entity,
    application: OnceLock<Instance>,
}

impl GraphBinder {
    /// Bind the application whose `rdf:type` is `application_type`
    pub fn new(
        store: Arc<dyn GraphStore>,
        application_type: impl Into<String>,
        activator: Arc<dyn Activator>,
    ) -> Result<Self> {
        Self::builder(store, application_type, activator).build()
    }

    /// Start building a binder with root annotations
    pub fn builder(
        store: Arc<dyn GraphStore>,
        application_type: impl Into<String>,
        activator: Arc<dyn Activator>,
    ) -> GraphBinderBuilder {
        GraphBinderBuilder {
            store,
            application_type: application_type.into(),
            activator,
            annotations: Vec::new(),
        }
    }

    /// The application root entity
    pub fn application_entity(&self) -> &Entity {
        &self.application_entity
    }

    /// The graph this binder reads
    pub fn store(&self) -> &Arc<dyn GraphStore> {
        &self.store
    }

    /// Number of entities bound so far
    pub fn bound_count(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Instance bound to `entity`, activating it on first reference
    ///
    /// The binding is registered before the instance's [`Bindable`]
    /// callback runs, so the callback resolving its own entity gets the
    /// same instance back. A failing callback leaves the binding in
    /// place.
    ///
    /// [`Bindable`]: graphbind_domain::Bindable
    pub fn resolve(&self, entity: &Entity) -> Result<Instance> {
        let instance = {
            let mut bindings = self.lock()?;
            if let Some(instance) = bindings.get(entity) {
                return Ok(Arc::clone(instance));
            }

            let instance = self.activate(entity)?;
            bindings.insert(entity.clone(), Arc::clone(&instance));
            if *entity == self.application_entity {
                let _ = self.application.set(Arc::clone(&instance));
            }
            instance
        };

        if let Some(bindable) = instance.as_bindable() {
            debug!(entity = %entity, "Invoking bind callback");
            bindable.on_bound(self)?;
        }
        Ok(instance)
    }

    fn activate(&self, entity: &Entity) -> Result<Instance> {
        let Some(implementation) = self.implementation_of(entity) else {
            debug!(entity = %entity, "No implementation declared, binding empty component");
            return Ok(Arc::new(EmptyComponent));
        };

        info!("Instantiating {implementation}");
        self.activator
            .activate(&implementation)
            .map_err(|e| Error::activation(implementation, e))
    }

    /// The last implementation value tagged as a type name
    fn implementation_of(&self, entity: &Entity) -> Option<String> {
        self.store
            .values(entity, IMPLEMENTATION)
            .into_iter()
            .filter(|value| value.type_tag() == Some(TYPE_NAME_DATATYPE))
            .filter_map(|value| value.as_str().map(str::to_string))
            .last()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BindingTable>> {
        self.bindings
            .lock()
            .map_err(|_| Error::internal("binding table lock poisoned"))
    }

    fn entity(&self, instance: &dyn Component) -> Result<Entity> {
        self.lock()?
            .entity_of(instance)
            .cloned()
            .ok_or_else(|| Error::not_bound(instance.type_name()))
    }

    fn resolve_value(&self, property: &str, value: &Value) -> Result<Instance> {
        match value {
            Value::Entity(entity) => self.resolve(entity),
            Value::Literal(literal) => Err(Error::not_an_entity(property, literal.lexical.clone())),
        }
    }
}

impl Binder for GraphBinder {
    fn application(&self) -> Result<Instance> {
        self.application
            .get()
            .cloned()
            .ok_or_else(|| Error::configuration("application root has not been bound"))
    }

    fn activator(&self) -> Arc<dyn Activator> {
        Arc::clone(&self.activator)
    }

    fn entity_of(&self, instance: &dyn Component) -> Result<Entity> {
        self.entity(instance)
    }

    fn properties(&self, instance: &dyn Component) -> Result<Vec<String>> {
        let entity = self.entity(instance)?;
        Ok(self.store.properties(&entity))
    }

    fn value(&self, instance: &dyn Component, property: &str) -> Result<Option<String>> {
        let entity = self.entity(instance)?;
        Ok(self
            .store
            .first(&entity, property)
            .map(|value| value.to_scalar()))
    }

    fn values(&self, instance: &dyn Component, property: &str) -> Result<Vec<String>> {
        let entity = self.entity(instance)?;
        Ok(self
            .store
            .values(&entity, property)
            .iter()
            .map(Value::to_scalar)
            .collect())
    }

    fn instance(&self, instance: &dyn Component, property: &str) -> Result<Option<Instance>> {
        let entity = self.entity(instance)?;
        self.store
            .first(&entity, property)
            .map(|value| self.resolve_value(property, &value))
            .transpose()
    }

    fn instances(&self, instance: &dyn Component, property: &str) -> Result<Vec<Instance>> {
        let entity = self.entity(instance)?;
        self.store
            .values(&entity, property)
            .iter()
            .map(|value| self.resolve_value(property, value))
            .collect()
    }

    fn find_instance(&self, property: &str, value: &str) -> Result<Option<Instance>> {
        self.store
            .project(property, &Value::iri(value))
            .first()
            .map(|entity| self.resolve(entity))
            .transpose()
    }

    fn find_instances(&self, property: &str, value: &str) -> Result<Vec<Instance>> {
        self.store
            .project(property, &Value::iri(value))
            .iter()
            .map(|entity| self.resolve(entity))
            .collect()
    }

    fn instances_with(&self, property: &str) -> Result<Vec<Instance>> {
        self.store
            .project_any(property)
            .iter()
            .map(|entity| self.resolve(entity))
            .collect()
    }
}

impl fmt::Debug for GraphBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphBinder")
            .field("application_entity", &self.application_entity)
            .field("statements", &self.store.len())
            .finish_non_exhaustive()
    }
}
