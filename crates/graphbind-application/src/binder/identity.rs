//! Bidirectional identity cache
//!
//! Forward lookups are keyed by entity value; reverse lookups by
//! instance address. Both maps are only ever written together.

use std::collections::HashMap;

use graphbind_domain::ports::{Component, Instance, identity};
use graphbind_domain::value_objects::Entity;

#[derive(Default)]
pub(crate) struct BindingTable {
    forward: HashMap<Entity, Instance>,
    reverse: HashMap<usize, Entity>,
}

impl BindingTable {
    pub(crate) fn get(&self, entity: &Entity) -> Option<&Instance> {
        self.forward.get(entity)
    }

    pub(crate) fn entity_of(&self, instance: &dyn Component) -> Option<&Entity> {
        self.reverse.get(&identity(instance))
    }

    /// Record a new binding pair.
    ///
    /// Callers check [`BindingTable::get`] first under the same lock, so
    /// neither side is ever overwritten.
    pub(crate) fn insert(&mut self, entity: Entity, instance: Instance) {
        self.reverse.insert(identity(instance.as_ref()), entity.clone());
        self.forward.insert(entity, instance);
    }

    pub(crate) fn len(&self) -> usize {
        self.forward.len()
    }
}
