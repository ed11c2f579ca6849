//! The active-hostiles collection.
//!
//! Maps stable [`EntityId`]s to hecs entities. Iteration follows id order,
//! which is spawn order, so "first hostile in the collection" is well defined.
//! Projectiles and the damage resolver reach hostiles only through this
//! lookup, never by holding the entity itself.

use std::collections::BTreeMap;

use hecs::Entity;

use guardian_core::types::EntityId;

#[derive(Debug, Clone, Default)]
pub struct HostileRoster {
    entries: BTreeMap<EntityId, Entity>,
}

impl HostileRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: EntityId, entity: Entity) {
        self.entries.insert(id, entity);
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entries.remove(&id)
    }

    /// Resolve a handle, or `None` if the hostile is gone.
    pub fn get(&self, id: EntityId) -> Option<Entity> {
        self.entries.get(&id).copied()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Active hostiles in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, Entity)> + '_ {
        self.entries.iter().map(|(id, entity)| (*id, *entity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
