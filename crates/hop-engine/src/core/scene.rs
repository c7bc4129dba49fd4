use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::kind::Group;
use glam::Vec2;

/// Entity storage for one level using a flat Vec.
///
/// Group membership (solid or weak) follows from each entity's kind, so an entity
/// lives in exactly one group for as long as it is stored here. Insertion order is
/// preserved, which keeps iteration and the render order deterministic.
pub struct Scene {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(256),
            next_id: 1,
        }
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity to the scene. Returns its ID.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Remove every listed entity in one pass. Returns how many were removed.
    pub fn despawn_all(&mut self, ids: &[EntityId]) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !ids.contains(&e.id));
        before - self.entities.len()
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Entities of one collision group.
    pub fn group(&self, group: Group) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |e| e.kind.group() == Some(group))
    }

    /// Solid entities (persist through collision).
    pub fn solid(&self) -> impl Iterator<Item = &Entity> {
        self.group(Group::Solid)
    }

    /// Weak entities (consumed on overlap).
    pub fn weak(&self) -> impl Iterator<Item = &Entity> {
        self.group(Group::Weak)
    }

    /// Shift every entity by `delta`, including platform anchors.
    pub fn shift_all(&mut self, delta: Vec2) {
        for entity in self.entities.iter_mut() {
            entity.shift(delta);
        }
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities (level teardown).
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
