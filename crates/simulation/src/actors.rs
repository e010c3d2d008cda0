use std::collections::HashMap;

use bevy::prelude::*;

use crate::structures::Structure;

/// A named resident living in a placed structure.
#[derive(Component, Debug, Clone)]
pub struct Actor {
    pub id: u32,
    pub name: String,
    pub home: Entity,
}

/// Lookup of registered actors plus the single UI focus slot.
///
/// Owned by the world it describes and passed to the systems that need it;
/// nothing here is process-wide state.
#[derive(Resource, Default)]
pub struct ActorRegistry {
    actors: HashMap<u32, Entity>,
    focused: Option<u32>,
}

impl ActorRegistry {
    /// Adds an actor under its id. Returns false if the id is taken.
    pub fn register(&mut self, id: u32, entity: Entity) -> bool {
        if self.actors.contains_key(&id) {
            return false;
        }
        self.actors.insert(id, entity);
        true
    }

    /// Claims the focus slot for `id`. Fails while any actor is focused or
    /// when `id` is unknown.
    pub fn focus(&mut self, id: u32) -> bool {
        if self.focused.is_some() || !self.actors.contains_key(&id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Releases the focus slot. Fails unless `id` is the focused actor.
    pub fn unfocus(&mut self, id: u32) -> bool {
        if self.focused != Some(id) {
            return false;
        }
        self.focused = None;
        true
    }

    pub fn focused(&self) -> Option<u32> {
        self.focused
    }

    pub fn entity_of(&self, id: u32) -> Option<Entity> {
        self.actors.get(&id).copied()
    }

    /// Registered ids, ascending, for stable UI listings.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.actors.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn clear(&mut self) {
        self.actors.clear();
        self.focused = None;
    }
}

/// Running id source for newly housed actors.
#[derive(Resource, Default)]
pub struct NextActorId(pub u32);

const FIRST_NAMES: [&str; 8] = [
    "Ada", "Bram", "Cleo", "Dov", "Edda", "Felix", "Greta", "Hugo",
];

/// Moves one resident into every newly placed structure. A road edit
/// despawns all structures, so `evict_homeless_actors` clears the previous
/// population first.
pub fn house_actors(
    mut commands: Commands,
    mut registry: ResMut<ActorRegistry>,
    mut next_id: ResMut<NextActorId>,
    new_homes: Query<Entity, Added<Structure>>,
) {
    for home in &new_homes {
        let id = next_id.0;
        next_id.0 += 1;
        let name = format!(
            "{} #{id}",
            FIRST_NAMES[id as usize % FIRST_NAMES.len()]
        );
        let actor = commands.spawn(Actor { id, name, home }).id();
        if !registry.register(id, actor) {
            // Ids come from a monotonic counter, so a collision means the
            // registry got out of sync with the counter.
            warn!("actor id {id} already registered; despawning duplicate");
            commands.entity(actor).despawn();
        }
    }
}

/// Despawns actors whose home no longer exists and drops them from the
/// registry.
pub fn evict_homeless_actors(
    mut commands: Commands,
    mut registry: ResMut<ActorRegistry>,
    actors: Query<(Entity, &Actor)>,
    homes: Query<(), With<Structure>>,
) {
    for (entity, actor) in &actors {
        if homes.get(actor.home).is_ok() {
            continue;
        }
        if registry.focused() == Some(actor.id) {
            registry.unfocus(actor.id);
        }
        registry.actors.remove(&actor.id);
        commands.entity(entity).despawn();
    }
}

pub struct ActorsPlugin;

impl Plugin for ActorsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActorRegistry>()
            .init_resource::<NextActorId>()
            .add_systems(
                Update,
                (evict_homeless_actors, house_actors)
                    .chain()
                    .after(crate::structures::relayout_structures),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_duplicate_id() {
        let mut registry = ActorRegistry::default();
        assert!(registry.register(1, Entity::from_raw(10)));
        assert!(!registry.register(1, Entity::from_raw(11)));
        assert_eq!(registry.entity_of(1), Some(Entity::from_raw(10)));
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut registry = ActorRegistry::default();
        registry.register(1, Entity::from_raw(10));
        registry.register(2, Entity::from_raw(11));
        assert!(registry.focus(1));
        assert!(!registry.focus(2), "focus already occupied");
        assert_eq!(registry.focused(), Some(1));
    }

    #[test]
    fn test_unfocus_requires_matching_id() {
        let mut registry = ActorRegistry::default();
        registry.register(1, Entity::from_raw(10));
        assert!(!registry.unfocus(1), "nothing focused yet");
        registry.focus(1);
        assert!(!registry.unfocus(2));
        assert!(registry.unfocus(1));
        assert_eq!(registry.focused(), None);
    }

    #[test]
    fn test_focus_unknown_id_fails() {
        let mut registry = ActorRegistry::default();
        assert!(!registry.focus(7));
    }

    #[test]
    fn test_ids_sorted() {
        let mut registry = ActorRegistry::default();
        registry.register(3, Entity::from_raw(1));
        registry.register(1, Entity::from_raw(2));
        registry.register(2, Entity::from_raw(3));
        assert_eq!(registry.ids(), vec![1, 2, 3]);
    }
}
