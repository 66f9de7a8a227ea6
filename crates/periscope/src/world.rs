//! # World
//!
//! The container every module sees: the entity registry, one store per
//! component type, shared resources, and a publisher for next-frame
//! events.

use periscope_core::{ComponentStore, EntityId, EntityRegistry};

use crate::components::{Fadeout, PingGrid};
use crate::events::{EventSender, GameEvent};
use crate::resources::Resources;

/// All mutable runtime state, minus the module list.
///
/// Module handlers receive `&mut World`; the scheduler keeps the modules
/// themselves in a separate list so a module can never reach into another
/// module.
pub struct World {
    /// Entity identity.
    pub entities: EntityRegistry,
    /// Shared singleton values.
    pub resources: Resources,

    // =========================================================================
    // Component Stores - Add new component types here
    // =========================================================================
    /// Fadeout particle storage.
    pub fadeouts: ComponentStore<Fadeout>,
    /// Sonar ping grid storage.
    pub pings: ComponentStore<PingGrid>,

    /// Publisher for events. Anything sent here is seen at the NEXT
    /// frame's drain, never the current one.
    events: EventSender,
}

impl World {
    /// Creates a world.
    ///
    /// # Arguments
    ///
    /// * `entity_capacity` - Entity slots to pre-allocate
    /// * `resources` - The shared resource container
    /// * `events` - Publisher wired to the scheduler's event bus
    #[must_use]
    pub fn new(entity_capacity: usize, resources: Resources, events: EventSender) -> Self {
        Self {
            entities: EntityRegistry::new(entity_capacity),
            resources,
            fadeouts: ComponentStore::with_capacity(entity_capacity),
            pings: ComponentStore::with_capacity(entity_capacity),
            events,
        }
    }

    /// Destroys an entity and removes it from every component store.
    ///
    /// This is the committed destroy operation: after it returns, every
    /// store's next snapshot no longer contains the entity. Idempotent -
    /// a dead or stale ID returns `false` and changes nothing.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        if !self.entities.destroy(id) {
            return false;
        }

        self.fadeouts.remove(id);
        self.pings.remove(id);
        true
    }

    /// Publishes an event for the next frame.
    ///
    /// Returns `false` if the channel is full (the event is dropped).
    #[inline]
    pub fn publish(&self, event: GameEvent) -> bool {
        self.events.send(event)
    }
}
