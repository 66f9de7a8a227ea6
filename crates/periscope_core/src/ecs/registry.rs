//! # Entity Registry
//!
//! Allocates and destroys opaque entity identifiers.
//!
//! The registry owns a slot table with a free list. Destroyed slots are
//! recycled with a bumped generation, so a stale `EntityId` can never be
//! mistaken for the entity that now occupies its slot.

use super::entity::EntityId;

/// One slot in the registry's table.
#[derive(Clone, Copy, Debug)]
struct Slot {
    /// Generation of the entity that last occupied this slot.
    generation: u32,
    /// Whether the slot is currently alive.
    alive: bool,
}

impl Slot {
    const fn dead() -> Self {
        Self {
            generation: 0,
            alive: false,
        }
    }
}

/// Allocates and destroys entity identifiers.
///
/// # Guarantees
///
/// - `create` always succeeds and returns an ID that is not currently live
/// - `destroy` is idempotent: destroying twice is a no-op, not an error
/// - slot reuse bumps the generation, invalidating old handles
///
/// Note that the registry only manages identity. Clearing a destroyed
/// entity out of component stores is the owning `World`'s job - the
/// registry does not know which stores exist.
///
/// # Example
///
/// ```rust,ignore
/// let mut entities = EntityRegistry::new(1024);
/// let id = entities.create();
/// assert!(entities.is_alive(id));
/// assert!(entities.destroy(id));
/// assert!(!entities.destroy(id)); // idempotent
/// ```
pub struct EntityRegistry {
    /// All entity slots.
    slots: Vec<Slot>,
    /// Free list of slot indices for reuse.
    free_indices: Vec<u32>,
    /// Number of currently alive entities.
    alive_count: usize,
}

impl EntityRegistry {
    /// Creates a new registry with slots pre-allocated for `capacity`
    /// entities.
    ///
    /// The capacity is a pre-allocation hint, not a limit: `create` grows
    /// the table when the free list runs dry.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let slots = vec![Slot::dead(); capacity];
        let free_indices: Vec<u32> = (0..capacity as u32).rev().collect();

        Self {
            slots,
            free_indices,
            alive_count: 0,
        }
    }

    /// Returns the number of currently alive entities.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.alive_count
    }

    /// Checks whether no entities are alive.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.alive_count == 0
    }

    /// Creates a new entity, returning its ID.
    ///
    /// Always succeeds. Reuses a free slot when one exists; otherwise the
    /// slot table grows (amortized O(1)). The returned ID is never equal
    /// to any currently live ID.
    #[inline]
    pub fn create(&mut self) -> EntityId {
        let index = match self.free_indices.pop() {
            Some(index) => index,
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot::dead());
                index
            }
        };

        let slot = &mut self.slots[index as usize];

        // Bump generation to invalidate old references to this slot.
        slot.generation = slot.generation.wrapping_add(1);
        slot.alive = true;
        self.alive_count += 1;

        EntityId::new(index, slot.generation)
    }

    /// Destroys an entity, freeing its slot for reuse.
    ///
    /// # Returns
    ///
    /// `true` if the entity was destroyed, `false` if it was already dead
    /// or the ID was null/stale. Calling this twice on the same ID is a
    /// no-op, not an error.
    #[inline]
    pub fn destroy(&mut self, id: EntityId) -> bool {
        if id.is_null() {
            return false;
        }

        let idx = id.index() as usize;
        let Some(slot) = self.slots.get_mut(idx) else {
            return false;
        };

        // Generation check so a stale handle cannot kill the slot's
        // current occupant.
        if !slot.alive || slot.generation != id.generation() {
            return false;
        }

        slot.alive = false;
        self.alive_count -= 1;
        self.free_indices.push(id.index());

        true
    }

    /// Checks if an entity is alive.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        if id.is_null() {
            return false;
        }

        self.slots
            .get(id.index() as usize)
            .is_some_and(|slot| slot.alive && slot.generation == id.generation())
    }

    /// Destroys every live entity, keeping allocated capacity.
    ///
    /// Generations are preserved, so handles from before the clear still
    /// read as dead after their slots are reused.
    pub fn clear(&mut self) {
        self.free_indices.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            slot.alive = false;
            self.free_indices.push(index as u32);
        }
        self.alive_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_destroy() {
        let mut entities = EntityRegistry::new(8);

        let a = entities.create();
        let b = entities.create();
        assert_ne!(a, b);
        assert!(entities.is_alive(a));
        assert_eq!(entities.len(), 2);

        assert!(entities.destroy(a));
        assert!(!entities.is_alive(a));
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut entities = EntityRegistry::new(8);
        let id = entities.create();

        assert!(entities.destroy(id));
        assert!(!entities.destroy(id));
        assert!(!entities.destroy(EntityId::NULL));
        assert_eq!(entities.len(), 0);
    }

    #[test]
    fn test_slot_reuse_bumps_generation() {
        let mut entities = EntityRegistry::new(1);

        let first = entities.create();
        assert!(entities.destroy(first));

        let second = entities.create();
        assert_eq!(second.index(), first.index());
        assert_ne!(second.generation(), first.generation());

        // The stale handle must not touch the new occupant.
        assert!(!entities.is_alive(first));
        assert!(!entities.destroy(first));
        assert!(entities.is_alive(second));
    }

    #[test]
    fn test_create_grows_past_capacity() {
        let mut entities = EntityRegistry::new(2);

        let ids: Vec<_> = (0..10).map(|_| entities.create()).collect();
        assert_eq!(entities.len(), 10);
        for id in &ids {
            assert!(entities.is_alive(*id));
        }
    }

    #[test]
    fn test_clear() {
        let mut entities = EntityRegistry::new(4);
        let a = entities.create();
        let b = entities.create();

        entities.clear();
        assert!(entities.is_empty());
        assert!(!entities.is_alive(a));
        assert!(!entities.is_alive(b));

        // Fresh IDs after clear never alias the old ones.
        let c = entities.create();
        assert_ne!(c, a);
        assert_ne!(c, b);
    }
}
