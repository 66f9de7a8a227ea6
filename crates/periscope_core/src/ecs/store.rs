//! # Component Store
//!
//! One typed table per component kind, mapping entity to value.
//!
//! The store is an arena indexed by entity slot, with the full `EntityId`
//! kept alongside each value so stale handles read as absent. Presence is
//! explicit: a component exists only after `set`, and `get` on anything
//! else is `None` - normal absence, never an error.

use super::entity::EntityId;

/// One occupied slot: the owning entity plus its component value.
#[derive(Clone, Debug)]
struct Slot<T> {
    /// Full ID of the owning entity (generation included).
    owner: EntityId,
    /// The component value.
    value: T,
}

/// Typed per-entity component storage.
///
/// # Guarantees
///
/// - `set` is insert-or-overwrite, amortized O(1)
/// - `get`/`get_mut` on a missing or stale entity is `None`
/// - `entities()` is a snapshot: callers may destroy entities or remove
///   components while walking it
///
/// Stores for different component types are mutually opaque - systems
/// reach each other only through events, never through another system's
/// store.
///
/// # Example
///
/// ```rust,ignore
/// let mut store: ComponentStore<f32> = ComponentStore::new();
/// store.set(id, 1.5);
/// assert_eq!(store.get(id), Some(&1.5));
/// store.remove(id);
/// assert_eq!(store.get(id), None);
/// ```
pub struct ComponentStore<T> {
    /// Slot table indexed by entity index. `None` = no component.
    slots: Vec<Option<Slot<T>>>,
    /// Number of occupied slots.
    len: usize,
}

impl<T> Default for ComponentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ComponentStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty store with space for `capacity` entity slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    /// Returns the number of entities currently holding this component.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks whether no entity holds this component.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the component for an entity (insert-or-overwrite).
    ///
    /// Amortized O(1); the slot table grows to cover the entity's index.
    /// A null ID is ignored.
    pub fn set(&mut self, id: EntityId, value: T) {
        if id.is_null() {
            return;
        }

        let idx = id.index() as usize;
        if idx >= self.slots.len() {
            self.slots.resize_with(idx + 1, || None);
        }

        let slot = &mut self.slots[idx];
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(Slot { owner: id, value });
    }

    /// Gets the component for an entity.
    ///
    /// `None` signals normal absence - the entity never had the component,
    /// it was removed, or the handle is stale.
    #[inline]
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&T> {
        let slot = self.slots.get(id.index() as usize)?.as_ref()?;
        (slot.owner == id).then_some(&slot.value)
    }

    /// Gets the component for an entity, mutably.
    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.index() as usize)?.as_mut()?;
        (slot.owner == id).then_some(&mut slot.value)
    }

    /// Checks whether an entity holds this component.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Removes the component for an entity, returning it if present.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.as_ref().is_some_and(|s| s.owner == id) {
            self.len -= 1;
            slot.take().map(|s| s.value)
        } else {
            None
        }
    }

    /// Returns a snapshot of all entities currently holding this component.
    ///
    /// The snapshot is detached from the store, so the caller may destroy
    /// entities or remove components while iterating it. Entities removed
    /// after the snapshot simply read as absent on `get`.
    #[must_use]
    pub fn entities(&self) -> Vec<EntityId> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|s| s.owner))
            .collect()
    }

    /// Iterates over all (entity, component) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|s| (s.owner, &s.value)))
    }

    /// Removes every component, keeping allocated capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
    }
}
