//! # Buffer Pool
//!
//! Reuse pool for batch payload buffers.
//!
//! A payload's lifetime is exactly one publish-to-release cycle: the
//! publisher acquires a buffer, fills it, attaches the handle to an event,
//! and the single consuming system releases it after iterating the
//! entries. Releasing bumps the slot's generation, so the handle from a
//! finished cycle can never touch the buffer's next occupant.

use thiserror::Error;

/// Errors for pool handle misuse.
///
/// These are defect classes, not user-facing failures: the frame loop
/// logs them and carries on.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// The handle's cycle already ended (double release, or a handle kept
    /// across cycles).
    #[error("stale buffer handle (index {index}, generation {generation})")]
    StaleHandle {
        /// Slot index of the offending handle.
        index: u32,
        /// Generation of the offending handle.
        generation: u32,
    },
}

/// Handle to an acquired buffer in a pool.
///
/// Valid for exactly one acquire-to-release cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferHandle {
    /// Index into the pool.
    index: u32,
    /// Generation the slot had when acquired.
    generation: u32,
}

/// One pool slot: a recycled buffer plus its cycle bookkeeping.
#[derive(Debug)]
struct PoolSlot<T> {
    /// Current cycle generation. Bumped on release.
    generation: u32,
    /// Whether the slot is part of a live cycle.
    in_use: bool,
    /// The recycled buffer. Cleared on release, capacity kept.
    entries: Vec<T>,
}

impl<T> PoolSlot<T> {
    const fn idle() -> Self {
        Self {
            generation: 0,
            in_use: false,
            entries: Vec::new(),
        }
    }
}

/// A reuse pool of `Vec<T>` buffers with generation-guarded handles.
///
/// Pooling is an allocation-pressure optimization for bursty batch events;
/// when every slot is busy the pool grows rather than failing, so callers
/// never block on it.
///
/// # Thread Safety
///
/// The pool is NOT thread-safe on its own. Share it behind a mutex when
/// publishers live off the logic thread.
///
/// # Example
///
/// ```rust,ignore
/// let mut pool: BufferPool<Spawn> = BufferPool::new(8);
///
/// let handle = pool.acquire();
/// pool.entries_mut(handle).unwrap().push(spawn);
/// // ... publish the handle, consumer iterates ...
/// pool.release(handle)?;
/// ```
pub struct BufferPool<T> {
    /// Slot table.
    slots: Vec<PoolSlot<T>>,
    /// Free list - indices of idle slots.
    free_list: Vec<u32>,
}

impl<T> BufferPool<T> {
    /// Creates a new pool with `capacity` pre-allocated slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| PoolSlot::idle()).collect();
        let free_list: Vec<u32> = (0..capacity as u32).rev().collect();

        Self { slots, free_list }
    }

    /// Returns the total number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of buffers currently in a live cycle.
    ///
    /// After a frame in which every batch event was consumed, this is
    /// zero - anything else is a leak.
    #[inline]
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Acquires an empty buffer, starting a new cycle.
    ///
    /// Reuses an idle slot when one exists; otherwise the pool grows.
    pub fn acquire(&mut self) -> BufferHandle {
        let index = match self.free_list.pop() {
            Some(index) => index,
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(PoolSlot::idle());
                index
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.in_use = true;

        BufferHandle {
            index,
            generation: slot.generation,
        }
    }

    /// Gets the entries of a live buffer.
    ///
    /// `None` if the handle's cycle has already ended.
    #[inline]
    #[must_use]
    pub fn entries(&self, handle: BufferHandle) -> Option<&Vec<T>> {
        let slot = self.slots.get(handle.index as usize)?;
        (slot.in_use && slot.generation == handle.generation).then_some(&slot.entries)
    }

    /// Gets the entries of a live buffer, mutably (for the publisher to
    /// fill before the event goes out).
    #[inline]
    pub fn entries_mut(&mut self, handle: BufferHandle) -> Option<&mut Vec<T>> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        (slot.in_use && slot.generation == handle.generation).then_some(&mut slot.entries)
    }

    /// Releases a buffer, ending its cycle.
    ///
    /// Exactly one release per acquire. The buffer is cleared (capacity
    /// kept) and the slot generation bumped, so the handle - and any copy
    /// of it - is dead from here on.
    ///
    /// # Errors
    ///
    /// [`PoolError::StaleHandle`] if the cycle already ended. This is the
    /// double-release defect surface: detect, log, never crash.
    pub fn release(&mut self, handle: BufferHandle) -> Result<(), PoolError> {
        let stale = PoolError::StaleHandle {
            index: handle.index,
            generation: handle.generation,
        };

        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .ok_or(stale)?;

        if !slot.in_use || slot.generation != handle.generation {
            return Err(stale);
        }

        slot.in_use = false;
        slot.generation = slot.generation.wrapping_add(1);
        slot.entries.clear();
        self.free_list.push(handle.index);

        Ok(())
    }
}
