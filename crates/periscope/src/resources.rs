//! # Shared Resources
//!
//! Session-wide singleton values visible to every module: frame timing,
//! the designated active entity, cross-thread status flags, the optional
//! audio capability, and the shared batch payload pool.
//!
//! Resources are mutated on the logic thread during dispatch or per-frame
//! logic. The sole exception to single-threadedness is [`StatusFlags`],
//! which other threads may read atomically.

use std::sync::Arc;

use parking_lot::Mutex;
use periscope_core::{BufferPool, EntityId, StatusFlags};

use crate::events::{FadeoutSpawn, SoundKind};

/// Audio playback capability.
///
/// The device backend lives outside the runtime; whatever implements this
/// gets sound requests forwarded to it. No queueing or retry on this
/// seam - a request either plays now or is gone.
pub trait AudioSink: Send {
    /// Plays a sound cue.
    fn play(&mut self, sound: SoundKind);
}

/// Resource-level grayout screen effect state.
///
/// Deliberately not a component: the effect covers the whole screen and
/// belongs to no entity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Grayout {
    /// Whether the effect is currently shown.
    pub active: bool,
    /// Effect intensity, 1.0 = full. Held constant while active.
    pub intensity: f32,
}

/// The shared batch payload pool, behind a mutex so publishers off the
/// logic thread (input capture) can acquire buffers too.
pub type SharedBatchPool = Arc<Mutex<BufferPool<FadeoutSpawn>>>;

/// Singleton, session-wide values not tied to any entity.
pub struct Resources {
    /// Elapsed real time since the previous frame, in seconds. Written by
    /// the scheduler at the top of each tick.
    pub frame_dt: f32,
    /// The designated active entity (player boat/cursor). `NULL` until the
    /// embedding game assigns it.
    pub active_entity: EntityId,
    /// Named status flags readable from other threads.
    pub flags: StatusFlags,
    /// Grayout screen effect state.
    pub grayout: Grayout,
    /// Optional audio playback capability. Absent = requests are dropped.
    pub audio: Option<Box<dyn AudioSink>>,
    /// Reuse pool for batch spawn payloads.
    pub batch_pool: SharedBatchPool,
}

impl Resources {
    /// Creates resources with a batch pool of `pool_capacity` buffers.
    #[must_use]
    pub fn new(pool_capacity: usize) -> Self {
        Self {
            frame_dt: 0.0,
            active_entity: EntityId::NULL,
            flags: StatusFlags::new(),
            grayout: Grayout::default(),
            audio: None,
            batch_pool: Arc::new(Mutex::new(BufferPool::new(pool_capacity))),
        }
    }

    /// Resets session-scoped state.
    ///
    /// Clears the grayout and lowers every status flag. Capabilities
    /// (audio sink, pool, active entity) survive a session reset - they
    /// belong to the embedding game, not to one play session. `frame_dt`
    /// is per-frame state and is left alone; the scheduler rewrites it
    /// every tick.
    pub fn reset(&mut self) {
        self.grayout = Grayout::default();
        self.flags.clear();
    }

    /// Returns a clone of the shared batch pool for publishers.
    #[must_use]
    pub fn batch_pool(&self) -> SharedBatchPool {
        Arc::clone(&self.batch_pool)
    }
}
