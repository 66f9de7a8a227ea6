//! # PERISCOPE Event System
//!
//! Typed publish/subscribe channel between gameplay code and the effect
//! modules.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │  Gameplay/  │─────>│   Event     │─────>│  Scheduler  │
//! │  Input      │      │   Channel   │      │  (drain)    │
//! └─────────────┘      └─────────────┘      └──────┬──────┘
//!                            ▲                     │ priority order
//!                            │ next frame   ┌──────┴──────┐
//!                            └──────────────│   Modules   │
//!                                           └─────────────┘
//! ```
//!
//! Events are fire-and-forget: published into a bounded channel, drained
//! once per frame by the scheduler, delivered to interested modules in
//! priority order. Anything a module publishes while handling the current
//! frame lands back in the channel and is seen at the *next* frame's
//! drain - same-frame recursion is structurally impossible.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use periscope_core::BufferHandle;

use crate::components::Color;

/// Event type discriminator.
///
/// Modules declare their interest as a fixed set of these tags; the
/// scheduler delivers only matching events (plus the two always-processed
/// control events).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Session reset - every module returns to construction state.
    SessionReset = 0,
    /// Enable/disable command addressed to one module by name.
    SystemToggle = 1,
    /// Request to play a named sound.
    SoundRequest = 2,
    /// Spawn a single fadeout particle.
    FadeoutSpawn = 3,
    /// Spawn a burst of fadeout particles (pooled payload).
    FadeoutSpawnBatch = 4,
    /// Activate the sonar ping grid for a duration.
    PingRequest = 5,
    /// Begin the grayout screen effect.
    GrayoutStart = 6,
    /// End the grayout screen effect.
    GrayoutEnd = 7,
}

/// Sound cues the game can request.
///
/// The runtime never touches an audio device; it forwards these to the
/// configured [`AudioSink`](crate::resources::AudioSink), if any.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundKind {
    /// Sonar ping sweep.
    Ping = 0,
    /// Torpedo launch.
    TorpedoLaunch = 1,
    /// Depth charge / torpedo explosion.
    Explosion = 2,
    /// Hull damage alarm.
    Alarm = 3,
    /// Menu select blip.
    MenuSelect = 4,
}

/// Payload for one fadeout particle spawn.
///
/// Also the entry type of a batch spawn's pooled buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeoutSpawn {
    /// Column on the terminal grid.
    pub x: i32,
    /// Row on the terminal grid.
    pub y: i32,
    /// Glyph to draw.
    pub glyph: char,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

/// Events that flow from gameplay/input code to the effect modules.
///
/// Payloads come in two lifetime kinds: owned (freed with the event) and
/// pooled (`FadeoutSpawnBatch` carries a [`BufferHandle`]; the single
/// consuming module releases it after iterating the entries).
#[derive(Clone, Copy, Debug)]
pub enum GameEvent {
    /// Reset every module to its construction-time state.
    ///
    /// Broadcast, no payload. Always processed, even by disabled modules,
    /// and delivered before any other event of its frame.
    SessionReset,

    /// Enable or disable one module.
    ///
    /// Broadcast; each module compares `target` to its own name and flips
    /// its internal flag on a match. A name no module answers to is
    /// silently ignored.
    SystemToggle {
        /// Name of the targeted module.
        target: &'static str,
        /// New enabled state.
        enabled: bool,
    },

    /// Play a sound, if an audio sink is configured.
    SoundRequest {
        /// Which cue to play.
        sound: SoundKind,
    },

    /// Spawn a single fadeout particle. Owned payload.
    FadeoutSpawn {
        /// The particle to spawn.
        spawn: FadeoutSpawn,
    },

    /// Spawn a burst of fadeout particles.
    ///
    /// The handle points into the shared batch pool; the publisher
    /// acquired and filled it, the consuming module releases it exactly
    /// once after spawning the entries in order.
    FadeoutSpawnBatch {
        /// Pooled buffer of spawn entries.
        batch: BufferHandle,
    },

    /// Activate the sonar ping grid.
    ///
    /// Re-activating while active overwrites the remaining time.
    PingRequest {
        /// Highlight duration in seconds.
        duration: f32,
    },

    /// Begin the grayout screen effect at full intensity.
    GrayoutStart,

    /// End the grayout screen effect.
    GrayoutEnd,
}

impl GameEvent {
    /// Returns the event's type tag.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::SessionReset => EventKind::SessionReset,
            Self::SystemToggle { .. } => EventKind::SystemToggle,
            Self::SoundRequest { .. } => EventKind::SoundRequest,
            Self::FadeoutSpawn { .. } => EventKind::FadeoutSpawn,
            Self::FadeoutSpawnBatch { .. } => EventKind::FadeoutSpawnBatch,
            Self::PingRequest { .. } => EventKind::PingRequest,
            Self::GrayoutStart => EventKind::GrayoutStart,
            Self::GrayoutEnd => EventKind::GrayoutEnd,
        }
    }
}

/// Event bus for gameplay-to-module communication.
///
/// Bounded capacity so a runaway publisher degrades to dropped events
/// instead of unbounded memory growth.
pub struct EventBus {
    /// Sender end - cloned out to event producers.
    sender: Sender<GameEvent>,
    /// Receiver end - owned by the scheduler.
    receiver: Receiver<GameEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight. 1024 is plenty for one
    ///   frame of a terminal game.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

/// Handle for publishing events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<GameEvent>,
}

impl EventSender {
    /// Publishes an event (non-blocking, fire-and-forget).
    ///
    /// Returns `false` if the channel is full or closed; the event is
    /// dropped and a warning logged. The frame loop never blocks on a
    /// publish.
    #[inline]
    pub fn send(&self, event: GameEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!("event channel full, dropping {:?}", event.kind());
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for draining events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<GameEvent>,
}

impl EventReceiver {
    /// Drains all pending events (non-blocking).
    ///
    /// This is the frame boundary: everything published up to this call
    /// belongs to the current frame; everything published after it waits
    /// for the next.
    #[inline]
    #[must_use]
    pub fn drain(&self) -> Vec<GameEvent> {
        let mut events = Vec::with_capacity(self.receiver.len());
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}
