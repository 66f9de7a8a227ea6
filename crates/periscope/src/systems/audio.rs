//! # Audio System
//!
//! Stateless forwarder from sound-request events to the configured
//! playback capability. No queueing, no retry, no backlog: a request
//! either plays on the spot or disappears.

use crate::events::{EventKind, GameEvent};
use crate::scheduler::System;
use crate::world::World;

/// Forwards sound requests to the audio sink, if one is configured.
pub struct AudioSystem {
    /// Module enabled flag - this is the mute switch.
    enabled: bool,
}

impl AudioSystem {
    /// Creates the system, enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for AudioSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for AudioSystem {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn init(&mut self, _world: &mut World) {
        // Stateless: nothing to reset but the flag.
        self.enabled = true;
    }

    fn priority(&self) -> i32 {
        40
    }

    fn event_kinds(&self) -> &'static [EventKind] {
        &[EventKind::SoundRequest]
    }

    fn handle_event(&mut self, world: &mut World, event: &GameEvent) {
        match event {
            GameEvent::SessionReset => self.init(world),
            GameEvent::SystemToggle { target, enabled } => {
                if *target == self.name() {
                    self.enabled = *enabled;
                }
            }
            GameEvent::SoundRequest { sound } => {
                if !self.enabled {
                    return;
                }
                // Absent sink = silent drop. Absence is normal here.
                if let Some(sink) = world.resources.audio.as_mut() {
                    sink.play(*sound);
                }
            }
            _ => debug_assert!(false, "audio got event outside its interest"),
        }
    }

    fn update(&mut self, _world: &mut World) {}
}
