//! # Grayout System
//!
//! Transient full-screen desaturation: shown while the boat takes damage
//! or dives below periscope depth. Resource-level state, not per-entity -
//! the effect belongs to the screen, not to anything in the world.
//!
//! Alongside the resource, the module raises the `"grayout_active"`
//! status flag so a render or reporting thread can observe the effect
//! without touching the world.

use crate::events::{EventKind, GameEvent};
use crate::resources::Grayout;
use crate::scheduler::System;
use crate::world::World;

/// Status flag raised while the grayout is active.
pub const GRAYOUT_FLAG: &str = "grayout_active";

/// Starts and ends the grayout screen effect.
pub struct GrayoutSystem {
    /// Module enabled flag.
    enabled: bool,
}

impl GrayoutSystem {
    /// Creates the system, enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    fn clear(world: &mut World) {
        world.resources.grayout = Grayout::default();
        world.resources.flags.set(GRAYOUT_FLAG, false);
    }
}

impl Default for GrayoutSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for GrayoutSystem {
    fn name(&self) -> &'static str {
        "grayout"
    }

    fn init(&mut self, world: &mut World) {
        Self::clear(world);
        self.enabled = true;
    }

    fn priority(&self) -> i32 {
        30
    }

    fn event_kinds(&self) -> &'static [EventKind] {
        &[EventKind::GrayoutStart, EventKind::GrayoutEnd]
    }

    fn handle_event(&mut self, world: &mut World, event: &GameEvent) {
        match event {
            GameEvent::SessionReset => self.init(world),
            GameEvent::SystemToggle { target, enabled } => {
                if *target == self.name() {
                    self.enabled = *enabled;
                }
            }
            GameEvent::GrayoutStart => {
                if self.enabled {
                    world.resources.grayout = Grayout {
                        active: true,
                        intensity: 1.0,
                    };
                    world.resources.flags.set(GRAYOUT_FLAG, true);
                }
            }
            GameEvent::GrayoutEnd => {
                if self.enabled {
                    Self::clear(world);
                }
            }
            _ => debug_assert!(false, "grayout got event outside its interest"),
        }
    }

    // Intensity holds steady while active; the effect ends only on the
    // explicit end event. (Continuous decay toward zero is a product
    // option that has not been confirmed.)
    fn update(&mut self, _world: &mut World) {}
}
