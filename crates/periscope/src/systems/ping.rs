//! # Ping System
//!
//! Sonar grid highlight on the designated active entity (the player's
//! boat). A ping request lights the grid for a duration; re-pinging
//! overwrites the remaining time rather than extending it. On expiry the
//! remaining time clamps to zero and the highlight clears - the component
//! stays on the entity, idle, ready for the next sweep.

use crate::components::PingGrid;
use crate::events::{EventKind, GameEvent};
use crate::scheduler::System;
use crate::world::World;

/// Runs the sonar ping grid countdown.
pub struct PingSystem {
    /// Module enabled flag.
    enabled: bool,
}

impl PingSystem {
    /// Creates the system, enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    /// Lights the grid on the designated entity.
    ///
    /// No designated entity (or a stale one) means there is nothing to
    /// highlight - the request is silently dropped.
    fn activate(world: &mut World, duration: f32) {
        let target = world.resources.active_entity;
        if !world.entities.is_alive(target) {
            return;
        }

        // Overwrite, never add: a re-ping restarts the clock.
        world.pings.set(
            target,
            PingGrid {
                active: true,
                remaining: duration,
            },
        );
    }
}

impl Default for PingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for PingSystem {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn init(&mut self, world: &mut World) {
        for id in world.pings.entities() {
            world.pings.remove(id);
        }
        self.enabled = true;
    }

    fn priority(&self) -> i32 {
        20
    }

    fn event_kinds(&self) -> &'static [EventKind] {
        &[EventKind::PingRequest]
    }

    fn handle_event(&mut self, world: &mut World, event: &GameEvent) {
        match event {
            GameEvent::SessionReset => self.init(world),
            GameEvent::SystemToggle { target, enabled } => {
                if *target == self.name() {
                    self.enabled = *enabled;
                }
            }
            GameEvent::PingRequest { duration } => {
                if self.enabled {
                    Self::activate(world, *duration);
                }
            }
            _ => debug_assert!(false, "ping got event outside its interest"),
        }
    }

    fn update(&mut self, world: &mut World) {
        if !self.enabled {
            return;
        }

        let dt = world.resources.frame_dt;
        let target = world.resources.active_entity;

        let Some(ping) = world.pings.get_mut(target) else {
            return;
        };
        if !ping.active {
            return;
        }

        ping.remaining -= dt;
        if ping.remaining <= 0.0 {
            ping.remaining = 0.0;
            ping.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::resources::Resources;

    fn test_world() -> World {
        let bus = EventBus::new(64);
        let mut world = World::new(16, Resources::new(4), bus.sender());
        let boat = world.entities.create();
        world.resources.active_entity = boat;
        world
    }

    fn ping(system: &mut PingSystem, world: &mut World, duration: f32) {
        system.handle_event(world, &GameEvent::PingRequest { duration });
    }

    #[test]
    fn test_expiry_clamps_to_zero() {
        // Request 2.0s, advance 2.5s: active=false, remaining=0.
        let mut world = test_world();
        let mut system = PingSystem::new();

        ping(&mut system, &mut world, 2.0);
        world.resources.frame_dt = 2.5;
        system.update(&mut world);

        let grid = world.pings.get(world.resources.active_entity).unwrap();
        assert!(!grid.active);
        assert!(grid.remaining.abs() < f32::EPSILON);
    }

    #[test]
    fn test_reping_overwrites_not_adds() {
        // 2.0s, advance 1.0s, re-request 3.0s: remaining is 3.0, not 4.0.
        let mut world = test_world();
        let mut system = PingSystem::new();

        ping(&mut system, &mut world, 2.0);
        world.resources.frame_dt = 1.0;
        system.update(&mut world);
        ping(&mut system, &mut world, 3.0);

        let grid = world.pings.get(world.resources.active_entity).unwrap();
        assert!(grid.active);
        assert!((grid.remaining - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_no_designated_entity_drops_request() {
        let bus = EventBus::new(64);
        let mut world = World::new(16, Resources::new(4), bus.sender());
        let mut system = PingSystem::new();

        ping(&mut system, &mut world, 2.0);
        assert!(world.pings.is_empty());
    }

    #[test]
    fn test_disabled_freezes_the_countdown() {
        let mut world = test_world();
        let mut system = PingSystem::new();
        ping(&mut system, &mut world, 2.0);

        system.handle_event(
            &mut world,
            &GameEvent::SystemToggle {
                target: "ping",
                enabled: false,
            },
        );

        world.resources.frame_dt = 10.0;
        system.update(&mut world);
        ping(&mut system, &mut world, 5.0);

        // Timer preserved, request ignored.
        let grid = world.pings.get(world.resources.active_entity).unwrap();
        assert!(grid.active);
        assert!((grid.remaining - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_reset_clears_the_grid() {
        let mut world = test_world();
        let mut system = PingSystem::new();
        ping(&mut system, &mut world, 2.0);

        system.handle_event(&mut world, &GameEvent::SessionReset);
        assert!(world.pings.is_empty());
    }
}
