//! # Fadeout System
//!
//! Decaying screen particles: torpedo trails, explosion debris, wake foam.
//!
//! Spawning creates an entity whose `remaining` counts down from the
//! fixed total each frame; hitting zero destroys the entity outright.
//! Burst spawns arrive as a pooled batch payload that this module - and
//! only this module - releases after iterating.

use crate::components::Fadeout;
use crate::events::{EventKind, FadeoutSpawn, GameEvent};
use crate::scheduler::System;
use crate::world::World;

/// Total lifetime of every fadeout particle, in seconds.
pub const FADE_DURATION_SECS: f32 = 1.0;

/// Decays and destroys fadeout particles.
pub struct FadeoutSystem {
    /// Module enabled flag. Flipped only by a matching toggle or a reset.
    enabled: bool,
}

impl FadeoutSystem {
    /// Creates the system, enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    /// Spawns one particle entity with a full countdown.
    fn spawn(world: &mut World, spawn: &FadeoutSpawn) {
        let id = world.entities.create();
        world.fadeouts.set(
            id,
            Fadeout {
                x: spawn.x,
                y: spawn.y,
                glyph: spawn.glyph,
                fg: spawn.fg,
                bg: spawn.bg,
                remaining: FADE_DURATION_SECS,
                total: FADE_DURATION_SECS,
            },
        );
    }

    /// Consumes a pooled batch: spawn entries in order (when enabled),
    /// then release the buffer exactly once.
    ///
    /// Release happens even while disabled - the payload's ownership
    /// landed here with the event, and leaking it until re-enable would
    /// break the one-release-per-acquire contract.
    fn consume_batch(&self, world: &mut World, batch: periscope_core::BufferHandle) {
        let pool = world.resources.batch_pool();

        if self.enabled {
            // Copy the entries out so the pool lock is not held while we
            // mutate the world.
            let entries: Vec<FadeoutSpawn> = match pool.lock().entries(batch) {
                Some(entries) => entries.clone(),
                None => {
                    tracing::warn!("batch payload already released, ignoring {:?}", batch);
                    return;
                }
            };

            for spawn in &entries {
                Self::spawn(world, spawn);
            }
        }

        if let Err(err) = pool.lock().release(batch) {
            tracing::warn!("batch payload release failed: {}", err);
        };
    }
}

impl Default for FadeoutSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for FadeoutSystem {
    fn name(&self) -> &'static str {
        "fadeout"
    }

    fn init(&mut self, world: &mut World) {
        for id in world.fadeouts.entities() {
            world.destroy(id);
        }
        self.enabled = true;
    }

    fn priority(&self) -> i32 {
        10
    }

    fn event_kinds(&self) -> &'static [EventKind] {
        &[EventKind::FadeoutSpawn, EventKind::FadeoutSpawnBatch]
    }

    fn handle_event(&mut self, world: &mut World, event: &GameEvent) {
        match event {
            GameEvent::SessionReset => self.init(world),
            GameEvent::SystemToggle { target, enabled } => {
                if *target == self.name() {
                    self.enabled = *enabled;
                }
            }
            GameEvent::FadeoutSpawnBatch { batch } => self.consume_batch(world, *batch),
            GameEvent::FadeoutSpawn { spawn } => {
                if self.enabled {
                    Self::spawn(world, spawn);
                }
            }
            _ => debug_assert!(false, "fadeout got event outside its interest"),
        }
    }

    fn update(&mut self, world: &mut World) {
        if !self.enabled {
            return;
        }

        let dt = world.resources.frame_dt;

        // Snapshot first: we destroy while walking.
        for id in world.fadeouts.entities() {
            let Some(fade) = world.fadeouts.get_mut(id) else {
                continue;
            };

            let remaining = fade.remaining - dt;
            if remaining <= 0.0 {
                world.destroy(id);
            } else {
                fade.remaining = remaining;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Color;
    use crate::events::EventBus;
    use crate::resources::Resources;

    fn test_world() -> World {
        let bus = EventBus::new(64);
        World::new(16, Resources::new(4), bus.sender())
    }

    fn spawn_event() -> GameEvent {
        GameEvent::FadeoutSpawn {
            spawn: FadeoutSpawn {
                x: 3,
                y: 5,
                glyph: '*',
                fg: Color::BrightYellow,
                bg: Color::Black,
            },
        }
    }

    #[test]
    fn test_spawn_sets_full_countdown() {
        let mut world = test_world();
        let mut system = FadeoutSystem::new();

        system.handle_event(&mut world, &spawn_event());

        let ids = world.fadeouts.entities();
        assert_eq!(ids.len(), 1);
        let fade = world.fadeouts.get(ids[0]).unwrap();
        assert_eq!((fade.x, fade.y, fade.glyph), (3, 5, '*'));
        assert!((fade.remaining - FADE_DURATION_SECS).abs() < f32::EPSILON);
        assert!((fade.total - FADE_DURATION_SECS).abs() < f32::EPSILON);
    }

    #[test]
    fn test_countdown_destroys_on_second_step() {
        // 1.0s total: 0.6 + 0.6 -> remaining goes 0.4, then -0.2 => gone.
        let mut world = test_world();
        let mut system = FadeoutSystem::new();
        system.handle_event(&mut world, &spawn_event());
        let id = world.fadeouts.entities()[0];

        world.resources.frame_dt = 0.6;
        system.update(&mut world);
        let fade = world.fadeouts.get(id).unwrap();
        assert!((fade.remaining - 0.4).abs() < 1e-6);

        system.update(&mut world);
        assert!(!world.entities.is_alive(id));
        assert!(world.fadeouts.entities().is_empty());
    }

    #[test]
    fn test_exact_full_step_destroys_immediately() {
        let mut world = test_world();
        let mut system = FadeoutSystem::new();
        system.handle_event(&mut world, &spawn_event());
        let id = world.fadeouts.entities()[0];

        world.resources.frame_dt = FADE_DURATION_SECS;
        system.update(&mut world);
        assert!(!world.entities.is_alive(id));
    }

    #[test]
    fn test_batch_spawns_in_order_and_releases_once() {
        let mut world = test_world();
        let mut system = FadeoutSystem::new();

        let pool = world.resources.batch_pool();
        let batch = {
            let mut pool = pool.lock();
            let handle = pool.acquire();
            let entries = pool.entries_mut(handle).unwrap();
            for i in 0..5 {
                entries.push(FadeoutSpawn {
                    x: i,
                    y: 0,
                    glyph: '~',
                    fg: Color::Cyan,
                    bg: Color::Black,
                });
            }
            handle
        };

        system.handle_event(&mut world, &GameEvent::FadeoutSpawnBatch { batch });

        let ids = world.fadeouts.entities();
        assert_eq!(ids.len(), 5);
        let xs: Vec<i32> = ids
            .iter()
            .map(|id| world.fadeouts.get(*id).unwrap().x)
            .collect();
        assert_eq!(xs, [0, 1, 2, 3, 4]);

        // Released exactly once; a second release would be stale.
        assert_eq!(pool.lock().in_use(), 0);
        assert!(pool.lock().release(batch).is_err());
    }

    #[test]
    fn test_disabled_batch_is_released_without_spawning() {
        let mut world = test_world();
        let mut system = FadeoutSystem::new();
        system.handle_event(
            &mut world,
            &GameEvent::SystemToggle {
                target: "fadeout",
                enabled: false,
            },
        );

        let pool = world.resources.batch_pool();
        let batch = {
            let mut pool = pool.lock();
            let handle = pool.acquire();
            pool.entries_mut(handle).unwrap().push(FadeoutSpawn {
                x: 0,
                y: 0,
                glyph: '~',
                fg: Color::Cyan,
                bg: Color::Black,
            });
            handle
        };

        system.handle_event(&mut world, &GameEvent::FadeoutSpawnBatch { batch });

        assert!(world.fadeouts.entities().is_empty());
        assert_eq!(pool.lock().in_use(), 0);
    }

    #[test]
    fn test_disabled_is_inert_until_reenabled() {
        let mut world = test_world();
        let mut system = FadeoutSystem::new();
        system.handle_event(&mut world, &spawn_event());

        system.handle_event(
            &mut world,
            &GameEvent::SystemToggle {
                target: "fadeout",
                enabled: false,
            },
        );

        // No spawns, no decay while disabled.
        system.handle_event(&mut world, &spawn_event());
        world.resources.frame_dt = 10.0;
        system.update(&mut world);
        assert_eq!(world.fadeouts.entities().len(), 1);

        // Re-enable: the preserved timer resumes.
        system.handle_event(
            &mut world,
            &GameEvent::SystemToggle {
                target: "fadeout",
                enabled: true,
            },
        );
        system.update(&mut world);
        assert!(world.fadeouts.entities().is_empty());
    }

    #[test]
    fn test_toggle_for_other_module_is_ignored() {
        let mut world = test_world();
        let mut system = FadeoutSystem::new();
        system.handle_event(
            &mut world,
            &GameEvent::SystemToggle {
                target: "audio",
                enabled: false,
            },
        );

        system.handle_event(&mut world, &spawn_event());
        assert_eq!(world.fadeouts.entities().len(), 1);
    }

    #[test]
    fn test_init_destroys_particles_and_reenables() {
        let mut world = test_world();
        let mut system = FadeoutSystem::new();
        system.handle_event(&mut world, &spawn_event());
        system.handle_event(
            &mut world,
            &GameEvent::SystemToggle {
                target: "fadeout",
                enabled: false,
            },
        );

        system.handle_event(&mut world, &GameEvent::SessionReset);

        assert!(world.fadeouts.entities().is_empty());
        assert_eq!(world.entities.len(), 0);

        // Enabled again after reset.
        system.handle_event(&mut world, &spawn_event());
        assert_eq!(world.fadeouts.entities().len(), 1);
    }
}
