//! # System Scheduler
//!
//! Frame orchestration: drain queued events, deliver them to interested
//! modules in priority order, then run every module's per-frame logic in
//! the same order.
//!
//! ```text
//! tick(dt):
//! ┌─────────────────────────────────────────────────────────────┐
//! │ 1. resources.frame_dt = dt                                  │
//! │                                                             │
//! │ 2. DRAIN the channel once                                   │
//! │    └─ session-reset events float to the front (stable)      │
//! │                                                             │
//! │ 3. DISPATCH each event, modules in priority order           │
//! │    ├─ reset + toggle: delivered to EVERY module             │
//! │    └─ everything else: only where interest matches          │
//! │                                                             │
//! │ 4. UPDATE every module in priority order                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Events published during 3 or 4 sit in the channel until the next
//! tick's drain - recursion is bounded and frame cost stays predictable.

use crate::config::RuntimeConfig;
use crate::events::{EventBus, EventKind, EventReceiver, EventSender, GameEvent};
use crate::resources::Resources;
use crate::world::World;

/// The module contract every gameplay effect implements.
///
/// ## State machine
///
/// A module is `Enabled` or `Disabled`, starting `Enabled` and freshly
/// reset. `SessionReset` returns it to `Enabled` + reset from any state;
/// a `SystemToggle` naming it flips the flag while preserving timers.
/// While disabled, `handle_event` and `update` must produce no observable
/// side effect - except for those two control events, which are always
/// processed. The enabled flag lives inside the module; the scheduler
/// only routes.
pub trait System {
    /// Stable identity for toggle targeting.
    fn name(&self) -> &'static str;

    /// Resets the module to its post-construction state.
    ///
    /// Invoked at registration and on every `SessionReset`. Must be fully
    /// idempotent.
    fn init(&mut self, world: &mut World);

    /// Execution priority - lower runs earlier in both dispatch and the
    /// update pass. Ties break by registration order, stable across
    /// frames.
    fn priority(&self) -> i32;

    /// The fixed set of event tags this module wants.
    ///
    /// `SessionReset` and `SystemToggle` are delivered regardless and
    /// need not be listed.
    fn event_kinds(&self) -> &'static [EventKind];

    /// Handles one delivered event.
    ///
    /// Never invoked re-entrantly: the dispatch pass finishes one event
    /// across all modules before starting the next.
    fn handle_event(&mut self, world: &mut World, event: &GameEvent);

    /// Per-frame logic, independent of events.
    fn update(&mut self, world: &mut World);
}

/// One registered module plus its cached ordering key.
struct SystemEntry {
    /// The module.
    system: Box<dyn System>,
    /// Cached `priority()` - the sort key.
    priority: i32,
}

/// Owns the world, the event bus, and the ordered module list.
///
/// # Example
///
/// ```rust,ignore
/// let mut scheduler = Scheduler::new(&RuntimeConfig::default());
/// scheduler.register(Box::new(FadeoutSystem::new()));
/// scheduler.register(Box::new(AudioSystem::new()));
///
/// let sender = scheduler.sender();
/// sender.send(GameEvent::PingRequest { duration: 2.0 });
///
/// loop {
///     scheduler.tick(frame_dt);
/// }
/// ```
pub struct Scheduler {
    /// All runtime state modules operate on.
    world: World,
    /// Modules, kept sorted by (priority, registration order).
    systems: Vec<SystemEntry>,
    /// Drain end of the event bus.
    receiver: EventReceiver,
    /// Publisher template for external producers.
    sender: EventSender,
}

impl Scheduler {
    /// Creates a scheduler with the given capacities.
    #[must_use]
    pub fn new(config: &RuntimeConfig) -> Self {
        let bus = EventBus::new(config.event_capacity);
        let receiver = bus.receiver();
        let sender = bus.sender();
        let resources = Resources::new(config.batch_pool_capacity);
        let world = World::new(config.entity_capacity, resources, bus.sender());

        Self {
            world,
            systems: Vec::new(),
            receiver,
            sender,
        }
    }

    /// Registers a module: resets it, then slots it into priority order.
    ///
    /// The sort is stable, so modules sharing a priority keep their
    /// registration order - across this call and every frame after it.
    pub fn register(&mut self, mut system: Box<dyn System>) {
        system.init(&mut self.world);

        let priority = system.priority();
        self.systems.push(SystemEntry { system, priority });
        self.systems.sort_by_key(|entry| entry.priority);
    }

    /// Returns a publisher handle for gameplay/input code.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Accesses the world (embedding game setup: active entity, audio
    /// sink, flag handles).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Read access to the world (assertions, render snapshotting).
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Runs one frame.
    ///
    /// # Arguments
    ///
    /// * `dt` - Elapsed real time since the previous tick, in seconds
    pub fn tick(&mut self, dt: f32) {
        self.world.resources.frame_dt = dt;

        // One drain per frame. Everything published from here on - by
        // handlers, updates, or other threads - waits for the next tick.
        let mut events = self.receiver.drain();

        // A reset present in this frame's queue goes first. Stable, so
        // everything else keeps its publish order.
        events.sort_by_key(|event| event.kind() != EventKind::SessionReset);

        for event in &events {
            self.dispatch(event);
        }

        for entry in &mut self.systems {
            entry.system.update(&mut self.world);
        }
    }

    /// Delivers one event to every module that should see it, in priority
    /// order.
    fn dispatch(&mut self, event: &GameEvent) {
        let kind = event.kind();
        let broadcast = matches!(kind, EventKind::SessionReset | EventKind::SystemToggle);

        if kind == EventKind::SessionReset {
            // Session-scoped resource state clears before any module sees
            // the reset, so handlers observe a clean container.
            self.world.resources.reset();
        }

        if kind == EventKind::SystemToggle {
            self.log_unknown_toggle(event);
        }

        for entry in &mut self.systems {
            if broadcast || entry.system.event_kinds().contains(&kind) {
                entry.system.handle_event(&mut self.world, event);
            }
        }
    }

    /// A toggle naming no registered module is ignored, but worth a debug
    /// line - it usually means a typo at the publish site.
    fn log_unknown_toggle(&self, event: &GameEvent) {
        if let GameEvent::SystemToggle { target, .. } = event {
            if !self.systems.iter().any(|e| e.system.name() == *target) {
                tracing::debug!("toggle addressed to unregistered module '{}'", target);
            }
        }
    }
}
