//! # PERISCOPE Effect Runtime
//!
//! The entity/component runtime and event-driven scheduler that every
//! gameplay effect module plugs into.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          SCHEDULER                              │
//! │                                                                 │
//! │   drain events ──> dispatch (priority order) ──> update pass    │
//! │        ▲                                                        │
//! └────────┼────────────────────────────────────────────────────────┘
//!          │                        │ &mut World
//!   ┌──────┴──────┐   ┌────────────┼────────────┬────────────┐
//!   │  Gameplay/  │   ▼            ▼            ▼            ▼
//!   │  Input code │ ┌────────┐ ┌────────┐ ┌─────────┐ ┌─────────┐
//!   └─────────────┘ │fadeout │ │  ping  │ │ grayout │ │  audio  │
//!                   └────────┘ └────────┘ └─────────┘ └─────────┘
//! ```
//!
//! Modules never reference each other; cross-module effects travel as
//! events through the bus, delivered next frame. All state is in-memory,
//! scoped to one play session, reset by [`GameEvent::SessionReset`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use periscope::{
//!     GameEvent, RuntimeConfig, Scheduler,
//!     systems::{AudioSystem, FadeoutSystem, GrayoutSystem, PingSystem},
//! };
//!
//! let mut scheduler = Scheduler::new(&RuntimeConfig::default());
//! scheduler.register(Box::new(FadeoutSystem::new()));
//! scheduler.register(Box::new(PingSystem::new()));
//! scheduler.register(Box::new(GrayoutSystem::new()));
//! scheduler.register(Box::new(AudioSystem::new()));
//!
//! let boat = scheduler.world_mut().entities.create();
//! scheduler.world_mut().resources.active_entity = boat;
//!
//! let events = scheduler.sender();
//! events.send(GameEvent::PingRequest { duration: 2.0 });
//!
//! loop {
//!     scheduler.tick(frame_dt);
//! }
//! ```

pub mod components;
pub mod config;
pub mod events;
pub mod resources;
pub mod scheduler;
pub mod systems;
pub mod world;

// Re-export the kernel
pub use periscope_core as core;

// Re-export commonly used types
pub use components::{Color, Fadeout, PingGrid};
pub use config::RuntimeConfig;
pub use events::{EventBus, EventKind, EventReceiver, EventSender, FadeoutSpawn, GameEvent, SoundKind};
pub use resources::{AudioSink, Grayout, Resources, SharedBatchPool};
pub use scheduler::{Scheduler, System};
pub use world::World;
