//! # Entity Component System
//!
//! Arena-style storage keyed by entity identity.
//!
//! ## Design Philosophy
//!
//! - Entities are opaque index+generation handles, never a type hierarchy
//! - One typed store per component kind; presence is explicit
//! - Destroying an entity is idempotent and visible on the next snapshot

mod entity;
mod registry;
mod store;

pub use entity::EntityId;
pub use registry::EntityRegistry;
pub use store::ComponentStore;
