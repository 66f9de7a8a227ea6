//! # PERISCOPE Kernel
//!
//! Entity/component storage, payload pooling, and the cross-thread status
//! flags that every gameplay module in the runtime builds on.
//!
//! ## Architecture Rules
//!
//! 1. **Absence is normal** - a missing component is `None`, never an error
//! 2. **The frame loop never panics** - defect classes (double release,
//!    stale handles) surface as `Result`s or `false`, not crashes
//! 3. **One cross-thread surface** - named atomic flags; nothing else is
//!    shared between threads
//!
//! ## Example
//!
//! ```rust,ignore
//! use periscope_core::{EntityRegistry, ComponentStore};
//!
//! let mut entities = EntityRegistry::new(1024);
//! let mut healths: ComponentStore<u32> = ComponentStore::new();
//!
//! let id = entities.create();
//! healths.set(id, 100);
//! assert_eq!(healths.get(id), Some(&100));
//! ```

pub mod ecs;
pub mod memory;
pub mod sync;

pub use ecs::{ComponentStore, EntityId, EntityRegistry};
pub use memory::{BufferHandle, BufferPool, PoolError};
pub use sync::StatusFlags;
