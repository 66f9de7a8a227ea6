//! # Memory Management
//!
//! Buffer pooling for bursty batch payloads.
//!
//! ## Design Philosophy
//!
//! Batch events (a burst of particle spawns) reuse buffers instead of
//! allocating per publish. The pool hands out generation-guarded handles
//! so a double release or a leaked handle is detectable - and survivable.

mod pool;

pub use pool::{BufferHandle, BufferPool, PoolError};
