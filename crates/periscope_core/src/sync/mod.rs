//! # Cross-Thread Status Flags
//!
//! The ONE surface that crosses threads.
//!
//! ## The Rule
//!
//! ```text
//! Logic thread:     WRITES flags on state transitions
//! Other threads:    READ flags (render overlay, reporting)
//!
//! Nothing else is shared. No locks on the read path.
//! ```
//!
//! Everything else in the runtime is single-threaded by construction: the
//! frame loop runs to completion without suspension, so component stores
//! and resources never need synchronization.

mod flags;

pub use flags::StatusFlags;
