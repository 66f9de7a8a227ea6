//! # Status Flag Registry
//!
//! Named boolean flags with atomic load/store semantics.
//!
//! The registry lock is only taken when a name is looked up or registered.
//! An observer thread grabs a [`StatusFlags::handle`] once and then reads
//! the `AtomicBool` directly - no locking, no partial-write hazards.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Registry of named, atomically-readable status flags.
///
/// Cloning is cheap and shares the registry; hand a clone (or a per-flag
/// [`handle`](Self::handle)) to whichever thread needs to observe state.
///
/// Flags are written only by the logic thread on state transitions and
/// read anywhere, so `Release` stores paired with `Acquire` loads are all
/// the ordering this needs.
///
/// # Example
///
/// ```rust,ignore
/// let flags = StatusFlags::new();
/// flags.set("grayout_active", true);
///
/// // On the render thread, after grabbing a handle once:
/// let grayout = flags.handle("grayout_active");
/// if grayout.load(Ordering::Acquire) { /* dim the screen */ }
/// ```
#[derive(Clone, Default)]
pub struct StatusFlags {
    /// Name -> flag. The lock guards registration, not the flag reads.
    inner: Arc<RwLock<HashMap<String, Arc<AtomicBool>>>>,
}

impl StatusFlags {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a flag, registering the name on first use.
    pub fn set(&self, name: &str, value: bool) {
        if let Some(flag) = self.inner.read().get(name) {
            flag.store(value, Ordering::Release);
            return;
        }

        // First transition for this name.
        self.inner
            .write()
            .entry(name.to_owned())
            .or_insert_with(|| Arc::new(AtomicBool::new(false)))
            .store(value, Ordering::Release);
    }

    /// Reads a flag. An unregistered name reads `false`.
    #[must_use]
    pub fn get(&self, name: &str) -> bool {
        self.inner
            .read()
            .get(name)
            .is_some_and(|flag| flag.load(Ordering::Acquire))
    }

    /// Returns a lock-free handle to a flag, registering it if needed.
    ///
    /// Intended for observer threads: resolve the name once, then read
    /// the atomic directly every frame.
    #[must_use]
    pub fn handle(&self, name: &str) -> Arc<AtomicBool> {
        if let Some(flag) = self.inner.read().get(name) {
            return Arc::clone(flag);
        }

        Arc::clone(
            self.inner
                .write()
                .entry(name.to_owned())
                .or_insert_with(|| Arc::new(AtomicBool::new(false))),
        )
    }

    /// Lowers every registered flag (session reset).
    pub fn clear(&self) {
        for flag in self.inner.read().values() {
            flag.store(false, Ordering::Release);
        }
    }
}
