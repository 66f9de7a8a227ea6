//! # Gameplay Effect Modules
//!
//! The four effect systems that plug into the scheduler. They never touch
//! each other's stores; anything cross-module travels as an event.
//!
//! Priorities (lower runs earlier):
//!
//! | Module    | Name        | Priority |
//! |-----------|-------------|----------|
//! | Fadeout   | `"fadeout"` | 10       |
//! | Ping grid | `"ping"`    | 20       |
//! | Grayout   | `"grayout"` | 30       |
//! | Audio     | `"audio"`   | 40       |

mod audio;
mod fadeout;
mod grayout;
mod ping;

pub use audio::AudioSystem;
pub use fadeout::{FadeoutSystem, FADE_DURATION_SECS};
pub use grayout::{GrayoutSystem, GRAYOUT_FLAG};
pub use ping::PingSystem;
