//! # Gameplay Components
//!
//! Plain data values attached to entities. No behavior lives here; the
//! systems own all mutation rules.

/// 16-color terminal palette.
///
/// Rendering is external; the runtime only carries the value through.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// Black.
    Black = 0,
    /// Red.
    Red = 1,
    /// Green.
    Green = 2,
    /// Yellow.
    Yellow = 3,
    /// Blue.
    Blue = 4,
    /// Magenta.
    Magenta = 5,
    /// Cyan.
    Cyan = 6,
    /// White (default foreground).
    #[default]
    White = 7,
    /// Bright black (gray).
    BrightBlack = 8,
    /// Bright red.
    BrightRed = 9,
    /// Bright green.
    BrightGreen = 10,
    /// Bright yellow.
    BrightYellow = 11,
    /// Bright blue.
    BrightBlue = 12,
    /// Bright magenta.
    BrightMagenta = 13,
    /// Bright cyan.
    BrightCyan = 14,
    /// Bright white.
    BrightWhite = 15,
}

/// A decaying screen particle.
///
/// Spawned with `remaining == total`; the fadeout system counts
/// `remaining` down each frame and destroys the entity outright when it
/// reaches zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fadeout {
    /// Column on the terminal grid.
    pub x: i32,
    /// Row on the terminal grid.
    pub y: i32,
    /// Glyph to draw.
    pub glyph: char,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Seconds of life left.
    pub remaining: f32,
    /// Total lifetime in seconds (for renderers that fade by ratio).
    pub total: f32,
}

/// Sonar ping highlight on the designated entity.
///
/// Exactly one entity (the player's boat/cursor) holds this; re-pinging
/// while active overwrites `remaining`, it never accumulates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PingGrid {
    /// Whether the grid highlight is currently shown.
    pub active: bool,
    /// Seconds until the highlight expires. Clamped to zero on expiry.
    pub remaining: f32,
}
