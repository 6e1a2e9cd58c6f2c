//! Logical key events produced by the input decoder.
//!
//! A `Key` is one decoded keystroke, as opposed to the raw byte(s) the
//! terminal delivered for it. Navigation keys arrive as multi-byte escape
//! sequences; everything else is a single byte.

/// One decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A plain byte, including control characters.
    Char(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    /// A bare ESC press, or any escape sequence we do not recognize.
    Escape,
}

/// The byte a terminal sends for Ctrl plus `key`: the upper three bits
/// stripped, mirroring what the CTRL modifier does on the wire.
pub const fn ctrl(key: u8) -> u8 {
    key & 0x1f
}
