//! Folio: a minimal terminal text viewer.
//!
//! The crate is split along the data flow: raw bytes are decoded into
//! [`Key`] events by [`input::KeyDecoder`], the [`Editor`] session maps
//! them onto [`Viewport`] movement over a read-only [`Document`], and
//! [`render`] formats the resulting state into ANSI frames. Terminal raw
//! mode is scoped by [`terminal::RawModeGuard`], owned by the binary.

pub mod cursor;
pub mod document;
pub mod editor;
pub mod input;
pub mod keys;
pub mod render;
pub mod terminal;
pub mod viewport;

pub use cursor::Cursor;
pub use document::Document;
pub use editor::Editor;
pub use keys::Key;
pub use viewport::Viewport;
