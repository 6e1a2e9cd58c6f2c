//! Cursor position in document coordinates.

/// Zero-based cursor position.
///
/// `x` may legally equal the current line's length (the one-past-end
/// column), and `y` may equal the document's line count (the virtual
/// empty line past end-of-file). Only [`Viewport`](crate::Viewport)
/// movement operations mutate a cursor; rendering code reads it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Column within the current line.
    pub x: usize,
    /// Row into the document's lines.
    pub y: usize,
}
