//! Cursor movement and scrolling over a document.
//!
//! The viewport owns the cursor and the scroll offsets; the document is
//! borrowed per operation for line lengths. Two rules keep every state
//! reachable here valid:
//! - after any vertical move the column is re-clamped to the landing
//!   line's length, so the cursor never points past the end of a line
//! - scrolling is corrective, not preventive: the cursor moves first and
//!   [`Viewport::scroll`] pulls the offsets after it once per frame
//!
//! None of these operations can fail; every branch is total over the
//! document's current shape.

use crate::cursor::Cursor;
use crate::document::Document;
use crate::keys::Key;

/// The visible window over a document, plus the cursor inside it.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub cursor: Cursor,
    /// First visible document row.
    pub row_offset: usize,
    /// First visible document column.
    pub col_offset: usize,
    width: usize,
    height: usize,
}

impl Viewport {
    /// A viewport of the given text-area size, scrolled to the top left.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cursor: Cursor::default(),
            row_offset: 0,
            col_offset: 0,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Apply one navigation key to the cursor.
    ///
    /// Page moves jump relative to the current scroll position and then
    /// reuse the single-step arrow rule `height - 1` times, so every
    /// boundary case (wrapping, clamping at the document edges) behaves
    /// identically to pressing the arrow repeatedly.
    pub fn apply_key(&mut self, key: Key, doc: &Document) {
        match key {
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.move_cursor(key, doc);
            }
            Key::Home => self.cursor.x = 0,
            Key::End => {
                // On the virtual past-end line there is nothing to seek to.
                if self.cursor.y < doc.line_count() {
                    self.cursor.x = doc.line_len(self.cursor.y);
                }
            }
            Key::PageUp => {
                self.cursor.y = self.row_offset;
                for _ in 1..self.height {
                    self.move_cursor(Key::ArrowUp, doc);
                }
                self.clamp_column(doc);
            }
            Key::PageDown => {
                let bottom = self.row_offset + self.height.saturating_sub(1);
                self.cursor.y = bottom.min(doc.line_count());
                for _ in 1..self.height {
                    self.move_cursor(Key::ArrowDown, doc);
                }
                self.clamp_column(doc);
            }
            Key::Char(_) | Key::Delete | Key::Escape => {}
        }
    }

    fn move_cursor(&mut self, key: Key, doc: &Document) {
        let line_count = doc.line_count();
        match key {
            Key::ArrowLeft => {
                if self.cursor.x > 0 {
                    self.cursor.x -= 1;
                } else if self.cursor.y > 0 {
                    // Wrap to the end of the previous line.
                    self.cursor.y -= 1;
                    self.cursor.x = doc.line_len(self.cursor.y);
                }
            }
            Key::ArrowRight => {
                if self.cursor.y < line_count {
                    if self.cursor.x < doc.line_len(self.cursor.y) {
                        self.cursor.x += 1;
                    } else {
                        // Wrap to the start of the next line.
                        self.cursor.y += 1;
                        self.cursor.x = 0;
                    }
                }
            }
            Key::ArrowUp => {
                if self.cursor.y > 0 {
                    self.cursor.y -= 1;
                }
            }
            Key::ArrowDown => {
                // Moving onto the virtual past-end line is allowed;
                // moving past it is not.
                if self.cursor.y < line_count {
                    self.cursor.y += 1;
                }
            }
            _ => {}
        }
        self.clamp_column(doc);
    }

    /// Landing on a shorter line truncates the column.
    fn clamp_column(&mut self, doc: &Document) {
        let len = doc.line_len(self.cursor.y);
        if self.cursor.x > len {
            self.cursor.x = len;
        }
    }

    /// Scroll reconciliation: pull the offsets just far enough that the
    /// cursor is inside the window. Run once per rendered frame, after
    /// cursor movement. The four checks are independent; a cursor already
    /// in view never perturbs the offsets, so the pass is idempotent.
    pub fn scroll(&mut self) {
        if self.cursor.y < self.row_offset {
            self.row_offset = self.cursor.y;
        }
        if self.cursor.y >= self.row_offset + self.height {
            self.row_offset = self.cursor.y + 1 - self.height;
        }
        if self.cursor.x < self.col_offset {
            self.col_offset = self.cursor.x;
        }
        if self.cursor.x >= self.col_offset + self.width {
            self.col_offset = self.cursor.x + 1 - self.width;
        }
    }

    /// One-based screen coordinates of the cursor, for the renderer's
    /// cursor-positioning sequence. Only meaningful after [`scroll`].
    ///
    /// [`scroll`]: Viewport::scroll
    pub fn cursor_screen_position(&self) -> (u16, u16) {
        let row = self.cursor.y - self.row_offset + 1;
        let col = self.cursor.x - self.col_offset + 1;
        (row as u16, col as u16)
    }
}
