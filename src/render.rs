//! Frame assembly: document rows, welcome banner, status bar.
//!
//! Pure formatting over viewport and document state. Each frame is built
//! into one buffer and written with a single call, so the terminal never
//! sees a half-drawn screen. Control sequences used: hide/show cursor
//! (`?25l`/`?25h`), home (`H`), clear-line (`K`), absolute positioning
//! (`<row>;<col>H`), and inverted colours (`7m`/`m`) for the status bar.

use std::fmt::Write as _;
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::document::Document;
use crate::viewport::Viewport;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repaint the whole screen from the current viewport and document state.
///
/// Expects the viewport's offsets to be reconciled already; this function
/// reads state and formats, it makes no movement decisions.
pub fn refresh_screen<W: Write>(out: &mut W, doc: &Document, view: &Viewport) -> io::Result<()> {
    let mut frame = String::new();

    // Hide the cursor while repainting, then start from the top-left.
    frame.push_str("\x1b[?25l");
    frame.push_str("\x1b[H");

    draw_rows(&mut frame, doc, view);
    draw_status_bar(&mut frame, doc, view);

    let (row, col) = view.cursor_screen_position();
    let _ = write!(frame, "\x1b[{};{}H", row, col);
    frame.push_str("\x1b[?25h");

    out.write_all(frame.as_bytes())?;
    out.flush()
}

fn draw_rows(frame: &mut String, doc: &Document, view: &Viewport) {
    for y in 0..view.height() {
        let file_row = y + view.row_offset;
        if file_row >= doc.line_count() {
            if doc.is_empty() && y == view.height() / 3 {
                draw_welcome(frame, view.width());
            } else {
                frame.push('~');
            }
        } else if let Some(line) = doc.line(file_row) {
            // The visible horizontal slice, in character columns.
            frame.extend(line.chars().skip(view.col_offset).take(view.width()));
        }

        // Clear the remainder of the line instead of clearing the whole
        // screen up front.
        frame.push_str("\x1b[K");
        frame.push_str("\r\n");
    }
}

/// Centered banner shown one third down an empty document.
fn draw_welcome(frame: &mut String, width: usize) {
    let mut message = format!("Folio viewer -- version {}", VERSION);
    if message.len() > width {
        message.truncate(width);
    }

    let mut padding = (width - message.len()) / 2;
    if padding > 0 {
        frame.push('~');
        padding -= 1;
    }
    for _ in 0..padding {
        frame.push(' ');
    }
    frame.push_str(&message);
}

/// Inverted status bar: file name and line count on the left, cursor
/// row over total on the right, padded to the window width.
fn draw_status_bar(frame: &mut String, doc: &Document, view: &Viewport) {
    frame.push_str("\x1b[7m");

    let name: String = doc.display_name().chars().take(20).collect();
    let mut status = format!("{} - {} lines", name, doc.line_count());
    while status.width() > view.width() {
        status.pop();
    }
    let position = format!("{}/{}", view.cursor.y + 1, doc.line_count());

    frame.push_str(&status);
    let mut filled = status.width();
    while filled < view.width() {
        if view.width() - filled == position.width() {
            frame.push_str(&position);
            break;
        }
        frame.push(' ');
        filled += 1;
    }

    frame.push_str("\x1b[m");
}
