//! Test harness: drives a full viewing session from scripted bytes and
//! replays its output through a virtual terminal.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use folio::editor::Editor;
use folio::input::ByteSource;
use folio::keys::ctrl;
use folio::{Document, Viewport};

/// Byte source replaying a script. `Some(byte)` delivers a byte;
/// `None` simulates one timed-out read window.
pub struct ScriptedInput {
    steps: VecDeque<Option<u8>>,
}

impl ByteSource for ScriptedInput {
    fn read_byte(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        Ok(self.steps.pop_front().unwrap_or(None))
    }
}

/// Builds a session over an in-memory document, feeds it scripted input,
/// and captures every frame it writes.
pub struct ViewerHarness {
    lines: Vec<String>,
    steps: Vec<Option<u8>>,
    width: usize,
    height: usize,
}

impl ViewerHarness {
    /// `height` is the text-area height; the harness adds the status-bar
    /// row to the virtual terminal itself.
    pub fn new(lines: &[&str], width: usize, height: usize) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            steps: Vec::new(),
            width,
            height,
        }
    }

    /// Queue raw bytes, escape sequences included.
    pub fn press(&mut self, bytes: &[u8]) -> &mut Self {
        self.steps.extend(bytes.iter().map(|b| Some(*b)));
        self
    }

    /// Queue one empty read window (what a bare ESC press looks like
    /// after its byte).
    pub fn timeout(&mut self) -> &mut Self {
        self.steps.push(None);
        self
    }

    /// Append Ctrl-Q, run the session to completion, and return the final
    /// state. Panics on I/O errors; the scripted source never fails.
    pub fn run(&mut self) -> FinishedSession {
        self.steps.push(Some(ctrl(b'q')));

        let document = Document::from_lines(self.lines.clone());
        let source = ScriptedInput {
            steps: self.steps.drain(..).collect(),
        };
        let mut editor = Editor::new(document, source, Vec::new(), self.width, self.height);
        editor.run().expect("scripted session failed");

        let viewport = editor.viewport().clone();
        let mut parser = vt100::Parser::new(self.height as u16 + 1, self.width as u16, 0);
        parser.process(editor.sink());

        FinishedSession { viewport, parser }
    }
}

/// Final state of a completed scripted session.
pub struct FinishedSession {
    pub viewport: Viewport,
    parser: vt100::Parser,
}

impl FinishedSession {
    /// Text content of one screen row, trailing blanks stripped.
    pub fn row(&self, row: u16) -> String {
        let screen = self.parser.screen();
        let (_, cols) = screen.size();
        let text: String = (0..cols)
            .map(|col| {
                screen
                    .cell(row, col)
                    .map(|c| {
                        if c.contents().is_empty() {
                            " ".to_string()
                        } else {
                            c.contents()
                        }
                    })
                    .unwrap_or_default()
            })
            .collect();
        text.trim_end().to_string()
    }

    /// The status bar is the bottom row of the virtual terminal.
    pub fn status_bar(&self) -> String {
        let (rows, _) = self.parser.screen().size();
        self.row(rows - 1)
    }

    /// Cursor position on screen, zero-based `(row, col)`.
    pub fn screen_cursor(&self) -> (u16, u16) {
        self.parser.screen().cursor_position()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.viewport.cursor.x, self.viewport.cursor.y)
    }
}
