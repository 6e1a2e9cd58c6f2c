//! The viewing session: document, viewport, input, and the run loop.

use std::io::{self, Write};

use crate::document::Document;
use crate::input::{ByteSource, KeyDecoder};
use crate::keys::{ctrl, Key};
use crate::render;
use crate::viewport::Viewport;

const QUIT_KEY: u8 = ctrl(b'q');

/// One viewing session over a single document.
///
/// Generic over the byte source and the output sink so tests can drive a
/// whole session from scripted bytes and inspect the frames it writes. In
/// production the source is [`TtyInput`](crate::input::TtyInput) and the
/// sink is stdout. The session never touches terminal modes; the caller
/// holds the [`RawModeGuard`](crate::terminal::RawModeGuard).
pub struct Editor<S, W> {
    document: Document,
    viewport: Viewport,
    decoder: KeyDecoder<S>,
    out: W,
}

impl<S: ByteSource, W: Write> Editor<S, W> {
    /// `width`/`height` are the text-area dimensions; the caller has
    /// already reserved the status-bar row.
    pub fn new(document: Document, source: S, out: W, width: usize, height: usize) -> Self {
        Self {
            document,
            viewport: Viewport::new(width, height),
            decoder: KeyDecoder::new(source),
            out,
        }
    }

    /// Alternate key presses with repaints until Ctrl-Q or a fatal I/O
    /// error. Timeouts inside the decoder are invisible here; only real
    /// failures end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.refresh()?;
            let key = self.decoder.next_key()?;
            if !self.handle_key(key) {
                tracing::info!("Quit requested");
                return Ok(());
            }
        }
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.viewport.scroll();
        render::refresh_screen(&mut self.out, &self.document, &self.viewport)
    }

    /// Dispatch one key. Returns false when the session should end.
    ///
    /// Navigation keys go to the viewport. Delete is accepted and ignored
    /// (nothing to delete in a viewer), as is every other plain byte.
    fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(QUIT_KEY) => false,
            Key::ArrowUp
            | Key::ArrowDown
            | Key::ArrowLeft
            | Key::ArrowRight
            | Key::Home
            | Key::End
            | Key::PageUp
            | Key::PageDown => {
                self.viewport.apply_key(key, &self.document);
                true
            }
            Key::Char(_) | Key::Delete | Key::Escape => true,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The output sink, for tests that replay the written frames.
    pub fn sink(&self) -> &W {
        &self.out
    }
}
