//! Raw keyboard input: timed byte reads and escape-sequence decoding.
//!
//! This module turns the byte stream a raw-mode terminal delivers into
//! [`Key`] events:
//! - `ByteSource` is the read boundary: one byte at a time, with a timeout
//! - `TtyInput` is the production source (poll(2) on stdin)
//! - `KeyDecoder` is the state machine mapping bytes to keys
//!
//! Timeouts are not errors. A read that produces no byte inside its window
//! reports `Ok(None)`, and the decoder either retries (waiting for the
//! next keystroke) or, mid-sequence, resolves the partial sequence to
//! `Key::Escape`. Only real I/O failures surface as `Err`.

use std::io;
use std::os::fd::AsFd;
use std::time::Duration;

use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};

use crate::keys::Key;

/// How long a single read waits for a byte before reporting `None`.
///
/// Short enough that a bare ESC press resolves promptly, long enough that
/// the bytes of one escape sequence never straddle the window on a local
/// terminal. Slow links can still split a sequence; the decoder resolves
/// that case to `Key::Escape` rather than buffering partial state.
pub const READ_TIMEOUT: Duration = Duration::from_millis(100);

const ESC: u8 = 0x1b;

/// A byte-oriented input with non-blocking-with-timeout semantics.
///
/// `Ok(None)` means the timeout elapsed with no data available; it is an
/// expected outcome, not an error. `Err` is reserved for fatal I/O
/// failures (device detached, closed descriptor) and is never retried
/// here.
pub trait ByteSource {
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

/// Production byte source reading from the process's stdin.
pub struct TtyInput {
    stdin: io::Stdin,
}

impl TtyInput {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
        }
    }
}

impl Default for TtyInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for TtyInput {
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        let millis = timeout.as_millis().min(u128::from(u16::MAX)) as u16;
        let mut fds = [PollFd::new(self.stdin.as_fd(), PollFlags::POLLIN)];

        match poll(&mut fds, PollTimeout::from(millis)) {
            // No byte inside the window.
            Ok(0) => return Ok(None),
            Ok(_) => {}
            // A signal interrupted the wait; report it as an empty window
            // and let the caller retry.
            Err(Errno::EINTR) => return Ok(None),
            Err(e) => return Err(e.into()),
        }

        let mut buf = [0u8; 1];
        match nix::unistd::read(self.stdin.as_fd(), &mut buf) {
            // Poll reported readiness, so zero bytes means the input is
            // gone, not a timeout. Retrying would spin.
            Ok(0) => Err(io::ErrorKind::UnexpectedEof.into()),
            Ok(_) => Ok(Some(buf[0])),
            Err(Errno::EINTR) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Decodes the raw byte stream into [`Key`] events, one per keystroke.
///
/// Escape sequences are consumed eagerly and never buffered across calls:
/// a timeout at any point inside a sequence collapses the whole sequence
/// to `Key::Escape`. That makes a bare ESC press indistinguishable from a
/// truncated sequence on a slow link, which is the intended trade-off.
pub struct KeyDecoder<S> {
    source: S,
    timeout: Duration,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            timeout: READ_TIMEOUT,
        }
    }

    /// Blocks until one keystroke has been decoded or a fatal read error
    /// occurs. Empty read windows before the first byte are retried.
    pub fn next_key(&mut self) -> io::Result<Key> {
        let first = loop {
            if let Some(byte) = self.source.read_byte(self.timeout)? {
                break byte;
            }
        };

        if first != ESC {
            return Ok(Key::Char(first));
        }

        // ESC seen: the next two bytes decide the sequence. Either read
        // timing out means the user pressed a bare ESC (or the sequence
        // was truncated, which we resolve the same way).
        let Some(intro) = self.source.read_byte(self.timeout)? else {
            return Ok(Key::Escape);
        };
        let Some(code) = self.source.read_byte(self.timeout)? else {
            return Ok(Key::Escape);
        };

        let key = match (intro, code) {
            // ESC [ <digit> ~ : vt-style numeric sequences. The digit's
            // terminator is always consumed, recognized or not.
            (b'[', b'0'..=b'9') => match self.source.read_byte(self.timeout)? {
                Some(b'~') => match code {
                    b'1' | b'7' => Key::Home,
                    b'3' => Key::Delete,
                    b'4' | b'8' => Key::End,
                    b'5' => Key::PageUp,
                    b'6' => Key::PageDown,
                    _ => Key::Escape,
                },
                _ => Key::Escape,
            },
            (b'[', b'A') => Key::ArrowUp,
            (b'[', b'B') => Key::ArrowDown,
            (b'[', b'C') => Key::ArrowRight,
            (b'[', b'D') => Key::ArrowLeft,
            (b'[', b'H') => Key::Home,
            (b'[', b'F') => Key::End,
            (b'O', b'H') => Key::Home,
            (b'O', b'F') => Key::End,
            _ => Key::Escape,
        };

        Ok(key)
    }
}
