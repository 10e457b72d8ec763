//! Diagnostic console.
//!
//! The harness only needs a line-oriented byte sink; the transport behind it
//! (UART, stdout, an in-memory buffer) is not its concern.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Line-oriented output channel for verbose reporting.
pub trait Console: fmt::Debug {
    /// Writes raw bytes.
    ///
    /// # Errors
    ///
    /// Returns the transport's I/O error.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Writes `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the transport's I/O error.
    fn println(&mut self, line: &str) -> io::Result<()> {
        self.write_bytes(line.as_bytes())?;
        self.write_bytes(b"\n")
    }
}

/// Console over any `Write` implementation, flushed after every write.
pub struct WriterConsole<W> {
    writer: W,
}

impl<W: Write> WriterConsole<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterConsole<io::Stdout> {
    /// Console on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> fmt::Debug for WriterConsole<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterConsole").finish_non_exhaustive()
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()
    }
}

/// Shared in-memory console. Clones see the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferConsole {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferConsole {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Bytes written so far, lossily decoded as UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }
}

impl Console for BufferConsole {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(())
    }
}
