//! Line buffer for console input
//!
//! Fixed capacity, wraps on overflow: once `N` bytes are held, the next
//! printable byte discards the earlier content and lands at position 0.

use crate::config::{is_printable, DEFAULT_TERMINATOR, LINE_SIZE};

/// Result of feeding one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// Byte appended.
    Stored,
    /// Buffer was full; earlier content dropped, byte stored at position 0.
    Wrapped,
    /// Non-printable byte, ignored.
    Discarded,
    /// Terminator seen; the current content is a complete line.
    Line,
}

/// Line input buffer
pub struct LineBuffer<const N: usize = LINE_SIZE> {
    buf: [u8; N],
    len: usize,
    terminator: u8,
}

impl<const N: usize> LineBuffer<N> {
    /// Create empty buffer ending lines on `terminator`
    pub const fn new(terminator: u8) -> Self {
        assert!(N > 0, "Line buffer capacity must be non-zero");

        Self {
            buf: [0u8; N],
            len: 0,
            terminator,
        }
    }

    /// Feed one input byte.
    ///
    /// The terminator is never stored. On [`Feed::Line`] the content stays in
    /// place until [`clear`](Self::clear).
    pub fn feed(&mut self, byte: u8) -> Feed {
        if byte == self.terminator {
            return Feed::Line;
        }
        if !is_printable(byte) {
            return Feed::Discarded;
        }

        let wrapped = self.len == N;
        if wrapped {
            self.len = 0;
        }
        self.buf[self.len] = byte;
        self.len += 1;

        if wrapped {
            Feed::Wrapped
        } else {
            Feed::Stored
        }
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf = [0u8; N];
        self.len = 0;
    }

    /// Write position of the next byte.
    pub fn cursor(&self) -> usize {
        self.len % N
    }

    /// End-of-line byte.
    pub fn terminator(&self) -> u8 {
        self.terminator
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        // Only printable ASCII gets in, so this never falls back
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffer capacity
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATOR)
    }
}
