//! Byte sources feeding the dispatcher.
//!
//! The dispatcher only needs "how many bytes are waiting" and "give me one".
//! Hardware backends implement [`ByteSource`] next to their driver (see
//! `uart` on ESP-IDF); [`MemorySerial`] is an in-memory port for hosts and
//! loopback setups.

use heapless::{Deque, Vec};

/// Non-blocking byte input.
pub trait ByteSource {
    /// Number of bytes that can be read right now.
    fn available(&self) -> usize;

    /// Take one byte, `None` if nothing is waiting. Must not block.
    fn read_byte(&mut self) -> Option<u8>;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn available(&self) -> usize {
        (**self).available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }
}

/// In-memory serial port.
///
/// RX is a FIFO filled with [`inject`](Self::inject); TX collects whatever
/// handlers write through `core::fmt::Write`. Both sides hold `N` bytes and
/// drop the excess.
pub struct MemorySerial<const N: usize> {
    rx: Deque<u8, N>,
    tx: Vec<u8, N>,
}

impl<const N: usize> MemorySerial<N> {
    /// Create empty port
    pub const fn new() -> Self {
        Self {
            rx: Deque::new(),
            tx: Vec::new(),
        }
    }

    /// Queue bytes for reading. Returns how many fit.
    pub fn inject(&mut self, bytes: &[u8]) -> usize {
        let mut accepted = 0;
        for &b in bytes {
            if self.rx.push_back(b).is_err() {
                log::warn!("memory serial rx full, dropped {} bytes", bytes.len() - accepted);
                break;
            }
            accepted += 1;
        }
        accepted
    }

    /// Bytes written so far.
    pub fn output(&self) -> &[u8] {
        &self.tx
    }

    /// Output as text (lossy: empty if not UTF-8).
    pub fn output_str(&self) -> &str {
        core::str::from_utf8(&self.tx).unwrap_or("")
    }

    /// Discard written bytes.
    pub fn clear_output(&mut self) {
        self.tx.clear();
    }
}

impl<const N: usize> Default for MemorySerial<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteSource for MemorySerial<N> {
    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}

impl<const N: usize> core::fmt::Write for MemorySerial<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        let available = N - self.tx.len();
        let to_copy = bytes.len().min(available);
        // Truncates silently once full, like a UART with no flow control
        let _ = self.tx.extend_from_slice(&bytes[..to_copy]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_inject_and_read() {
        let mut port = MemorySerial::<8>::new();

        assert_eq!(port.inject(b"ab"), 2);
        assert_eq!(port.available(), 2);
        assert_eq!(port.read_byte(), Some(b'a'));
        assert_eq!(port.read_byte(), Some(b'b'));
        assert_eq!(port.read_byte(), None);
        assert_eq!(port.available(), 0);
    }

    #[test]
    fn test_inject_overflow() {
        let mut port = MemorySerial::<4>::new();

        assert_eq!(port.inject(b"abcdef"), 4);
        assert_eq!(port.available(), 4);
    }

    #[test]
    fn test_write_truncates() {
        let mut port = MemorySerial::<4>::new();

        let _ = write!(port, "hello");
        assert_eq!(port.output(), b"hell");

        port.clear_output();
        let _ = write!(port, "ok");
        assert_eq!(port.output_str(), "ok");
    }

    #[test]
    fn test_mut_ref_source() {
        fn drain<S: ByteSource>(mut source: S) -> usize {
            let mut n = 0;
            while source.read_byte().is_some() {
                n += 1;
            }
            n
        }

        let mut port = MemorySerial::<4>::new();
        port.inject(b"xyz");

        assert_eq!(drain(&mut port), 3);
        assert_eq!(port.available(), 0);
    }
}
