//! Module: config
//!
//! Purpose: Tunables for the line reader and command table.
//!
//! Capacities are compile-time (const generics, defaults below) so worst-case
//! memory is fixed. Terminator and delimiters are runtime values carried in
//! [`Config`], validated when they are set.

use heapless::Vec;

use crate::console::error::ConfigError;

/// Default line buffer capacity, also the command name capacity.
pub const LINE_SIZE: usize = 16;

/// Default number of command slots.
pub const MAX_COMMANDS: usize = 16;

/// Maximum number of delimiter bytes.
pub const MAX_DELIMITERS: usize = 4;

/// Default end-of-line byte.
pub const DEFAULT_TERMINATOR: u8 = b'\r';

/// Default delimiter set.
pub const DEFAULT_DELIMITERS: &str = " ";

/// True for bytes that may enter the line buffer (ASCII `0x20..=0x7E`).
#[inline]
pub const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

/// Runtime line settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    terminator: u8,
    delimiters: Vec<u8, MAX_DELIMITERS>,
}

impl Default for Config {
    fn default() -> Self {
        let mut delimiters = Vec::new();
        for &b in DEFAULT_DELIMITERS.as_bytes() {
            let _ = delimiters.push(b);
        }
        Self {
            terminator: DEFAULT_TERMINATOR,
            delimiters,
        }
    }
}

impl Config {
    /// Replace the terminator byte.
    ///
    /// Fails if the byte is already part of the delimiter set.
    pub fn terminator(mut self, terminator: u8) -> Result<Self, ConfigError> {
        if self.delimiters.contains(&terminator) {
            return Err(ConfigError::TerminatorIsDelimiter(terminator));
        }
        self.terminator = terminator;
        Ok(self)
    }

    /// Replace the delimiter set. Every byte of `set` is a delimiter.
    pub fn delimiters(mut self, set: &str) -> Result<Self, ConfigError> {
        let bytes = set.as_bytes();
        if bytes.is_empty() {
            return Err(ConfigError::EmptyDelimiters);
        }
        if bytes.len() > MAX_DELIMITERS {
            return Err(ConfigError::TooManyDelimiters {
                len: bytes.len(),
                max: MAX_DELIMITERS,
            });
        }

        let mut delimiters = Vec::new();
        for &b in bytes {
            if !is_printable(b) {
                return Err(ConfigError::NonPrintableDelimiter(b));
            }
            if b == self.terminator {
                return Err(ConfigError::TerminatorIsDelimiter(b));
            }
            if !delimiters.contains(&b) {
                // Length already checked against capacity
                let _ = delimiters.push(b);
            }
        }

        self.delimiters = delimiters;
        Ok(self)
    }

    /// End-of-line byte.
    #[inline]
    pub fn terminator_byte(&self) -> u8 {
        self.terminator
    }

    /// Delimiter bytes.
    #[inline]
    pub fn delimiter_set(&self) -> &[u8] {
        &self.delimiters
    }

    /// Check whether `byte` separates tokens.
    #[inline]
    pub fn is_delimiter(&self, byte: u8) -> bool {
        self.delimiters.contains(&byte)
    }
}
