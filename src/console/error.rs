//! Console error types

use thiserror::Error;

/// Command registration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Every slot is taken; the registration was dropped.
    #[error("command table full ({capacity} slots)")]
    Full {
        /// Number of slots in the table.
        capacity: usize,
    },
}

/// Invalid line configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Delimiter set has no bytes.
    #[error("delimiter set is empty")]
    EmptyDelimiters,
    /// Delimiter set exceeds its fixed capacity.
    #[error("delimiter set holds at most {max} bytes, got {len}")]
    TooManyDelimiters { len: usize, max: usize },
    /// Delimiter can never reach the buffer.
    #[error("delimiter {0:#04x} is not printable")]
    NonPrintableDelimiter(u8),
    /// Same byte used as terminator and delimiter.
    #[error("byte {0:#04x} cannot be both terminator and delimiter")]
    TerminatorIsDelimiter(u8),
}
