//! # serial-command
//!
//! Line-oriented command dispatcher for serial consoles.
//!
//! ## Architecture
//!
//! ```text
//! ByteSource ──▶ LineBuffer ──terminator──▶ TokenCursor ──first token──▶ Registry
//!  (UART,         printable      (CR)         pull-style        linear scan,
//!   memory)       bytes only                  arguments         first match wins
//! ```
//!
//! - Poll [`SerialCommand::read_serial`] from the main loop; it never blocks
//! - Handlers run synchronously and pull arguments with `next_token()`
//! - Fixed capacities, no heap; overflow wraps, a full table drops entries
//! - Every absorbed anomaly is counted in [`Stats`]
//!
//! ## Example
//!
//! ```
//! use core::cell::Cell;
//! use serial_command::{CommandContext, MemorySerial, SerialCommand};
//!
//! let lit = Cell::new(false);
//! let led = |ctx: &mut CommandContext<'_, MemorySerial<32>>| {
//!     lit.set(ctx.next_token() == Some("ON"));
//! };
//!
//! let mut port = MemorySerial::<32>::new();
//! port.inject(b"LED ON\r");
//!
//! let mut console = SerialCommand::new(&mut port);
//! console.add_command("LED", &led).unwrap();
//!
//! assert_eq!(console.read_serial(), 1);
//! assert!(lit.get());
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod source;
pub mod stats;
#[cfg(target_os = "espidf")]
pub mod uart;

pub use config::Config;
pub use console::{
    CommandContext, ConfigError, Dispatch, Feed, Handler, LineBuffer, Registry, RegistryError,
    SerialCommand, TokenCursor,
};
pub use source::{ByteSource, MemorySerial};
pub use stats::Stats;

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");
