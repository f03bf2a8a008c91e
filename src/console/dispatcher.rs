//! Line dispatcher: byte source -> line buffer -> command table
//!
//! ```text
//! ACCUMULATING --terminator--> LINE_READY --> DISPATCHING --reset--> ACCUMULATING
//! ```
//!
//! Polled, never blocks: [`SerialCommand::read_serial`] drains what the source
//! has right now and returns. Handlers run synchronously inside that call.

use super::error::RegistryError;
use super::line_buffer::{Feed, LineBuffer};
use super::registry::{Handler, Registry};
use super::tokenizer::TokenCursor;
use crate::config::{Config, LINE_SIZE, MAX_COMMANDS};
use crate::source::ByteSource;
use crate::stats::Stats;

/// What happened to a finished line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No token on the line; nothing invoked.
    Empty,
    /// Registered command at slot `index` ran.
    Matched { index: usize },
    /// No command matched; the default handler ran.
    Default,
    /// No command matched and no default handler is set.
    Unhandled,
}

/// View handed to a running handler.
pub struct CommandContext<'c, S: ?Sized> {
    command: &'c str,
    line: &'c [u8],
    delimiters: &'c [u8],
    cursor: &'c mut TokenCursor,
    port: &'c mut S,
}

impl<'c, S: ?Sized> CommandContext<'c, S> {
    /// First token of the line (the unmatched one for the default handler).
    pub fn command(&self) -> &'c str {
        self.command
    }

    /// Pull the next argument, `None` when the line is exhausted.
    pub fn next_token(&mut self) -> Option<&'c str> {
        self.cursor.next_token(self.line, self.delimiters)
    }

    /// Whole line as received, without terminator.
    pub fn line(&self) -> &'c str {
        core::str::from_utf8(self.line).unwrap_or("")
    }

    /// The byte source, e.g. to write a reply.
    pub fn port(&mut self) -> &mut S {
        &mut *self.port
    }
}

/// Serial command dispatcher.
///
/// Borrows its byte source for its whole life. `LINE` bounds both the line
/// buffer and command names, `CMDS` the number of command slots.
pub struct SerialCommand<
    'a,
    S: ByteSource + ?Sized,
    const LINE: usize = LINE_SIZE,
    const CMDS: usize = MAX_COMMANDS,
> {
    port: &'a mut S,
    config: Config,
    line: LineBuffer<LINE>,
    cursor: TokenCursor,
    registry: Registry<'a, S, CMDS, LINE>,
    stats: Stats,
}

impl<'a, S: ByteSource + ?Sized> SerialCommand<'a, S> {
    /// Dispatcher with default capacities and line settings.
    pub fn new(port: &'a mut S) -> Self {
        Self::with_config(port, Config::default())
    }
}

impl<'a, S: ByteSource + ?Sized, const LINE: usize, const CMDS: usize> SerialCommand<'a, S, LINE, CMDS> {
    /// Dispatcher with explicit line settings.
    pub fn with_config(port: &'a mut S, config: Config) -> Self {
        Self {
            line: LineBuffer::new(config.terminator_byte()),
            port,
            config,
            cursor: TokenCursor::new(),
            registry: Registry::new(),
            stats: Stats::new(),
        }
    }

    /// Register a command.
    ///
    /// Fails soft: when the table is full the handler is dropped and
    /// [`RegistryError::Full`] returned; ignoring the result keeps going.
    /// Duplicate names are accepted but only the first one is ever
    /// dispatched.
    pub fn add_command(&mut self, name: &str, handler: Handler<'a, S>) -> Result<usize, RegistryError> {
        match self.registry.add(name, handler) {
            Ok(index) => Ok(index),
            Err(err) => {
                self.stats.dropped_registrations = self.stats.dropped_registrations.wrapping_add(1);
                Err(err)
            }
        }
    }

    /// Set the handler for lines matching no command.
    pub fn add_default_handler(&mut self, handler: Handler<'a, S>) -> Option<Handler<'a, S>> {
        self.registry.set_default(handler)
    }

    /// Unset the default handler; unmatched lines are then ignored.
    pub fn clear_default_handler(&mut self) -> Option<Handler<'a, S>> {
        self.registry.clear_default()
    }

    /// Registered command names in scan order.
    pub fn commands(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.names()
    }

    /// The command table.
    pub fn registry(&self) -> &Registry<'a, S, CMDS, LINE> {
        &self.registry
    }

    /// Drain every byte currently available and dispatch completed lines.
    ///
    /// Returns the number of lines dispatched, empty ones included.
    pub fn read_serial(&mut self) -> usize {
        let mut lines = 0;
        while self.port.available() > 0 {
            let Some(byte) = self.port.read_byte() else {
                break;
            };
            if self.process_byte(byte).is_some() {
                lines += 1;
            }
        }
        lines
    }

    /// Feed one byte; dispatches when it is the terminator.
    pub fn process_byte(&mut self, byte: u8) -> Option<Dispatch> {
        self.stats.bytes = self.stats.bytes.wrapping_add(1);
        log::trace!("rx {:#04x}", byte);

        match self.line.feed(byte) {
            Feed::Line => return Some(self.dispatch_line()),
            Feed::Wrapped => {
                self.stats.overflows = self.stats.overflows.wrapping_add(1);
                log::debug!("line buffer full ({} bytes), wrapped to start", LINE);
            }
            Feed::Discarded => {
                self.stats.discarded = self.stats.discarded.wrapping_add(1);
            }
            Feed::Stored => {}
        }
        None
    }

    /// Dispatch the buffered content as a finished line, then reset.
    pub fn dispatch_line(&mut self) -> Dispatch {
        let line = self.line.as_bytes();
        let delimiters = self.config.delimiter_set();
        self.cursor.arm();

        let outcome = match self.cursor.next_token(line, delimiters) {
            None => Dispatch::Empty,
            Some(command) => {
                log::debug!("received: {}", self.line.as_str());

                let (outcome, handler) = match self.registry.find(command) {
                    Some((index, handler)) => {
                        log::debug!("matched command: {}", command);
                        (Dispatch::Matched { index }, Some(handler))
                    }
                    None => match self.registry.default_handler() {
                        Some(handler) => (Dispatch::Default, Some(handler)),
                        None => {
                            log::debug!("no handler for '{}'", command);
                            (Dispatch::Unhandled, None)
                        }
                    },
                };

                if let Some(handler) = handler {
                    let mut ctx = CommandContext {
                        command,
                        line,
                        delimiters,
                        cursor: &mut self.cursor,
                        port: &mut *self.port,
                    };
                    handler(&mut ctx);
                }
                outcome
            }
        };

        self.stats.record_dispatch(outcome);
        self.reset();
        outcome
    }

    /// Next token of the finalized line, `None` outside a dispatch.
    pub fn next_token(&mut self) -> Option<&str> {
        self.cursor.next_token(self.line.as_bytes(), self.config.delimiter_set())
    }

    /// Clear the line buffer and tokenizer.
    pub fn reset(&mut self) {
        self.line.clear();
        self.cursor.disarm();
    }

    /// Bytes accumulated for the current line.
    pub fn pending_line(&self) -> &str {
        self.line.as_str()
    }

    /// Counter snapshot.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Zero all counters.
    pub fn reset_stats(&mut self) {
        self.stats.clear();
    }

    /// Line settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The byte source.
    pub fn port(&self) -> &S {
        &*self.port
    }

    /// The byte source, mutably (inject bytes, read replies).
    pub fn port_mut(&mut self) -> &mut S {
        &mut *self.port
    }
}
