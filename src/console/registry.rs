//! Command table
//!
//! Fixed number of slots, scanned linearly in registration order.
//! Names are not required to be unique: the first registered entry with a
//! matching name always wins, later duplicates are unreachable. A full table
//! drops further registrations. Both behaviors are kept for compatibility
//! with existing command sets, so check the result of [`Registry::add`] when
//! building a table from configuration.

use heapless::{String, Vec};

use super::dispatcher::CommandContext;
use super::error::RegistryError;
use crate::config::{LINE_SIZE, MAX_COMMANDS};

/// Command handler.
///
/// Receives the dispatch context so it can pull arguments with
/// [`CommandContext::next_token`] and reply through the port.
pub type Handler<'a, S> = &'a (dyn Fn(&mut CommandContext<'_, S>) + 'a);

/// Command descriptor
pub struct CommandEntry<'a, S: ?Sized, const NAME: usize = LINE_SIZE> {
    name: String<NAME>,
    handler: Handler<'a, S>,
}

impl<'a, S: ?Sized, const NAME: usize> CommandEntry<'a, S, NAME> {
    /// Stored (possibly truncated) command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handler invoked on match.
    pub fn handler(&self) -> Handler<'a, S> {
        self.handler
    }

    /// Compare a candidate token against this entry.
    ///
    /// Exact and case-sensitive, looking at no more than `NAME` bytes of the
    /// token.
    pub fn matches(&self, token: &str) -> bool {
        let token = token.as_bytes();
        &token[..token.len().min(NAME)] == self.name.as_bytes()
    }
}

/// Fixed-capacity command table plus optional fallback handler.
pub struct Registry<'a, S: ?Sized, const CMDS: usize = MAX_COMMANDS, const NAME: usize = LINE_SIZE> {
    entries: Vec<CommandEntry<'a, S, NAME>, CMDS>,
    default_handler: Option<Handler<'a, S>>,
}

impl<'a, S: ?Sized, const CMDS: usize, const NAME: usize> Registry<'a, S, CMDS, NAME> {
    /// Create empty table
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            default_handler: None,
        }
    }

    /// Register `handler` under `name`, returning its slot index.
    ///
    /// Names longer than `NAME` bytes are truncated. When every slot is taken
    /// the registration is dropped and [`RegistryError::Full`] returned.
    pub fn add(&mut self, name: &str, handler: Handler<'a, S>) -> Result<usize, RegistryError> {
        if self.entries.is_full() {
            log::warn!("too many handlers, dropped '{}' (capacity {})", name, CMDS);
            return Err(RegistryError::Full { capacity: CMDS });
        }

        let name = bounded_name::<NAME>(name);
        let index = self.entries.len();
        log::debug!("{}-adding command for {}", index, name);

        self.entries
            .push(CommandEntry { name, handler })
            .map_err(|_| RegistryError::Full { capacity: CMDS })?;

        Ok(index)
    }

    /// Set the fallback handler, returning the one it replaces.
    pub fn set_default(&mut self, handler: Handler<'a, S>) -> Option<Handler<'a, S>> {
        self.default_handler.replace(handler)
    }

    /// Remove the fallback handler.
    pub fn clear_default(&mut self) -> Option<Handler<'a, S>> {
        self.default_handler.take()
    }

    /// Fallback handler, if any.
    pub fn default_handler(&self) -> Option<Handler<'a, S>> {
        self.default_handler
    }

    /// First entry matching `token`, with its slot index.
    pub fn find(&self, token: &str) -> Option<(usize, Handler<'a, S>)> {
        self.entries.iter().enumerate().find_map(|(i, entry)| {
            log::trace!("comparing [{}] to [{}]", token, entry.name());
            entry.matches(token).then_some((i, entry.handler))
        })
    }

    /// Registered names in scan order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name())
    }

    /// Registered entries in scan order.
    pub fn entries(&self) -> &[CommandEntry<'a, S, NAME>] {
        &self.entries
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no command is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if further registrations would be dropped
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Slot count
    pub const fn capacity(&self) -> usize {
        CMDS
    }
}

impl<'a, S: ?Sized, const CMDS: usize, const NAME: usize> Default for Registry<'a, S, CMDS, NAME> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy at most `N` bytes of `name`, cutting on a char boundary.
fn bounded_name<const N: usize>(name: &str) -> String<N> {
    let mut end = name.len().min(N);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    if end < name.len() {
        log::warn!("command name '{}' truncated to {} bytes", name, end);
    }

    let mut out = String::new();
    // Fits by construction
    let _ = out.push_str(&name[..end]);
    out
}
