//! Dispatch statistics.
//!
//! Every anomaly the read loop absorbs (overflow wrap, discarded byte,
//! unmatched line, dropped registration) bumps a counter here instead of
//! vanishing. Counters wrap at `u32::MAX` and are only cleared on request.

use crate::console::dispatcher::Dispatch;

/// Counters kept by [`SerialCommand`](crate::SerialCommand).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Bytes taken from the source.
    pub bytes: u32,
    /// Non-printable bytes dropped.
    pub discarded: u32,
    /// Times the line buffer wrapped and lost content.
    pub overflows: u32,
    /// Lines terminated, empty ones included.
    pub lines: u32,
    /// Lines without any token.
    pub empty_lines: u32,
    /// Lines handled by a registered command.
    pub matched: u32,
    /// Lines handed to the default handler.
    pub defaulted: u32,
    /// Lines that matched nothing with no default handler set.
    pub unhandled: u32,
    /// Registrations dropped because the table was full.
    pub dropped_registrations: u32,
}

impl Stats {
    /// All counters at zero.
    pub const fn new() -> Self {
        Self {
            bytes: 0,
            discarded: 0,
            overflows: 0,
            lines: 0,
            empty_lines: 0,
            matched: 0,
            defaulted: 0,
            unhandled: 0,
            dropped_registrations: 0,
        }
    }

    /// Account for one finished dispatch.
    #[inline]
    pub fn record_dispatch(&mut self, outcome: Dispatch) {
        self.lines = self.lines.wrapping_add(1);
        let counter = match outcome {
            Dispatch::Empty => &mut self.empty_lines,
            Dispatch::Matched { .. } => &mut self.matched,
            Dispatch::Default => &mut self.defaulted,
            Dispatch::Unhandled => &mut self.unhandled,
        };
        *counter = counter.wrapping_add(1);
    }

    /// Lines that reached no registered command (default or unhandled).
    #[inline]
    pub fn unmatched(&self) -> u32 {
        self.defaulted.wrapping_add(self.unhandled)
    }

    /// Reset all counters.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
