//! Pull-style tokenizer over a finalized line
//!
//! Same splitting rules as `strtok`: runs of delimiter bytes separate
//! tokens, leading and trailing delimiters produce nothing.

/// Position of the next token in the current line.
///
/// Only yields tokens while armed, i.e. between line finalization and
/// the next buffer reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCursor {
    offset: usize,
    armed: bool,
}

impl TokenCursor {
    /// Create a disarmed cursor.
    pub const fn new() -> Self {
        Self {
            offset: 0,
            armed: false,
        }
    }

    /// Start over at the beginning of a freshly finalized line.
    pub fn arm(&mut self) {
        self.offset = 0;
        self.armed = true;
    }

    /// Stop yielding tokens until the next [`arm`](Self::arm).
    pub fn disarm(&mut self) {
        self.offset = 0;
        self.armed = false;
    }

    /// Whether a line is available for tokenizing.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Extract the next token from `line`.
    ///
    /// Continues from where the previous call stopped; returns `None` once
    /// the line is exhausted or when the cursor is disarmed.
    pub fn next_token<'l>(&mut self, line: &'l [u8], delimiters: &[u8]) -> Option<&'l str> {
        if !self.armed || self.offset >= line.len() {
            return None;
        }

        let rest = &line[self.offset..];
        let Some(start) = rest.iter().position(|b| !delimiters.contains(b)) else {
            self.offset = line.len();
            return None;
        };
        let len = rest[start..]
            .iter()
            .position(|b| delimiters.contains(b))
            .unwrap_or(rest.len() - start);

        let token = &rest[start..start + len];
        // Skip the delimiter that ended the token as well
        self.offset = (self.offset + start + len + 1).min(line.len());

        core::str::from_utf8(token).ok()
    }
}
