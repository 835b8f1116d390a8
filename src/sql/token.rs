//! Token model tying a `TokenKind` to its source span.
//!
//! A `Token` is intentionally minimal: its classification (`kind`) plus byte
//! offsets (`start`, `end`) into the string handed to the tokenizer.
//!
//! Rationale:
//! - Offsets let higher-level logic (statement splitting, block extraction,
//!   cursor-aware completion) slice the original text without a parallel
//!   reconstructed string.
//! - Offsets are always relative to the tokenizer's own input. When a
//!   fragment is narrowed and re-tokenized, the caller rebases by adding the
//!   fragment's offset in its parent.
//! - Keeping `Token` immutable and simple reduces cognitive load;
//!   manipulating tokens should happen by constructing new ones, not
//!   mutating existing ones.

use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is a valid slice range for the tokenizer's input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Construct a new token.
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// The distinct zero-width end-of-input token at `pos` (normally the
    /// input length).
    pub const fn eof(pos: usize) -> Self {
        Self::new(TokenKind::Eof, pos, pos)
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the identifier text if this token is an identifier.
    pub fn ident(&self) -> Option<&str> {
        self.kind.ident()
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// Returns true if the cursor (byte offset) lies within this token's
    /// span.
    ///
    /// NOTE: End is exclusive, so `cursor == end` returns false.
    pub fn contains(&self, cursor: usize) -> bool {
        cursor >= self.start && cursor < self.end
    }

    /// Convenience: convert to a `(start, end)` tuple.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
