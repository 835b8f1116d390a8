//! Token kind definitions for the lightweight SQL tokenizer.
//!
//! Each `TokenKind` variant represents a syntactic atom discovered during the
//! lenient scanning phase. The tokenizer avoids strict SQL rules; anything
//! unrecognized becomes `Other(char)`.
//!
//! Design goals:
//! - Preserve original identifier casing via `Ident(String)` for downstream
//!   display and matching; quoted identifiers keep their quotes and are
//!   never re-tokenized.
//! - String literals are opaque `Literal` atoms so a `;` inside one can
//!   never split a statement.
//! - Keep the set of structural punctuation minimal (comma, dot, parens,
//!   statement terminator) as that's sufficient for the completion scanners.
//! - Provide ergonomic helpers (`is_keyword`, `ident`) to avoid verbose
//!   pattern matches at call sites.
//!
//! See `keyword.rs` for the `Keyword` enum and `tokenizer.rs` for
//! tokenization.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer.
///
/// Not a full SQL lexeme set; intentionally small and pragmatic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Table / alias / column / generic identifier. Quoted identifiers are
    /// stored verbatim, quotes included.
    Ident(String),
    /// Recognized SQL keyword.
    Keyword(Keyword),
    /// String literal, stored verbatim with its quotes. Opaque: the content
    /// is never re-tokenized.
    Literal(String),
    /// Comma `,` (used to separate table items in FROM, list items, etc.).
    Comma,
    /// Dot `.` (used for qualified names like `table.column`).
    Dot,
    /// Opening parenthesis `(`.
    ParenOpen,
    /// Closing parenthesis `)`.
    ParenClose,
    /// Statement terminator `;`.
    Terminator,
    /// Any other single punctuation / symbol we do not specially classify.
    Other(char),
    /// End of input. Never produced by `tokenize`; see `Token::eof`.
    Eof,
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Returns the identifier text if this token is an `Ident`.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Convenience: returns true if this token represents any identifier.
    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Ident(_))
    }

    /// Returns true if this token is structural punctuation (non-ident,
    /// non-keyword, non-literal).
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
                | TokenKind::Terminator
        )
    }

    /// True for the distinct end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}
