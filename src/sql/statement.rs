//! Statement splitting over the token stream.
//!
//! A multi-statement buffer is divided at `;` terminators. Because splitting
//! consumes tokenizer output, terminators inside string literals, quoted
//! identifiers and comments never split; terminators inside a `BEGIN..END`
//! procedural body (trigger / procedure sources) are skipped by tracking the
//! BEGIN/END depth so the whole definition stays one statement.

use crate::sql::{keyword::Keyword, token_kind::TokenKind, tokenizer::tokenize};

/// A span of SQL text together with its starting byte offset in the parent
/// string it was cut from.
///
/// Every narrowing step (statement, block, union branch) produces a
/// `Fragment`; offsets compose by summing, which is how cursor positions are
/// rebased between coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub sql: &'a str,
    pub offset: usize,
}

impl<'a> Fragment<'a> {
    /// Offset one past the fragment's last byte, in parent coordinates.
    pub fn end(&self) -> usize {
        self.offset + self.sql.len()
    }

    /// True if `pos` (parent coordinates) falls on this fragment,
    /// end-inclusive: a cursor sitting just past the text still belongs to
    /// it.
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.offset && pos <= self.end()
    }

    /// Translate `pos` from parent coordinates into this fragment's own,
    /// clamped to the fragment bounds.
    pub fn rebase(&self, pos: usize) -> usize {
        pos.saturating_sub(self.offset).min(self.sql.len())
    }
}

/// Split a buffer into its top-level statements.
///
/// Statements are the spans between terminators (terminator excluded).
/// Trailing text after the last terminator forms the final statement when it
/// contains at least one token. An empty or whitespace-only buffer yields no
/// statements.
pub fn split_statements(buffer: &str) -> Vec<Fragment<'_>> {
    let tokens = tokenize(buffer);
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for t in &tokens {
        match &t.kind {
            TokenKind::Keyword(Keyword::Begin) => depth += 1,
            TokenKind::Keyword(Keyword::End) => depth = depth.saturating_sub(1),
            TokenKind::Terminator if depth == 0 => {
                out.push(Fragment {
                    sql: &buffer[start..t.start],
                    offset: start,
                });
                start = t.end;
            }
            _ => {}
        }
    }
    if tokens.iter().any(|t| t.start >= start) {
        out.push(Fragment {
            sql: &buffer[start..],
            offset: start,
        });
    }
    out
}

/// The statement whose range best covers `pos`.
///
/// A cursor sitting on a terminator belongs to the statement that terminator
/// ends; a cursor in trailing whitespace (or anywhere past the last
/// terminator) belongs to the last statement, treating end-of-buffer as an
/// implicit terminator. `None` only when the buffer has no statements.
pub fn statement_at(buffer: &str, pos: usize) -> Option<Fragment<'_>> {
    let statements = split_statements(buffer);
    for (i, st) in statements.iter().enumerate() {
        // a statement claims every offset up to the start of the next one
        let claim_end = statements
            .get(i + 1)
            .map(|next| next.offset)
            .unwrap_or(buffer.len());
        if pos < claim_end {
            return Some(*st);
        }
    }
    statements.last().copied()
}
