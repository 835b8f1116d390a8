//! Lightweight, lenient SQL tokenization and statement segmentation.
//!
//! This module groups the building blocks the completion engine uses to
//! reason about a SQL buffer near a cursor position without a full parser.
//! The components are intentionally pragmatic:
//!
//! Modules:
//! - `keyword`    : Small enum of only the keywords needed for completion.
//! - `token_kind` : Classification of lexical atoms (identifiers, literals,
//!   punctuation, keywords).
//! - `token`      : Token struct pairing a `TokenKind` with source span
//!   offsets.
//! - `tokenizer`  : Single pass O(n) tokenizer producing a `Vec<Token>` from
//!   raw SQL input, plus the alias-lookahead probe.
//! - `identifier` : Quoting / case-folding normalization of object names.
//! - `statement`  : `;`-splitting of a buffer into statement `Fragment`s.
//!
//! Design principles:
//! 1. Accept incomplete / syntactically invalid SQL (robust for live
//!    editing).
//! 2. Preserve original identifier casing for display and lookup.
//! 3. Keep the keyword set purposely small; extend only when completion
//!    logic demands.
//! 4. Every offset is relative to the string a component was given; callers
//!    rebase nested offsets by summing fragment offsets.
//!
//! Example:
//! ```rust
//! use sqlsense::sql::prelude::*;
//!
//! let tokens = tokenize("SELECT a, b FROM my_table");
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
//! assert!(tokens.iter().any(|t| t.ident() == Some("my_table")));
//! ```
//!
//! NOTE: This is **not** a full SQL parser and intentionally ignores many
//! constructs that are not needed for current completion heuristics.

pub mod identifier;
pub mod keyword;
pub mod statement;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use identifier::Identifier;
pub use keyword::Keyword;
pub use statement::{Fragment, split_statements, statement_at};
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::{alias_token, tokenize};

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Fragment, Identifier, Keyword, Token, TokenKind, statement_at, tokenize};
}
