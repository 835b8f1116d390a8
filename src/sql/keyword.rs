//! SQL keyword model used by the lightweight tokenizer and the fragment
//! scanners.
//!
//! This module defines the minimal set of SQL keywords required for the
//! current completion use-cases: clause starters the alias scanner reacts to,
//! the procedural block boundaries, the trigger-header keywords and the few
//! words that must never be mistaken for an alias. It intentionally omits
//! most of SQL to keep the surface area small and scanning lenient. Extend
//! only when a new completion context demands it.
//!
//! Design notes:
//! - Keywords are matched case-insensitively via `from_lower` using a
//!   pre-lower-cased string slice.
//! - `as_str` provides a canonical lowercase representation (useful for
//!   display or debugging).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Join,
    On,
    As,
    Where,
    Group,
    Order,
    Having,
    Set,
    Values,
    Union,
    Insert,
    Into,
    Update,
    Delete,
    Create,
    Alter,
    Trigger,
    For,
    Begin,
    End,
    Do,
}

impl Keyword {
    /// Keywords opening or closing a procedural block (`BEGIN..END`,
    /// `FOR..DO`). The block extractor treats every occurrence as a
    /// boundary, in source order.
    pub const BLOCK_BOUNDARIES: [Self; 4] =
        [Keyword::For, Keyword::Begin, Keyword::End, Keyword::Do];

    /// Keywords that introduce an object reference the alias scanner
    /// collects (`INSERT` only when followed by `INTO`).
    pub const CLAUSE_STARTERS: [Self; 4] =
        [Keyword::From, Keyword::Join, Keyword::Update, Keyword::Insert];

    /// Attempt to classify a *lower-cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized keyword.
    ///
    /// NOTE: The caller is responsible for lower-casing the input. This
    /// avoids allocating new strings for each token; `to_ascii_lowercase` is
    /// typically performed once per identifier lexeme outside this function.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "from" => From,
            "join" => Join,
            "on" => On,
            "as" => As,
            "where" => Where,
            "group" => Group,
            "order" => Order,
            "having" => Having,
            "set" => Set,
            "values" => Values,
            "union" => Union,
            "insert" => Insert,
            "into" => Into,
            "update" => Update,
            "delete" => Delete,
            "create" => Create,
            "alter" => Alter,
            "trigger" => Trigger,
            "for" => For,
            "begin" => Begin,
            "end" => End,
            "do" => Do,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            From => "from",
            Join => "join",
            On => "on",
            As => "as",
            Where => "where",
            Group => "group",
            Order => "order",
            Having => "having",
            Set => "set",
            Values => "values",
            Union => "union",
            Insert => "insert",
            Into => "into",
            Update => "update",
            Delete => "delete",
            Create => "create",
            Alter => "alter",
            Trigger => "trigger",
            For => "for",
            Begin => "begin",
            End => "end",
            Do => "do",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
