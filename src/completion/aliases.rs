//! Object-reference and alias scanning over a narrowed fragment.

use tracing::trace;

use crate::sql::{
    identifier::Identifier, keyword::Keyword, token_kind::TokenKind, tokenizer::alias_token,
    tokenizer::tokenize,
};

/// Insertion-ordered multi-map from alias text to referenced object name.
///
/// An alias may recur when the same alias string appears in disjoint scopes
/// of the scanned fragment, so duplicate keys are kept; lookup iterates all
/// candidates for a key in insertion order and the earliest one that
/// resolves in the catalog wins. Alias keys are matched by exact token text;
/// only catalog-name comparison is case-insensitive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AliasMap {
    pairs: Vec<(String, String)>,
}

impl AliasMap {
    pub fn insert(&mut self, alias: impl Into<String>, name: impl Into<String>) {
        self.pairs.push((alias.into(), name.into()));
    }

    /// All object names recorded under `alias`, in insertion order.
    pub fn candidates<'a>(&'a self, alias: &'a str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(a, _)| a == alias)
            .map(|(_, n)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Collect every object reference in the fragment into an [`AliasMap`].
///
/// Single forward pass. `FROM`, `JOIN`, `UPDATE` and `INSERT INTO` introduce
/// a reference: the following identifier is the object name (canonicalized
/// through [`Identifier`]); the alias is the explicit identifier after it
/// (one `AS` permitted, clause keywords never taken — see `alias_token`) or
/// the canonical name itself. `INSERT` without `INTO`, or a clause with no
/// identifier where the name belongs, abandons that construct and scanning
/// resumes at the next token; malformed input is never fatal.
pub fn scan_aliases(sql: &str) -> AliasMap {
    let tokens = tokenize(sql);
    let mut map = AliasMap::default();
    let mut i = 0;
    while let Some(t) = tokens.get(i) {
        let TokenKind::Keyword(kw) = &t.kind else {
            i += 1;
            continue;
        };
        if !Keyword::CLAUSE_STARTERS.contains(kw) {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        if *kw == Keyword::Insert {
            if !tokens.get(j).is_some_and(|t| t.is_keyword(Keyword::Into)) {
                i += 1;
                continue;
            }
            j += 1;
        }
        let Some(raw_name) = tokens.get(j).and_then(|t| t.ident()) else {
            i += 1;
            continue;
        };
        let name = Identifier::from_sql(raw_name).into_name();
        let alias = match alias_token(&tokens, j) {
            Some(explicit) => explicit.to_string(),
            None => name.clone(),
        };
        trace!(%alias, %name, clause = %kw, "captured object reference");
        map.insert(alias, name);
        i = j + 1;
    }
    map
}
