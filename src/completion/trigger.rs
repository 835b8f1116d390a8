//! `OLD` / `NEW` pseudo-alias resolution from trigger headers.
//!
//! Inside a trigger body the `OLD` and `NEW` pseudo-aliases refer to the
//! trigger's underlying relation, not to any query-scope alias. The relation
//! is recovered from the statement's own header (`CREATE TRIGGER .. FOR ..`)
//! or, for `ALTER TRIGGER`, from what the catalog already knows about the
//! trigger.

use tracing::debug;

use crate::metadata::{Catalog, ObjectKind, Relation};
use crate::sql::{Identifier, Keyword, Token, tokenize};

/// One element of an exact token-sequence pattern.
enum Expect {
    Kw(Keyword),
    Ident,
}

/// Find the first exact, contiguous occurrence of `pattern` and return the
/// token immediately after it. No tokens may intervene mid-sequence; on a
/// mismatch the attempt restarts at the next token.
fn token_after_pattern<'a>(tokens: &'a [Token], pattern: &[Expect]) -> Option<&'a Token> {
    let mut i = 0;
    'scan: while i < tokens.len() {
        for (k, expect) in pattern.iter().enumerate() {
            let t = tokens.get(i + k)?;
            let matched = match expect {
                Expect::Kw(kw) => t.is_keyword(*kw),
                Expect::Ident => t.kind.is_ident(),
            };
            if !matched {
                i += 1;
                continue 'scan;
            }
        }
        return tokens.get(i + pattern.len());
    }
    None
}

fn relation_by_name<'a>(catalog: &'a dyn Catalog, name: &str) -> Option<&'a Relation> {
    catalog
        .find_relation(ObjectKind::Table, name)
        .or_else(|| catalog.find_relation(ObjectKind::View, name))
}

/// Relation of a `CREATE TRIGGER <name> FOR <relation>` header, looked up as
/// table first, then view.
pub fn create_trigger_relation<'a>(sql: &str, catalog: &'a dyn Catalog) -> Option<&'a Relation> {
    let tokens = tokenize(sql);
    let pattern = [
        Expect::Kw(Keyword::Create),
        Expect::Kw(Keyword::Trigger),
        Expect::Ident,
        Expect::Kw(Keyword::For),
    ];
    let rel_token = token_after_pattern(&tokens, &pattern)?;
    let raw = rel_token.ident()?;
    let id = Identifier::from_sql(raw);
    debug!(relation = %id, "trigger relation from CREATE TRIGGER header");
    relation_by_name(catalog, id.as_str())
}

/// Relation of an `ALTER TRIGGER <name>` statement: the trigger is looked up
/// in the catalog and its known underlying relation resolved as table first,
/// then view.
pub fn alter_trigger_relation<'a>(sql: &str, catalog: &'a dyn Catalog) -> Option<&'a Relation> {
    let tokens = tokenize(sql);
    let pattern = [Expect::Kw(Keyword::Alter), Expect::Kw(Keyword::Trigger)];
    let name_token = token_after_pattern(&tokens, &pattern)?;
    let raw = name_token.ident()?;
    let id = Identifier::from_sql(raw);
    let trigger = catalog.find_trigger(id.as_str())?;
    let relation = trigger.relation_name()?;
    debug!(trigger = %id, %relation, "trigger relation from catalog");
    relation_by_name(catalog, relation)
}
