//! Fragment narrowing: procedural blocks and `UNION` branches.

use crate::sql::{
    keyword::Keyword,
    statement::{Fragment, statement_at},
    token_kind::TokenKind,
    tokenizer::tokenize,
};

/// Narrow a statement to the innermost `BEGIN..END` / `FOR..DO` block
/// containing `pos`, then to the `;`-terminated statement inside that block
/// containing it.
///
/// Boundary keywords are scanned in source order: the last boundary at or
/// before the cursor opens the span, the first boundary strictly after it
/// closes the span. Because positions are strictly increasing, the last
/// "before" boundary is the innermost opening, so no nesting stack is
/// needed. Invariant, not an optimization: a stack would change behavior on
/// unbalanced SQL, and lenient inputs are the normal case here. With no
/// boundary keyword at all, the span is the whole statement.
///
/// The returned fragment's offset is relative to `sql`; the span starts
/// *after* the opening boundary keyword so the inner statement re-split
/// is not thrown off by the `BEGIN` itself.
pub fn enclosing_block(sql: &str, pos: usize) -> Fragment<'_> {
    let mut start = 0;
    let mut end = sql.len();
    for t in tokenize(sql) {
        let TokenKind::Keyword(kw) = t.kind else {
            continue;
        };
        if !Keyword::BLOCK_BOUNDARIES.contains(&kw) {
            continue;
        }
        if t.start > pos {
            end = t.start;
            break;
        }
        start = t.end;
    }
    let block = Fragment {
        sql: &sql[start..end],
        offset: start,
    };
    // a block body may hold several ;-terminated statements
    match statement_at(block.sql, block.rebase(pos)) {
        Some(inner) => Fragment {
            sql: inner.sql,
            offset: start + inner.offset,
        },
        None => block,
    }
}

/// Narrow to the `UNION`-delimited branch containing `pos`.
///
/// Column resolution must only consider table references in the same
/// `SELECT` branch as the cursor, not its siblings. The last `UNION` before
/// the cursor bounds the branch start, the first after bounds its end;
/// without any, the branch is the whole input.
pub fn union_branch(sql: &str, pos: usize) -> Fragment<'_> {
    let mut start = 0;
    let mut end = sql.len();
    for t in tokenize(sql) {
        if !t.is_keyword(Keyword::Union) {
            continue;
        }
        if t.start > pos {
            end = t.start;
            break;
        }
        start = t.end;
    }
    Fragment {
        sql: &sql[start..end],
        offset: start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_boundaries_keeps_whole_statement() {
        let sql = "SELECT * FROM t WHERE a = 1";
        let f = enclosing_block(sql, 10);
        assert_eq!(f.sql, sql);
        assert_eq!(f.offset, 0);
    }

    #[test]
    fn narrows_to_begin_end_body() {
        let sql = "CREATE TRIGGER trg FOR tbl AS BEGIN update t2 set a = 1; END";
        let pos = sql.find("update").unwrap() + 2;
        let f = enclosing_block(sql, pos);
        assert_eq!(f.sql.trim(), "update t2 set a = 1");
        assert_eq!(&sql[f.offset..f.offset + f.sql.len()], f.sql);
    }

    #[test]
    fn picks_the_statement_under_the_cursor_inside_a_block() {
        let sql = "BEGIN insert into t1 values (1); update t2 set a = 2; END";
        let pos = sql.find("update").unwrap() + 3;
        let f = enclosing_block(sql, pos);
        assert_eq!(f.sql.trim(), "update t2 set a = 2");
        assert_eq!(&sql[f.offset..f.offset + f.sql.len()], f.sql);
    }

    #[test]
    fn nested_blocks_resolve_to_the_innermost() {
        let sql = "BEGIN update outer1 set a = 1; BEGIN update inner1 set b = 2; END END";
        let pos = sql.find("inner1").unwrap();
        let f = enclosing_block(sql, pos);
        assert_eq!(f.sql.trim(), "update inner1 set b = 2");
        // the outer statement is gone
        assert!(!f.sql.contains("outer1"));
    }

    #[test]
    fn for_do_counts_as_boundaries() {
        let sql = "FOR select a from t1 into :x DO update t2 set b = :x";
        let pos = sql.find("t2").unwrap();
        let f = enclosing_block(sql, pos);
        assert_eq!(f.sql.trim(), "update t2 set b = :x");
        // cursor inside the FOR..DO select narrows to that select
        let pos = sql.find("t1").unwrap();
        let f = enclosing_block(sql, pos);
        assert!(f.sql.contains("t1"));
        assert!(!f.sql.contains("t2"));
    }

    #[test]
    fn union_branch_bounds() {
        let sql = "SELECT a FROM t1 UNION SELECT b FROM t2 UNION SELECT c FROM t3";
        let first = union_branch(sql, 4);
        assert!(first.sql.contains("t1"));
        assert!(!first.sql.contains("t2"));

        let mid = union_branch(sql, sql.find("t2").unwrap());
        assert!(mid.sql.contains("t2"));
        assert!(!mid.sql.contains("t1"));
        assert!(!mid.sql.contains("t3"));
        assert_eq!(&sql[mid.offset..mid.offset + mid.sql.len()], mid.sql);

        let last = union_branch(sql, sql.len());
        assert!(last.sql.contains("t3"));
        assert!(!last.sql.contains("t2"));
    }

    #[test]
    fn no_union_keeps_whole_input() {
        let sql = "SELECT a FROM t1";
        let f = union_branch(sql, 5);
        assert_eq!(f.sql, sql);
        assert_eq!(f.offset, 0);
    }

    #[test]
    fn union_inside_block_composes_offsets() {
        let sql = "BEGIN select a from t1 union select b from t2; END";
        let pos = sql.find("t2").unwrap();
        let block = enclosing_block(sql, pos);
        let branch = union_branch(block.sql, block.rebase(pos));
        assert!(branch.sql.contains("t2"));
        assert!(!branch.sql.contains("t1"));
        // composed offsets index the original buffer
        let abs = block.offset + branch.offset;
        assert_eq!(&sql[abs..abs + branch.sql.len()], branch.sql);
    }
}
