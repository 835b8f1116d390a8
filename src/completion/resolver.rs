//! End-to-end resolution of a typed alias to suggestion names.

use itertools::Itertools;
use tracing::debug;

use crate::completion::{
    aliases::{AliasMap, scan_aliases},
    narrow::{enclosing_block, union_branch},
    trigger::{alter_trigger_relation, create_trigger_relation},
};
use crate::config::Config;
use crate::error::Result;
use crate::metadata::{Catalog, ObjectKind, ParamDirection, Procedure, Relation};
use crate::sql::{Identifier, statement_at};

/// Upper-cased, sorted, deduplicated suggestion names.
fn present(names: impl IntoIterator<Item = String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.to_ascii_uppercase())
        .sorted()
        .dedup()
        .collect()
}

/// Resolves an alias typed at a cursor position to the columns (or procedure
/// output parameters) of the object it names.
///
/// Resolution narrows the buffer in stages before scanning for references:
/// statement, enclosing procedural block, `UNION` branch. Only the fragment
/// the cursor sits in contributes candidates, so the same alias bound to
/// different objects in sibling statements or branches never bleeds through.
pub struct Resolver<'a> {
    catalog: &'a dyn Catalog,
    config: &'a Config,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a dyn Catalog, config: &'a Config) -> Self {
        Self { catalog, config }
    }

    /// Suggestion names for `alias` typed at byte offset `position` of
    /// `buffer`. Returns an empty list when nothing resolves; errors only
    /// when the catalog fails to load metadata it was asked for.
    pub fn object_columns(&self, buffer: &str, alias: &str, position: usize) -> Result<Vec<String>> {
        let Some(statement) = statement_at(buffer, position) else {
            return Ok(Vec::new());
        };
        let names = self.columns_for_object(statement.sql, alias, statement.rebase(position))?;
        debug!(alias, count = names.len(), "resolved alias");
        Ok(names)
    }

    /// Same as [`object_columns`](Self::object_columns), joined with single
    /// spaces for consumers that take one suggestion string.
    pub fn object_columns_joined(&self, buffer: &str, alias: &str, position: usize) -> Result<String> {
        Ok(self.object_columns(buffer, alias, position)?.iter().join(" "))
    }

    /// Resolve `alias` within a single already-isolated statement. Block and
    /// union narrowing still happen here; callers with a multi-statement
    /// buffer want [`object_columns`](Self::object_columns) instead.
    pub fn columns_for_object(&self, sql: &str, alias: &str, cursor: usize) -> Result<Vec<String>> {
        if alias.eq_ignore_ascii_case("OLD") || alias.eq_ignore_ascii_case("NEW") {
            return match create_trigger_relation(sql, self.catalog)
                .or_else(|| alter_trigger_relation(sql, self.catalog))
            {
                Some(relation) => self.relation_columns(relation),
                None => Ok(Vec::new()),
            };
        }

        let block = enclosing_block(sql, cursor);
        let branch = union_branch(block.sql, block.rebase(cursor));
        let aliases = scan_aliases(branch.sql);

        if let Some(relation) = self.find_relation(&aliases, alias) {
            return self.relation_columns(relation);
        }
        if let Some(procedure) = self.find_procedure(&aliases, alias) {
            return self.procedure_output_params(procedure);
        }
        debug!(alias, "alias did not resolve to any catalog object");
        Ok(Vec::new())
    }

    /// Alias candidates in binding order, then the alias itself as a full
    /// object name; tables before views.
    fn find_relation(&self, aliases: &AliasMap, alias: &str) -> Option<&'a Relation> {
        for kind in [ObjectKind::Table, ObjectKind::View] {
            for name in aliases.candidates(alias) {
                if let Some(relation) = self.catalog.find_relation(kind, name) {
                    return Some(relation);
                }
            }
            let full = Identifier::from_sql(alias);
            if let Some(relation) = self.catalog.find_relation(kind, full.as_str()) {
                return Some(relation);
            }
        }
        None
    }

    fn find_procedure(&self, aliases: &AliasMap, alias: &str) -> Option<&'a Procedure> {
        for name in aliases.candidates(alias) {
            if let Some(procedure) = self.catalog.find_procedure(name) {
                return Some(procedure);
            }
        }
        let full = Identifier::from_sql(alias);
        self.catalog.find_procedure(full.as_str())
    }

    fn relation_columns(&self, relation: &Relation) -> Result<Vec<String>> {
        if !relation.is_loaded() {
            if !self.config.autocomplete_load_columns {
                debug!(relation = relation.name(), "column loading disabled");
                return Ok(Vec::new());
            }
            self.catalog.load_relation_columns(relation)?;
        }
        Ok(present(relation.columns().unwrap_or_default()))
    }

    fn procedure_output_params(&self, procedure: &Procedure) -> Result<Vec<String>> {
        if !procedure.is_loaded() {
            if !self.config.autocomplete_load_columns {
                debug!(procedure = procedure.name(), "parameter loading disabled");
                return Ok(Vec::new());
            }
            self.catalog.load_procedure_params(procedure)?;
        }
        let outputs = procedure
            .parameters()
            .unwrap_or_default()
            .into_iter()
            .filter(|p| p.direction == ParamDirection::Output)
            .map(|p| p.name);
        Ok(present(outputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{init, rstest, sample_catalog};

    fn resolve(buffer: &str, alias: &str, position: usize) -> Vec<String> {
        init();
        let catalog = sample_catalog();
        let config = Config::default();
        Resolver::new(&catalog, &config)
            .object_columns(buffer, alias, position)
            .expect("resolution")
    }

    #[rstest]
    #[case::implicit_alias("SELECT  FROM customers", "customers", 7)]
    #[case::explicit_alias("SELECT  FROM customers c", "c", 7)]
    #[case::as_alias("SELECT  FROM customers AS c", "c", 7)]
    #[case::full_name_despite_alias("SELECT  FROM customers c", "customers", 7)]
    fn alias_forms_resolve_customer_columns(
        #[case] sql: &str,
        #[case] alias: &str,
        #[case] pos: usize,
    ) {
        assert_eq!(resolve(sql, alias, pos), ["CITY", "ID", "NAME"]);
    }

    #[test]
    fn results_are_sorted_upper_cased_and_deduplicated() {
        init();
        let mut catalog = sample_catalog();
        catalog.add_table("messy", ["zeta", "Alpha", "alpha"]);
        let config = Config::default();
        let resolver = Resolver::new(&catalog, &config);
        let cols = resolver
            .object_columns("SELECT  FROM messy m", "m", 7)
            .expect("resolution");
        assert_eq!(cols, ["ALPHA", "ZETA"]);
    }

    #[test]
    fn resolution_is_idempotent() {
        init();
        let catalog = sample_catalog();
        let config = Config::default();
        let resolver = Resolver::new(&catalog, &config);
        let sql = "SELECT  FROM employees e";
        let first = resolver.object_columns(sql, "e", 7).expect("first");
        let second = resolver.object_columns(sql, "e", 7).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn statement_isolation_between_semicolons() {
        let buffer = "UPDATE employees e SET x = 1; SELECT  FROM departments d";
        // cursor in the second statement: only d binds there
        let pos = buffer.find("FROM").unwrap() - 2;
        assert_eq!(resolve(buffer, "d", pos), ["DEPT_NAME", "DEPT_NO"]);
        assert!(resolve(buffer, "e", pos).is_empty());
    }

    #[test]
    fn union_branch_isolation() {
        let buffer = "SELECT a FROM employees e UNION SELECT b FROM departments e";
        let pos = buffer.rfind("b ").unwrap();
        assert_eq!(resolve(buffer, "e", pos), ["DEPT_NAME", "DEPT_NO"]);
        let pos = buffer.find("a ").unwrap();
        assert_eq!(resolve(buffer, "e", pos), ["EMP_NO", "FIRST_NAME", "LAST_NAME"]);
    }

    #[test]
    fn block_isolation_inside_trigger_body() {
        let buffer = "CREATE TRIGGER trg FOR employees ACTIVE AS BEGIN \
                      UPDATE departments d SET d.x = 1; END";
        let pos = buffer.find("SET").unwrap();
        assert_eq!(resolve(buffer, "d", pos), ["DEPT_NAME", "DEPT_NO"]);
    }

    #[rstest]
    #[case("OLD")]
    #[case("new")]
    #[case("New")]
    fn trigger_pseudo_aliases_resolve_to_trigger_relation(#[case] alias: &str) {
        let buffer = "CREATE TRIGGER trg FOR employees ACTIVE BEFORE UPDATE AS BEGIN \
                      UPDATE departments d SET d.x = 1; END";
        let pos = buffer.find("SET").unwrap();
        // pseudo-alias wins over every query-scope binding
        assert_eq!(resolve(buffer, alias, pos), ["EMP_NO", "FIRST_NAME", "LAST_NAME"]);
    }

    #[test]
    fn alter_trigger_pseudo_alias_uses_catalog() {
        let buffer = "ALTER TRIGGER trg_emp_audit AS BEGIN SELECT 1; END";
        let pos = buffer.find("SELECT").unwrap();
        assert_eq!(resolve(buffer, "OLD", pos), ["EMP_NO", "FIRST_NAME", "LAST_NAME"]);
    }

    #[test]
    fn pseudo_alias_without_trigger_context_is_empty() {
        assert!(resolve("SELECT  FROM employees e", "OLD", 7).is_empty());
    }

    #[test]
    fn procedure_resolves_to_output_parameters_only() {
        let buffer = "SELECT  FROM get_totals t";
        assert_eq!(resolve(buffer, "t", 7), ["TOTAL_COUNT", "TOTAL_SUM"]);
    }

    #[test]
    fn unknown_alias_is_empty_not_error() {
        assert!(resolve("SELECT  FROM employees e", "zz", 7).is_empty());
    }

    #[test]
    fn empty_buffer_is_empty() {
        assert!(resolve("", "e", 0).is_empty());
    }

    #[test]
    fn loading_gate_returns_empty_for_unloaded_relation() {
        init();
        let catalog = sample_catalog();
        let config = Config {
            autocomplete_load_columns: false,
        };
        let resolver = Resolver::new(&catalog, &config);
        let cols = resolver
            .object_columns("SELECT  FROM employees e", "e", 7)
            .expect("gated resolution");
        assert!(cols.is_empty());
    }

    #[test]
    fn loading_gate_still_serves_already_loaded_relations() {
        init();
        let mut catalog = sample_catalog();
        catalog.add_loaded_table("cached", ["a", "b"]);
        let config = Config {
            autocomplete_load_columns: false,
        };
        let resolver = Resolver::new(&catalog, &config);
        let cols = resolver
            .object_columns("SELECT  FROM cached c", "c", 7)
            .expect("cached resolution");
        assert_eq!(cols, ["A", "B"]);
    }

    #[test]
    fn load_failure_propagates() {
        init();
        let mut catalog = sample_catalog();
        catalog.add_unloadable_table("broken");
        let config = Config::default();
        let resolver = Resolver::new(&catalog, &config);
        assert!(
            resolver
                .object_columns("SELECT  FROM broken b", "b", 7)
                .is_err()
        );
    }

    #[test]
    fn first_binding_wins_within_a_fragment() {
        let buffer = "SELECT  FROM employees t, departments t";
        assert_eq!(resolve(buffer, "t", 7), ["EMP_NO", "FIRST_NAME", "LAST_NAME"]);
    }

    #[test]
    fn quoted_relation_name_resolves_exactly() {
        init();
        let mut catalog = sample_catalog();
        catalog.add_table("Mixed Case", ["one"]);
        let config = Config::default();
        let resolver = Resolver::new(&catalog, &config);
        let cols = resolver
            .object_columns("SELECT  FROM \"Mixed Case\" m", "m", 7)
            .expect("quoted resolution");
        assert_eq!(cols, ["ONE"]);
    }

    #[test]
    fn joined_output_is_space_separated() {
        init();
        let catalog = sample_catalog();
        let config = Config::default();
        let resolver = Resolver::new(&catalog, &config);
        let joined = resolver
            .object_columns_joined("SELECT  FROM departments d", "d", 7)
            .expect("joined resolution");
        assert_eq!(joined, "DEPT_NAME DEPT_NO");
    }

    #[test]
    fn nested_block_and_union_compose() {
        let buffer = "SELECT 1 FROM x; CREATE TRIGGER t FOR employees AS BEGIN \
                      SELECT a FROM departments d UNION SELECT b FROM customers c; END";
        let pos = buffer.rfind("b ").unwrap();
        assert_eq!(resolve(buffer, "c", pos), ["CITY", "ID", "NAME"]);
        assert!(resolve(buffer, "d", pos).is_empty());
    }
}
