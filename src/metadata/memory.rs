use std::collections::HashMap;

use super::*;
use crate::{Error, Result};

/// In-memory [`Catalog`] with deferred column / parameter stores.
///
/// Objects added through `add_table` / `add_view` / `add_procedure` start
/// unloaded; their lists sit in a deferred store until the resolver asks for
/// a load, which makes the lazy-load path and the configuration gate
/// observable without a live data source. The `add_loaded_*` variants skip
/// the deferred store entirely.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    relations: Vec<Relation>,
    procedures: Vec<Procedure>,
    triggers: Vec<Trigger>,
    deferred_columns: HashMap<String, Vec<String>>,
    deferred_params: HashMap<String, Vec<Parameter>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(
        &mut self,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.add_relation(ObjectKind::Table, name, columns);
    }

    pub fn add_view(
        &mut self,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.add_relation(ObjectKind::View, name, columns);
    }

    fn add_relation(
        &mut self,
        kind: ObjectKind,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) {
        let name = name.into();
        self.deferred_columns.insert(
            name.clone(),
            columns.into_iter().map(Into::into).collect(),
        );
        self.relations.push(Relation::new(kind, name));
    }

    /// A relation whose columns are present from the start (no lazy load).
    pub fn add_loaded_table(
        &mut self,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.relations
            .push(Relation::with_columns(ObjectKind::Table, name, columns));
    }

    /// A relation with no backing column source; loading it fails. Used to
    /// exercise the I/O-failure path.
    pub fn add_unloadable_table(&mut self, name: impl Into<String>) {
        self.relations.push(Relation::new(ObjectKind::Table, name));
    }

    pub fn add_procedure(
        &mut self,
        name: impl Into<String>,
        params: impl IntoIterator<Item = Parameter>,
    ) {
        let name = name.into();
        self.deferred_params
            .insert(name.clone(), params.into_iter().collect());
        self.procedures.push(Procedure::new(name));
    }

    pub fn add_trigger(&mut self, name: impl Into<String>, relation: impl Into<String>) {
        self.triggers.push(Trigger::new(name, relation));
    }
}

impl Catalog for MemoryCatalog {
    fn find_relation(&self, kind: ObjectKind, name: &str) -> Option<&Relation> {
        if !kind.is_relation() {
            return None;
        }
        self.relations
            .iter()
            .find(|r| r.kind() == kind && r.name().eq_ignore_ascii_case(name))
    }

    fn find_procedure(&self, name: &str) -> Option<&Procedure> {
        self.procedures
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    fn find_trigger(&self, name: &str) -> Option<&Trigger> {
        self.triggers
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    fn load_relation_columns(&self, relation: &Relation) -> Result<()> {
        if relation.is_loaded() {
            return Ok(());
        }
        let columns = self.deferred_columns.get(relation.name()).ok_or_else(|| {
            Error::Metadata(format!("no column source for relation {}", relation.name()))
        })?;
        relation.set_columns(columns.iter().cloned());
        Ok(())
    }

    fn load_procedure_params(&self, procedure: &Procedure) -> Result<()> {
        if procedure.is_loaded() {
            return Ok(());
        }
        let params = self.deferred_params.get(procedure.name()).ok_or_else(|| {
            Error::Metadata(format!(
                "no parameter source for procedure {}",
                procedure.name()
            ))
        })?;
        procedure.set_params(params.iter().cloned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_and_kind_filtered() {
        let mut cat = MemoryCatalog::new();
        cat.add_table("EMPLOYEES", ["ID"]);
        cat.add_view("V_EMP", ["ID"]);
        assert!(cat.find_relation(ObjectKind::Table, "employees").is_some());
        assert!(cat.find_relation(ObjectKind::View, "employees").is_none());
        assert!(cat.find_relation(ObjectKind::View, "v_emp").is_some());
        assert!(cat.find_relation(ObjectKind::Procedure, "employees").is_none());
    }

    #[test]
    fn lazy_load_moves_deferred_columns() {
        let mut cat = MemoryCatalog::new();
        cat.add_table("T", ["A", "B"]);
        let rel = cat.find_relation(ObjectKind::Table, "T").unwrap();
        assert!(!rel.is_loaded());
        cat.load_relation_columns(rel).unwrap();
        assert_eq!(rel.columns(), Some(vec!["A".to_string(), "B".to_string()]));
        // idempotent
        cat.load_relation_columns(rel).unwrap();
        assert!(rel.is_loaded());
    }

    #[test]
    fn load_without_source_is_an_error() {
        let mut cat = MemoryCatalog::new();
        cat.add_unloadable_table("GHOST");
        let rel = cat.find_relation(ObjectKind::Table, "GHOST").unwrap();
        let err = cat.load_relation_columns(rel).unwrap_err();
        assert!(matches!(err, Error::Metadata(_)));
    }

    #[test]
    fn procedure_lazy_load() {
        let mut cat = MemoryCatalog::new();
        cat.add_procedure("P", [Parameter::input("A"), Parameter::output("B")]);
        let proc = cat.find_procedure("p").unwrap();
        assert!(!proc.is_loaded());
        cat.load_procedure_params(proc).unwrap();
        assert_eq!(proc.parameters().unwrap().len(), 2);
    }
}
