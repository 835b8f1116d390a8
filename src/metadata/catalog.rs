use super::*;
use crate::Result;

/// The narrow metadata surface the completion resolver consumes.
///
/// Name comparison is case-insensitive: the alias scanner canonicalizes
/// references through `Identifier`, and catalogs store canonical names.
///
/// The two `load_*` operations are the only potentially blocking points in a
/// resolution; they must be idempotent (loading an already loaded object is
/// a no-op) and are gated by configuration before the resolver calls them.
pub trait Catalog {
    /// Find a table or view by kind and name. `kind` must be one of the
    /// relation kinds; implementations return `None` for anything else.
    fn find_relation(&self, kind: ObjectKind, name: &str) -> Option<&Relation>;

    fn find_procedure(&self, name: &str) -> Option<&Procedure>;

    fn find_trigger(&self, name: &str) -> Option<&Trigger>;

    /// Fetch the relation's column list if it is not present yet. Failures
    /// here are real errors (the backing source could not be read) and
    /// propagate to the resolver's caller.
    fn load_relation_columns(&self, relation: &Relation) -> Result<()>;

    /// Fetch the procedure's parameter list if it is not present yet.
    fn load_procedure_params(&self, procedure: &Procedure) -> Result<()>;
}
