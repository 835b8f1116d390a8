use std::sync::RwLock;

use super::*;

/// A table or view whose column list is fetched on demand.
///
/// `columns()` is `None` until a loader has supplied the list; a loaded but
/// empty list is a valid, distinct state. The lock only guards the load
/// state transition, matching the catalog's obligation to serialize its own
/// lazy loading.
#[derive(Debug)]
pub struct Relation {
    name: String,
    kind: ObjectKind,
    columns: RwLock<Option<Vec<String>>>,
}

impl Relation {
    /// An unloaded relation. `kind` must be `Table` or `View`.
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        debug_assert!(kind.is_relation());
        Self {
            name: name.into(),
            kind,
            columns: RwLock::new(None),
        }
    }

    /// A relation with its column list already present.
    pub fn with_columns(
        kind: ObjectKind,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let rel = Self::new(kind, name);
        rel.set_columns(columns);
        rel
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn is_loaded(&self) -> bool {
        self.columns.read().expect("column lock poisoned").is_some()
    }

    /// The column list, `None` until loaded.
    pub fn columns(&self) -> Option<Vec<String>> {
        self.columns.read().expect("column lock poisoned").clone()
    }

    /// Loader write path; overwriting an already loaded list is allowed and
    /// keeps loads idempotent.
    pub fn set_columns(&self, columns: impl IntoIterator<Item = impl Into<String>>) {
        let cols = columns.into_iter().map(Into::into).collect();
        *self.columns.write().expect("column lock poisoned") = Some(cols);
    }
}
