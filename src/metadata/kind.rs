use derive_more::Display;

/// Kinds of catalog objects the completion engine can resolve against.
///
/// A closed set with exhaustive matches everywhere; lookups are filtered by
/// kind instead of downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ObjectKind {
    #[display("TABLE")]
    Table,
    #[display("VIEW")]
    View,
    #[display("PROCEDURE")]
    Procedure,
    #[display("TRIGGER")]
    Trigger,
}

impl ObjectKind {
    /// True for the kinds that own a column list (tables and views).
    pub const fn is_relation(self) -> bool {
        matches!(self, ObjectKind::Table | ObjectKind::View)
    }
}
