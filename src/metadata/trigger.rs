/// A trigger as the catalog knows it: its name and, for relation triggers,
/// the table or view it fires on. Database-level triggers carry no relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    name: String,
    relation: Option<String>,
}

impl Trigger {
    pub fn new(name: impl Into<String>, relation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relation: Some(relation.into()),
        }
    }

    pub fn without_relation(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relation: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The relation this trigger fires on, if any.
    pub fn relation_name(&self) -> Option<&str> {
        self.relation.as_deref()
    }
}
