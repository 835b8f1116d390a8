use std::sync::RwLock;

use derive_more::Display;

/// Direction of a stored-procedure parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ParamDirection {
    #[display("IN")]
    Input,
    #[display("OUT")]
    Output,
}

/// A stored-procedure parameter. Completion only suggests the
/// output-direction ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub direction: ParamDirection,
}

impl Parameter {
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: ParamDirection::Input,
        }
    }

    pub fn output(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: ParamDirection::Output,
        }
    }
}

/// A stored procedure whose parameter list is fetched on demand, mirroring
/// [`Relation`](super::Relation)'s load-state handling.
#[derive(Debug)]
pub struct Procedure {
    name: String,
    params: RwLock<Option<Vec<Parameter>>>,
}

impl Procedure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: RwLock::new(None),
        }
    }

    pub fn with_params(name: impl Into<String>, params: impl IntoIterator<Item = Parameter>) -> Self {
        let proc = Self::new(name);
        proc.set_params(params);
        proc
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.params.read().expect("param lock poisoned").is_some()
    }

    /// The parameter list, `None` until loaded.
    pub fn parameters(&self) -> Option<Vec<Parameter>> {
        self.params.read().expect("param lock poisoned").clone()
    }

    pub fn set_params(&self, params: impl IntoIterator<Item = Parameter>) {
        *self.params.write().expect("param lock poisoned") = Some(params.into_iter().collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(ParamDirection::Input.to_string(), "IN");
        assert_eq!(ParamDirection::Output.to_string(), "OUT");
    }

    #[test]
    fn lazy_parameter_list() {
        let p = Procedure::new("GET_EMP");
        assert!(!p.is_loaded());
        p.set_params([Parameter::input("ID"), Parameter::output("NAME")]);
        let params = p.parameters().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[1].direction, ParamDirection::Output);
    }
}
