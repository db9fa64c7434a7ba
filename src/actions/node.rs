//! Node action implementation

use crate::error::Result;
use crate::substitution::{parse_substitutions, Substitution};

/// Node action describing one managed executable to start.
#[derive(Debug, Clone)]
pub struct NodeAction {
    pub package: Vec<Substitution>,
    pub executable: Vec<Substitution>,
    pub name: Option<Vec<Substitution>>,
    pub namespace: Option<Vec<Substitution>>,
    pub output: Option<String>,
    pub parameters: Vec<Parameter>,
    pub remappings: Vec<Remapping>,
}

impl NodeAction {
    pub fn new(package: &str, executable: &str) -> Result<Self> {
        Ok(Self {
            package: parse_substitutions(package)?,
            executable: parse_substitutions(executable)?,
            name: None,
            namespace: None,
            output: None,
            parameters: Vec::new(),
            remappings: Vec::new(),
        })
    }

    pub fn name(mut self, name: &str) -> Result<Self> {
        self.name = Some(parse_substitutions(name)?);
        Ok(self)
    }

    pub fn namespace(mut self, namespace: &str) -> Result<Self> {
        self.namespace = Some(parse_substitutions(namespace)?);
        Ok(self)
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn parameter(mut self, name: &str, value: &str) -> Result<Self> {
        self.parameters.push(Parameter::new(name, value)?);
        Ok(self)
    }

    pub fn remap(mut self, from: &str, to: &str) -> Result<Self> {
        self.remappings.push(Remapping::new(from, to)?);
        Ok(self)
    }
}

/// Inline node parameter, value may contain substitutions
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub value: Vec<Substitution>,
}

impl Parameter {
    pub fn new(name: &str, value: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            value: parse_substitutions(value)?,
        })
    }
}

/// Topic/service remapping
#[derive(Debug, Clone)]
pub struct Remapping {
    pub from: Vec<Substitution>,
    pub to: Vec<Substitution>,
}

impl Remapping {
    pub fn new(from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            from: parse_substitutions(from)?,
            to: parse_substitutions(to)?,
        })
    }
}
