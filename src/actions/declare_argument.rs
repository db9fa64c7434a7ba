//! Declare argument action for argument metadata and defaults

use crate::error::{LaunchError, Result};
use crate::substitution::{
    parse_substitutions, resolve_substitutions, LaunchContext, Substitution,
};

/// Launch argument declaration with metadata.
///
/// An argument without a default and without a caller override stays
/// unresolved; the first substitution that references it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareArgumentAction {
    pub name: String,
    pub default: Option<Vec<Substitution>>,
    pub description: Option<String>,
    pub choices: Option<Vec<String>>,
}

impl DeclareArgumentAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            description: None,
            choices: None,
        }
    }

    pub fn default_value(mut self, default: &str) -> Result<Self> {
        self.default = Some(parse_substitutions(default)?);
        Ok(self)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn choices(mut self, choices: Vec<String>) -> Self {
        self.choices = Some(choices);
        self
    }

    /// Apply the declaration to the context.
    ///
    /// Priority: a value already present in the context (a caller override)
    /// wins; otherwise the resolved default is stored. Declared choices are
    /// checked against whichever value ends up effective.
    pub fn apply(&self, context: &mut LaunchContext) -> Result<()> {
        if !context.has_configuration(&self.name) {
            if let Some(default) = &self.default {
                let value = resolve_substitutions(default, context)?;
                context.set_configuration(self.name.clone(), value);
            }
        }

        if let Some(choices) = &self.choices {
            if let Some(value) = context.get_configuration(&self.name) {
                if !choices.contains(&value) {
                    return Err(LaunchError::InvalidChoice {
                        argument: self.name.clone(),
                        value,
                        choices: choices.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
