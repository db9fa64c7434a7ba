//! Condition evaluation for gated launch actions

use crate::{
    error::Result,
    substitution::{resolve_substitutions, LaunchContext, Substitution},
};

/// Condition attached to a launch action.
///
/// `If` runs the action when its expression is truthy, `Unless` when it is
/// not. An action without a condition always runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    If(Vec<Substitution>),
    Unless(Vec<Substitution>),
}

impl Condition {
    /// Evaluate the condition against the current context
    pub fn evaluate(&self, context: &LaunchContext) -> Result<bool> {
        match self {
            Condition::If(subs) => {
                let resolved = resolve_substitutions(subs, context)?;
                Ok(is_truthy(&resolved))
            }
            Condition::Unless(subs) => {
                let resolved = resolve_substitutions(subs, context)?;
                Ok(!is_truthy(&resolved))
            }
        }
    }
}

/// Evaluate whether an optionally conditioned action should run
pub fn should_run(condition: Option<&Condition>, context: &LaunchContext) -> Result<bool> {
    match condition {
        Some(cond) => cond.evaluate(context),
        None => Ok(true),
    }
}

/// Determine if a string value is "truthy"
pub(crate) fn is_truthy(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    matches!(normalized.as_str(), "true" | "1" | "yes" | "y" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::parse_substitutions;

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("true"));
        assert!(is_truthy("True"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(is_truthy("  true  "));

        assert!(!is_truthy("false"));
        assert!(!is_truthy("False"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("random"));
    }

    #[test]
    fn test_if_condition() {
        let mut context = LaunchContext::new();
        context.set_configuration("enabled".to_string(), "True".to_string());

        let cond = Condition::If(parse_substitutions("$(var enabled)").unwrap());
        assert!(cond.evaluate(&context).unwrap());

        context.set_configuration("enabled".to_string(), "False".to_string());
        assert!(!cond.evaluate(&context).unwrap());
    }

    #[test]
    fn test_unless_condition() {
        let mut context = LaunchContext::new();
        context.set_configuration("disabled".to_string(), "false".to_string());

        let cond = Condition::Unless(parse_substitutions("$(var disabled)").unwrap());
        assert!(cond.evaluate(&context).unwrap());
    }

    #[test]
    fn test_no_condition_always_runs() {
        let context = LaunchContext::new();
        assert!(should_run(None, &context).unwrap());
    }
}
