//! Substitution values and their resolution

use crate::error::SubstitutionError;
use crate::substitution::context::LaunchContext;

/// One piece of a parsed launch value.
///
/// A launch value is a sequence of pieces; resolving the sequence
/// concatenates the resolved pieces. Configuration and environment lookups
/// carry piece sequences of their own, so substitutions nest:
/// `$(var device_$(env SPACEMOUSE_VARIANT))` resolves the inner lookup
/// first, then uses the result as part of the configuration name.
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// Literal text, passed through untouched
    Text(String),
    /// `$(var name)`: value of a declared argument or caller override
    LaunchConfiguration(Vec<Substitution>),
    /// `$(env NAME [default])`: environment lookup with optional fallback
    EnvironmentVariable {
        name: Vec<Substitution>,
        default: Option<Vec<Substitution>>,
    },
}

impl Substitution {
    /// Configuration lookup with a fixed, non-nested name
    pub fn config(name: &str) -> Self {
        Substitution::LaunchConfiguration(vec![Substitution::Text(name.to_string())])
    }

    /// Resolve this piece against the invocation's context.
    ///
    /// Nested pieces inside a lookup name resolve before the lookup itself,
    /// and an `$(env)` fallback is only resolved when the variable is
    /// actually absent.
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => {
                let name = resolve_substitutions(name, context)?;
                context
                    .get_configuration(&name)
                    .ok_or(SubstitutionError::UndefinedVariable(name))
            }
            Substitution::EnvironmentVariable { name, default } => {
                let name = resolve_substitutions(name, context)?;
                match std::env::var(&name) {
                    Ok(value) => Ok(value),
                    Err(_) => match default {
                        Some(fallback) => resolve_substitutions(fallback, context),
                        None => Err(SubstitutionError::UndefinedEnvVar(name)),
                    },
                }
            }
        }
    }
}

/// Concatenate a parsed value sequence into the concrete string the node
/// parameter (or condition, or command argument) receives
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacemouse_context() -> LaunchContext {
        let mut context = LaunchContext::new();
        context.set_configuration("operator_position_front".to_string(), "True".to_string());
        context.set_configuration("device_path".to_string(), "/dev/hidraw3".to_string());
        context
    }

    #[test]
    fn test_literal_text_passes_through() {
        let piece = Substitution::Text("screen".to_string());
        assert_eq!(piece.resolve(&LaunchContext::new()).unwrap(), "screen");
    }

    #[test]
    fn test_configuration_lookup() {
        let piece = Substitution::config("operator_position_front");
        assert_eq!(piece.resolve(&spacemouse_context()).unwrap(), "True");
    }

    #[test]
    fn test_unknown_configuration_is_an_error() {
        let piece = Substitution::config("device_path");
        let err = piece.resolve(&LaunchContext::new()).unwrap_err();
        assert!(matches!(err, SubstitutionError::UndefinedVariable(name) if name == "device_path"));
    }

    #[test]
    fn test_sequence_concatenates() {
        let value = vec![
            Substitution::Text("path=".to_string()),
            Substitution::config("device_path"),
        ];
        assert_eq!(
            resolve_substitutions(&value, &spacemouse_context()).unwrap(),
            "path=/dev/hidraw3"
        );
    }

    #[test]
    fn test_nested_lookup_resolves_inner_name_first() {
        std::env::set_var("SPACEMOUSE_VARIANT", "path");
        let piece = Substitution::LaunchConfiguration(vec![
            Substitution::Text("device_".to_string()),
            Substitution::EnvironmentVariable {
                name: vec![Substitution::Text("SPACEMOUSE_VARIANT".to_string())],
                default: None,
            },
        ]);
        assert_eq!(piece.resolve(&spacemouse_context()).unwrap(), "/dev/hidraw3");
    }

    #[test]
    fn test_env_fallback_used_only_when_unset() {
        let piece = Substitution::EnvironmentVariable {
            name: vec![Substitution::Text("SPACEMOUSE_UNSET_DEVICE".to_string())],
            default: Some(vec![Substitution::config("device_path")]),
        };
        assert_eq!(piece.resolve(&spacemouse_context()).unwrap(), "/dev/hidraw3");
    }

    #[test]
    fn test_env_without_fallback_errors_when_unset() {
        let piece = Substitution::EnvironmentVariable {
            name: vec![Substitution::Text("SPACEMOUSE_UNSET_DEVICE".to_string())],
            default: None,
        };
        assert!(piece.resolve(&LaunchContext::new()).is_err());
    }
}
