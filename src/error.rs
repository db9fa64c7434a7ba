//! Error types for spacemouse_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Invalid substitution syntax: {0}")]
    InvalidSubstitution(String),

    #[error("Argument '{argument}' resolved to '{value}', which is not one of the declared choices: {choices:?}")]
    InvalidChoice {
        argument: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("Record generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl From<SubstitutionError> for LaunchError {
    fn from(err: SubstitutionError) -> Self {
        LaunchError::InvalidSubstitution(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum SubstitutionError {
    #[error("Undefined launch configuration: '{0}'. Did you forget to declare the argument or pass an override?")]
    UndefinedVariable(String),

    #[error(
        "Undefined environment variable: '{0}'. Make sure the variable is set in your environment."
    )]
    UndefinedEnvVar(String),

    #[error("Invalid substitution: {0}")]
    InvalidSubstitution(String),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
