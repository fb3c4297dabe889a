//! Domain errors raised while scaffolding
//!
//! Everything else (I/O, YAML parsing) travels as `anyhow::Error` with context.
//! Callers that need to branch on a failure use `downcast_ref::<ScaffoldError>()`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A Codeception configuration file was found in the target directory
    #[error("Codeception is already installed in this directory ({})", .0.display())]
    AlreadyInstalled(PathBuf),

    /// An enabled module is neither built in nor a helper created in this run
    #[error("Module {0} could not be found and loaded")]
    ModuleNotFound(String),

    /// A multiple-choice question was asked without any choices
    #[error("Question \"{0}\" has no choices")]
    EmptyChoices(String),

    #[error("Invalid suite configuration: {0}")]
    InvalidSuiteConfig(String),
}
