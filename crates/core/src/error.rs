use std::io;
use std::path::PathBuf;

/// Errors that can occur while assembling a run (config, case sets)
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error in {path}: {message}")]
    ConfigError { path: PathBuf, message: String },

    #[error("Invalid case identifier {0:?}: identifiers must contain a non-whitespace character")]
    InvalidCaseId(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for caserun operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the process-backed harness.
///
/// The driver never produces these itself; it hands them back exactly as the
/// harness returned them.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("No harness program configured")]
    MissingProgram,

    #[error("Failed to start harness program `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Harness command `{command}` failed with {}", describe_code(.code))]
    Failed { command: String, code: Option<i32> },
}

impl HarnessError {
    /// Exit code the harness program reported, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            HarnessError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
