//! Error taxonomy shared by the pipeline and the CLI.

use thiserror::Error;

use crate::completion::GenerationFailure;
use crate::prompt::PromptError;

#[derive(Debug, Error)]
pub enum EsqlError {
    /// Missing credential, unknown provider, unreadable config file.
    #[error("{0}")]
    Configuration(String),

    /// Input the user can fix and resubmit.
    #[error("{0}")]
    Validation(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationFailure),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl EsqlError {
    /// Process exit code for this error (sysexits conventions).
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Configuration(_) => exitcode::CONFIG,
            Self::Validation(_) => exitcode::DATAERR,
            Self::Generation(_) => exitcode::UNAVAILABLE,
            Self::Prompt(_) => exitcode::SOFTWARE,
        }
    }
}

/// Maps any error bubbling out of a command to an exit code.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    if let Some(esql) = err.downcast_ref::<EsqlError>() {
        return esql.exit_code();
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return exitcode::IOERR;
    }
    exitcode::SOFTWARE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::FailureKind;

    #[test]
    fn test_exit_codes_per_variant() {
        assert_eq!(
            EsqlError::Configuration("x".into()).exit_code(),
            exitcode::CONFIG
        );
        assert_eq!(
            EsqlError::Validation("x".into()).exit_code(),
            exitcode::DATAERR
        );
        let failure = GenerationFailure::new(FailureKind::Transport, "connection refused");
        assert_eq!(
            EsqlError::from(failure).exit_code(),
            exitcode::UNAVAILABLE
        );
    }

    #[test]
    fn test_generation_message_keeps_cause() {
        let failure = GenerationFailure::new(FailureKind::Authentication, "API key not valid");
        let message = EsqlError::from(failure).to_string();
        assert!(message.starts_with("Generation failed:"));
        assert!(message.contains("API key not valid"));
    }

    #[test]
    fn test_exit_code_for_anyhow() {
        let err = anyhow::Error::new(EsqlError::Validation("blank".into()));
        assert_eq!(exit_code_for(&err), exitcode::DATAERR);

        let err = anyhow::Error::new(std::io::Error::other("disk full"));
        assert_eq!(exit_code_for(&err), exitcode::IOERR);

        assert_eq!(exit_code_for(&anyhow::anyhow!("other")), exitcode::SOFTWARE);
    }
}
