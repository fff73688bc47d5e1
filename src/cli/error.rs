//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// Exit code for every reported failure.
pub const EXIT_FAILURE: i32 = 1;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::from(e))
    }
}

impl From<clap::Error> for CliError {
    /// Keep the first line of clap's rendered message, without its `error:` prefix.
    fn from(e: clap::Error) -> Self {
        let rendered = e.render().to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let message = first.strip_prefix("error: ").unwrap_or(first);
        CliError::InvalidArgs(message.trim().to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the exit code for this error. All failures are terminal and share one code.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use clap::Parser;

    #[test]
    fn given_invalid_order_when_converting_parse_error_then_invalid_args() {
        let err = Cli::try_parse_from(["replace", "x", "--order", "bogus"]).unwrap_err();

        let cli_err = CliError::from(err);

        match &cli_err {
            CliError::InvalidArgs(message) => {
                assert!(message.contains("bogus"), "{message}");
                assert!(!message.starts_with("error:"), "{message}");
            }
            other => panic!("expected invalid args, got {other:?}"),
        }
        assert_eq!(cli_err.exit_code(), EXIT_FAILURE);
        assert!(cli_err.to_string().starts_with("invalid arguments: "));
    }
}
