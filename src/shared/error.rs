use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a broken scenario definition apart
/// from a bad invocation or a failed resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// A configuration value or scenario definition was rejected
    InvalidConfiguration = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (resolution failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error surfaced from the application layer
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ResolverError>() {
            Some(ResolverError::InvalidConfiguration { .. })
            | Some(ResolverError::UnknownConfiguration { .. }) => ExitCode::InvalidConfiguration,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidConfiguration => write!(f, "Invalid Configuration (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while resolving dependencies or validating scenarios.
///
/// Uses thiserror to derive Display and Error traits automatically.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Unknown configuration name provided: {name}\n\n💡 Hint: Request one of the standard dependency configurations (e.g. runtimeClasspath, compileClasspath)")]
    UnknownConfiguration { name: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Dependency resolution logic is broken. Unable to get scope for dependency: {dependency}")]
    ResolutionInvariant { dependency: String },

    #[error("Could not resolve artifact: {coordinates}\n\n💡 Hint: Make sure the build snapshot contains the requested module")]
    UnresolvedArtifact { coordinates: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to parse build snapshot: {path}\nDetails: {details}\n\n💡 Hint: The snapshot must be JSON exported from the build")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Failed to parse fraction catalog: {path}\nDetails: {details}\n\n💡 Hint: Each [[fraction]] entry needs group_id and artifact_id")]
    CatalogParseError { path: PathBuf, details: String },
}

impl ResolverError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ResolverError::InvalidConfiguration {
            message: message.into(),
        }
    }
}
