use std::fmt;
use std::io;

use thiserror::Error;

/// Which set of required fields a validation pass checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupScope {
    /// GitHub coordinates only (endpoint, owner, repository, token).
    GitHub,
    /// GitHub coordinates plus hook endpoint, secret and events.
    Hook,
}

impl fmt::Display for SetupScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupScope::GitHub => f.write_str("github"),
            SetupScope::Hook => f.write_str("hook"),
        }
    }
}

/// Library-wide error type for webhookup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Only one of owner/repository was supplied.
    #[error("if providing an owner or repo, you must provide both")]
    OwnerRepositoryMismatch,

    /// No readable git configuration for the working directory.
    #[error("unable to read git config: {0}")]
    GitConfigUnavailable(String),

    /// The repository has no `origin` remote.
    #[error("unable to read git config: no url configured for remote 'origin'")]
    OriginRemoteMissing,

    /// The `origin` URL does not name an owner/repository pair.
    #[error("unable to infer owner/repo from origin url '{0}'")]
    UnrecognizedRemoteUrl(String),

    /// Required fields are missing for the requested operation.
    #[error("incomplete {scope} setup received:\n{received}")]
    IncompleteSetup { scope: SetupScope, received: String },

    /// GitHub answered with a non-success status.
    #[error("[github error]: {message}")]
    GitHubApi { message: String, status: Option<u16> },

    /// The request never produced a response.
    #[error("GitHub request failed: {0}")]
    HttpTransport(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    /// Whether this error stems from user input or local configuration.
    ///
    /// Input errors are reported plainly; everything else is reported as a failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::OwnerRepositoryMismatch
                | AppError::GitConfigUnavailable(_)
                | AppError::OriginRemoteMissing
                | AppError::UnrecognizedRemoteUrl(_)
                | AppError::IncompleteSetup { .. }
        )
    }

    /// HTTP status reported by GitHub, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::GitHubApi { status, .. } => *status,
            _ => None,
        }
    }
}
