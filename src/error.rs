//! Error types for the filter_drive crate.

use thiserror::Error;

/// The capability call a provider error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderOp {
    ListChildren,
    CreateFolder,
    CopyEntry,
    SharePublic,
}

impl std::fmt::Display for ProviderOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProviderOp::ListChildren => "files.list",
            ProviderOp::CreateFolder => "files.create",
            ProviderOp::CopyEntry => "files.copy",
            ProviderOp::SharePublic => "permissions.create",
        };
        f.write_str(name)
    }
}

/// Coarse classification of a [`FilterError`], mirroring the
/// client-error / auth-error / server-error split a fronting surface
/// would map to 4xx vs 5xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad request input; no provider call was made.
    Input,
    /// No usable credential; the failing provider call never proceeded.
    Auth,
    /// A provider call failed; the run aborted, copies already made remain.
    Provider,
}

/// Errors that can occur while filtering a Drive folder.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid Drive folder link or ID: {0}")]
    InvalidFolderRef(String),

    #[error("wanted list is empty")]
    EmptyWantedList,

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("failed to read credentials file: {0}")]
    CredentialsFile(#[from] std::io::Error),

    #[error("failed to parse credentials JSON: {0}")]
    CredentialsParse(#[from] serde_json::Error),

    #[error("JWT encoding error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("token refresh failed: {0}")]
    TokenRefresh(String),

    #[error("{op} request failed: {source}")]
    Transport {
        op: ProviderOp,
        #[source]
        source: reqwest::Error,
    },

    #[error("{op} failed ({status}): {message}")]
    Api {
        op: ProviderOp,
        status: u16,
        message: String,
    },
}

impl FilterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilterError::InvalidFolderRef(_) | FilterError::EmptyWantedList => ErrorKind::Input,
            FilterError::Auth(_)
            | FilterError::CredentialsFile(_)
            | FilterError::CredentialsParse(_)
            | FilterError::Jwt(_)
            | FilterError::TokenRefresh(_) => ErrorKind::Auth,
            FilterError::Transport { .. } | FilterError::Api { .. } => ErrorKind::Provider,
        }
    }

    /// The capability call behind a provider error, if any.
    pub fn provider_op(&self) -> Option<ProviderOp> {
        match self {
            FilterError::Transport { op, .. } | FilterError::Api { op, .. } => Some(*op),
            _ => None,
        }
    }
}

/// Result type alias for FilterError.
pub type Result<T> = std::result::Result<T, FilterError>;
