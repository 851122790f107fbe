//! Error types for glossary submissions.

use thiserror::Error;

use crate::model::entry::Field;

/// Why a submission ended without navigating.
///
/// The `Display` text is what the user gets to see.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// A form element the flow depends on does not exist.
    #[error("Internal error: input element \"{element}\" not found.")]
    ReferenceMissing { element: &'static str },

    /// A field has no value at all (an empty string still counts as a value).
    #[error("Please enter a {}!", .0.label())]
    ValidationMissing(Field),

    /// Another submission is still waiting for its response.
    #[error("A submission is already in progress.")]
    AlreadyPending,

    /// The save endpoint reported a duplicate term.
    #[error("There is already an entry for the term \"{term}\".")]
    Conflict { term: String },

    /// Any other non-success status.
    #[error("Server error (code {status}{})", reason_suffix(.reason))]
    ServerRejected {
        status: u16,
        reason: Option<String>,
    },

    /// The request never completed.
    #[error("Error while saving: {0}")]
    Network(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(" {r}"),
        None => String::new(),
    }
}

impl SubmitError {
    /// Stable tag used by the command protocol.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::ReferenceMissing { .. } => "reference_missing",
            SubmitError::ValidationMissing(_) => "validation_missing",
            SubmitError::AlreadyPending => "already_pending",
            SubmitError::Conflict { .. } => "conflict",
            SubmitError::ServerRejected { .. } => "server_rejected",
            SubmitError::Network(_) => "network",
        }
    }
}

impl From<TransportError> for SubmitError {
    fn from(e: TransportError) -> Self {
        SubmitError::Network(e.to_string())
    }
}

/// Failures below the HTTP status level.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Problems while loading the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {var}: {value}")]
    InvalidOverride { var: &'static str, value: String },
}
