use thiserror::Error;

use crate::SessionId;

/// Errors raised by session stores.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The identifier is syntactically not a session id.
    #[error("invalid session id '{value}'")]
    InvalidSessionId { value: String },

    /// No session exists under this identifier (never created, or expired
    /// along with its storage).
    #[error("unknown session {id}")]
    UnknownSession { id: SessionId },

    /// The selection step has not attached a column pair yet.
    #[error("no columns chosen for session {id}")]
    ColumnsNotChosen { id: SessionId },

    /// Persisted table could not be read back.
    #[error(transparent)]
    Ingest(#[from] refsift_ingest::IngestError),

    /// Table could not be persisted.
    #[error(transparent)]
    Output(#[from] refsift_output::OutputError),

    /// Underlying storage I/O failed.
    #[error("session storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
