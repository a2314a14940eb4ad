//! Error types for the dragboard-protocol crate.
//!
//! The store and the validator are total, so the only fallible operations
//! are the parsers used at the edges (drag payloads, status names).

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A drag payload did not contain a project identifier.
    #[error("invalid project id {payload:?}: {source}")]
    InvalidProjectId {
        /// The payload as received.
        payload: String,
        /// The underlying parse error.
        #[source]
        source: uuid::Error,
    },

    /// A status name was not recognized.
    #[error("unknown project status: {0:?}")]
    UnknownStatus(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::UnknownStatus("archived".to_string());
        assert_eq!(err.to_string(), r#"unknown project status: "archived""#);
    }
}
