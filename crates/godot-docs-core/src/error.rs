//! Error types for the Godot documentation bridge

use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Bridge error types
#[derive(Debug, Error)]
pub enum DocsError {
    /// No open connection to the editor
    #[error(
        "Not connected to Godot. Please ensure Godot Editor is running with the plugin enabled."
    )]
    NotConnected,

    /// Connection attempt failed
    #[error("Connect failed: {0}")]
    ConnectError(String),

    /// Socket-level failure on an established connection
    #[error("Socket error: {0}")]
    SocketError(String),

    /// Editor replied with an error
    #[error("{0}")]
    RemoteError(String),

    /// No reply within the per-call window
    #[error("Request timeout")]
    Timeout,

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Tool name not in the supported set
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Prompt name not in the supported set
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),
}

impl From<serde_json::Error> for DocsError {
    fn from(err: serde_json::Error) -> Self {
        DocsError::SerializationError(err.to_string())
    }
}
