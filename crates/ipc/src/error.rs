//! Errors from decoding and encoding canvas messages.

/// Errors that can occur while handling wire messages or session scripts.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Malformed message JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session script must be a JSON array, found {found}")]
    ScriptNotArray { found: &'static str },
}
