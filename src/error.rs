//! Error type shared by the page features.
//!
//! Nothing here ever reaches the visitor: features convert these into log
//! records or, for the clipboard, into a fallback toast.

/// Failure reported by the page platform or the config loader.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No preference store exists for this origin (private mode, sandboxed frame).
    #[error("preference store unavailable")]
    StorageUnavailable,
    /// The preference store exists but rejected a read or write.
    #[error("preference store error: {0}")]
    Storage(String),
    /// The clipboard API is missing, usually outside a secure context.
    #[error("clipboard unavailable")]
    ClipboardUnavailable,
    /// The clipboard write was denied or rejected.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// The embedded config document is not valid.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}
