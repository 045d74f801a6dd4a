//! Crate-level error enum for the three backend flows.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
///
/// Each variant carries enough context to render the user-facing message
/// without needing to inspect the originating error directly. The `Display`
/// text is the message the surface shows, so the wording here is part of the
/// UI contract: a failed query renders as `Error: {this}`, a failed upload as
/// `Upload failed: {this}`.
#[derive(Debug, Error)]
pub enum PanelError {
    /// A TCP-level connection could not be established.
    #[error("Connection failed to {url}: {detail}")]
    Connect { url: String, detail: String },

    /// The backend replied with a non-2xx status code.
    #[error("API Error: {status}")]
    Api { status: u16 },

    /// The upload endpoint rejected the file; carries the response body text.
    #[error("{reason}")]
    Rejected { reason: String },

    /// Response body could not be decoded as the expected JSON structure.
    #[error("Malformed response from {url}: {detail}")]
    Decode { url: String, detail: String },
}
