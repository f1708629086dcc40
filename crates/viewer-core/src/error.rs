use thiserror::Error;

/// Recoverable viewer failures. None of these end the session; they are
/// surfaced as console diagnostics (and one blocking alert for bad files).
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no model is loaded")]
    NoModel,
    #[error("unsupported file {0:?}: expected a .glb model")]
    UnsupportedFile(String),
    #[error("failed to decode model: {0}")]
    Decode(String),
    #[error("model contains no mesh geometry")]
    EmptyModel,
}
