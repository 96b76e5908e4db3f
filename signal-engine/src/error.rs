// Error Taxonomy
// Gate and soft rejections are ordinary outcomes, never errors; degraded
// stages are score-0 results produced by the scorers themselves. The only
// hard fault the engine surfaces is a persistence failure.

use thiserror::Error;
use uuid::Uuid;

/// Failure inside a signal storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Signal records are append-only; an id collision is never an overwrite
    #[error("signal {0} already exists")]
    Duplicate(Uuid),

    /// Backend-specific failure (connection, disk, ...)
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Failure of one `generate_signal` call. The decision was computed but could
/// not be durably recorded; callers decide whether to retry.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to persist signal: {0}")]
    Persistence(#[from] StorageError),
}
