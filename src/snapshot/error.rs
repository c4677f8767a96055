//! Snapshot-specific error types
//!
//! Failures while writing or reading the single serialized library
//! snapshot. A missing snapshot file on load is deliberately NOT an
//! error; see [`SnapshotStore::load`](super::SnapshotStore::load).
//!
//! # Error Types
//!
//! - **`Io`**: The snapshot file cannot be written, renamed, or read
//! - **`Encode`**: Failure serializing the directory graph
//! - **`Decode`**: The snapshot exists but cannot be decoded into the
//!   expected graph shape; fatal to startup

use thiserror::Error;

/// Persistence errors for the library snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Represents an I/O error on the snapshot file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Represents a bincode encoding error
    #[error("Error while encoding snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Represents a bincode decoding error
    #[error("Error while decoding snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}
