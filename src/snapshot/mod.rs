//! Snapshot persistence for the whole directory graph
//!
//! The entire [`Directory`] (users, albums, pictures, tags) is
//! serialized as one bincode-encoded file at a fixed path. There is no
//! incremental or transactional persistence: every save rewrites the
//! full graph, every load reconstructs it.
//!
//! Because albums store picture ids into a per-user arena rather than
//! owned picture values, aliasing survives the round trip by
//! construction: a picture linked into two albums is serialized once
//! and both albums reference the same reconstructed instance.
//!
//! The on-disk format is private and not cross-version stable.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::model::Directory;

pub mod error;

pub use error::SnapshotError;

/// Reads and writes the single library snapshot file
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store for the snapshot at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the full directory graph, atomically
    ///
    /// The graph is encoded to a sibling temp file first and renamed
    /// over the snapshot path, so a failed write leaves the prior
    /// snapshot untouched. Parent directories are created on demand.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` if encoding fails or the file cannot be
    /// written or renamed.
    pub fn save(&self, directory: &Directory) -> Result<(), SnapshotError> {
        let encoded = bincode::serde::encode_to_vec(directory, bincode::config::standard())?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &encoded)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            "saved snapshot ({} users, {} bytes) to {}",
            directory.users().len(),
            encoded.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Reconstruct the directory graph from the snapshot
    ///
    /// A missing snapshot file is the expected first-run condition: it
    /// is reported at info level and an empty directory is returned. A
    /// snapshot that exists but cannot be decoded is an error; startup
    /// must not proceed with a partially populated directory.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Io` if the file cannot be read and
    /// `SnapshotError::Decode` if its contents are not a valid graph.
    pub fn load(&self) -> Result<Directory, SnapshotError> {
        if !self.path.exists() {
            info!(
                "no snapshot at {}, starting with an empty library",
                self.path.display()
            );
            return Ok(Directory::new());
        }

        let bytes = fs::read(&self.path)?;
        let (directory, _): (Directory, usize) =
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
        debug!(
            "loaded snapshot ({} users) from {}",
            directory.users().len(),
            self.path.display()
        );
        Ok(directory)
    }
}
