//! First-run stock content bootstrap
//!
//! Seeds a reserved `stock` user with one `stock` album containing a
//! picture for every regular file in the seed directory. This runs once
//! per library: if the stock user already exists, the bootstrap is a
//! no-op. A missing or empty seed directory is tolerated.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::model::{Directory, ModelError};

/// Reserved username owning the seeded content.
pub const STOCK_USERNAME: &str = "stock";

/// Name of the album the seeded pictures land in.
pub const STOCK_ALBUM: &str = "stock";

/// Ensure the stock user exists, seeding it from `seed_dir` if not
///
/// Regular files are imported in name order for determinism. A file
/// whose metadata cannot be read is skipped with a warning rather than
/// aborting the seed.
///
/// # Errors
///
/// Returns `ModelError` if the stock user or album cannot be created.
pub fn seed_stock_user(directory: &mut Directory, seed_dir: &Path) -> Result<(), ModelError> {
    if directory.user(STOCK_USERNAME).is_some() {
        return Ok(());
    }

    let user = directory.add_user(STOCK_USERNAME)?;
    user.create_album(STOCK_ALBUM)?;

    let entries = match fs::read_dir(seed_dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(
                "stock seed directory {} unavailable ({err}), seeding empty album",
                seed_dir.display()
            );
            return Ok(());
        }
    };

    let mut files: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut seeded = 0usize;
    for path in files {
        match user.import_picture(STOCK_ALBUM, &path) {
            Ok(_) => seeded += 1,
            Err(err) => warn!("skipping stock file {}: {err}", path.display()),
        }
    }
    debug!("seeded stock album with {seeded} picture(s)");
    Ok(())
}
