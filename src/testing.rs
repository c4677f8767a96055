//! Testing utilities for shoebox
//!
//! Helpers for writing tests that need real picture files with known
//! capture times. The model derives a picture's capture time from the
//! file's last-modified time, so fixtures create a file and then pin
//! its mtime to the requested instant.
//!
//! Only available when compiled with `cfg(test)`.

use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create an image-stand-in file whose mtime is `captured_at`
///
/// Returns the path of the created file.
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or its
/// modification time cannot be set.
pub fn picture_file(
    dir: &Path,
    name: &str,
    captured_at: DateTime<Local>,
) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let mut file = fs::File::create(&path)?;
    file.write_all(b"not really a jpeg")?;
    file.set_modified(captured_at.into())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_picture_file_pins_mtime() {
        let dir = tempdir().unwrap();
        let when = Local.with_ymd_and_hms(2023, 12, 24, 18, 0, 0).unwrap();

        let path = picture_file(dir.path(), "fixture.jpg", when).unwrap();
        assert!(path.exists());

        let modified = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(DateTime::<Local>::from(modified), when);
    }
}
