//! Picture metadata record
//!
//! A picture stores metadata about one image file: its name, caption,
//! file reference, capture timestamp and tags. The image bytes are never
//! read here; the core stores the path by reference and leaves rendering
//! to the display layer.
//!
//! Pictures live in a per-user arena keyed by [`PictureId`]. Albums hold
//! ordered lists of ids rather than owned copies, which makes the
//! shared-reference semantics explicit: a caption or tag edit on one id
//! is visible through every album that links it.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::ModelError;
use super::tag::Tag;

/// Longest accepted caption, in characters.
pub const MAX_CAPTION_LEN: usize = 250;

/// Display format for capture timestamps (`MM-dd-yyyy HH:mm`).
pub const DATETIME_FORMAT: &str = "%m-%d-%Y %H:%M";

/// Display format for capture dates (`MM-dd-yyyy`).
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Stable identifier of a picture within one user's arena
///
/// Ids are allocated from a persisted per-user counter and never reused,
/// so album membership lists survive serialization unchanged.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PictureId(pub(crate) u64);

impl PictureId {
    /// Wrap a raw id, e.g. one read back from CLI output
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PictureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Metadata for one image file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Picture {
    name: String,
    caption: String,
    file: PathBuf,
    captured_at: DateTime<Local>,
    tags: Vec<Tag>,
}

impl Picture {
    /// Create a picture for the file at `path`
    ///
    /// The capture time is derived once from the file's last-modified
    /// time and is immutable afterwards. The caption defaults to the
    /// picture name.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Io` if the file's metadata cannot be read,
    /// e.g. because the file does not exist.
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Result<Self, ModelError> {
        let file = path.into();
        let modified = fs::metadata(&file)?.modified()?;
        Ok(Self {
            name: name.to_string(),
            caption: name.to_string(),
            file,
            captured_at: DateTime::<Local>::from(modified),
            tags: Vec::new(),
        })
    }

    /// The picture name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current caption
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The referenced image file
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The capture timestamp (file mtime at construction)
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Local> {
        self.captured_at
    }

    /// The tags attached to this picture, in insertion order
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Replace the caption
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidCaption` if the text is empty or
    /// longer than 250 characters.
    pub fn set_caption(&mut self, text: &str) -> Result<(), ModelError> {
        if text.is_empty() {
            return Err(ModelError::InvalidCaption("caption is empty".into()));
        }
        if text.chars().count() > MAX_CAPTION_LEN {
            return Err(ModelError::InvalidCaption(format!(
                "caption exceeds {MAX_CAPTION_LEN} characters"
            )));
        }
        self.caption = text.to_string();
        Ok(())
    }

    /// Append a tag
    ///
    /// Insertion order is preserved. A structurally equal duplicate is
    /// refused.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateTag` if an equal tag is already
    /// present.
    pub fn add_tag(&mut self, tag: Tag) -> Result<(), ModelError> {
        if self.tags.contains(&tag) {
            return Err(ModelError::DuplicateTag(tag.to_string()));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Remove the first structurally equal tag
    ///
    /// Returns `true` if a tag was removed, `false` if none matched.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(idx) => {
                self.tags.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether the capture time falls within `[start, end]`, inclusive
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidDateRange` if `start` is after `end`.
    pub fn in_date_range(
        &self,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<bool, ModelError> {
        if start > end {
            return Err(ModelError::InvalidDateRange);
        }
        Ok(self.captured_at >= start && self.captured_at <= end)
    }

    /// The capture timestamp as `MM-dd-yyyy HH:mm`
    #[must_use]
    pub fn formatted_datetime(&self) -> String {
        self.captured_at.format(DATETIME_FORMAT).to_string()
    }

    /// The capture date as `MM-dd-yyyy`
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.captured_at.format(DATE_FORMAT).to_string()
    }
}
