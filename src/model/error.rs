//! Model-specific error types
//!
//! This module defines all error types that can occur while mutating the
//! photo hierarchy (users, albums, pictures, tags). The checks live in
//! the model itself so the core is correct independent of caller
//! discipline.
//!
//! # Error Types
//!
//! - **`Io`**: Filesystem errors, e.g. a picture file whose modification
//!   time cannot be read
//! - **`InvalidTag`** / **`DuplicateTag`**: Tag constraint violations
//! - **`InvalidCaption`**: Empty or oversized caption text
//! - **`DuplicateUser`** / **`ReservedUsername`** / **`UnknownUser`**:
//!   Directory-level refusals
//! - **`DuplicateAlbum`** / **`UnknownAlbum`**: Album-level refusals
//! - **`DuplicatePicture`** / **`UnknownPicture`**: Membership refusals
//! - **`InvalidDateRange`**: A date-range check with a missing or
//!   inverted range

use thiserror::Error;

/// Errors raised by the photo hierarchy model
#[derive(Debug, Error)]
pub enum ModelError {
    /// Represents an I/O error, e.g. while reading file metadata
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tag name or value is not 1-20 alphanumeric characters
    #[error("Invalid tag '{0}': name and value must each be 1-20 alphanumeric characters")]
    InvalidTag(String),

    /// The picture already carries a structurally equal tag
    #[error("Duplicate tag: {0}")]
    DuplicateTag(String),

    /// Caption is empty or longer than 250 characters
    #[error("Invalid caption: {0}")]
    InvalidCaption(String),

    /// A user with this username already exists in the directory
    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    /// The username is reserved for the administrative role
    #[error("Username '{0}' is reserved")]
    ReservedUsername(String),

    /// No user with this username exists in the directory
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// The user already owns an album with this name
    #[error("Album '{0}' already exists")]
    DuplicateAlbum(String),

    /// No album with this name exists for the user
    #[error("Unknown album: {0}")]
    UnknownAlbum(String),

    /// The target album already contains this picture
    #[error("Picture '{0}' is already in the album")]
    DuplicatePicture(String),

    /// No picture with this id exists in the album or arena
    #[error("Unknown picture: {0}")]
    UnknownPicture(String),

    /// Empty or otherwise unusable name for a user or album
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Start date is missing or after the end date
    #[error("Invalid date range: start must not be after end")]
    InvalidDateRange,
}
