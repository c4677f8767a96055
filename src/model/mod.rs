//! The photo hierarchy data model
//!
//! Four layers, leaf first: [`Tag`] (name/value pair), [`Picture`]
//! (metadata for one image file), [`Album`] (ordered picture
//! references), [`User`] (identity owning albums and the picture
//! arena), and [`Directory`], the aggregate root holding every user
//! and the unit of persistence.
//!
//! The directory is an explicitly constructed value passed by
//! reference; there is no process-wide singleton. The snapshot store
//! populates it at startup and serializes it back on exit.

use serde::{Deserialize, Serialize};
use tracing::warn;

pub mod album;
pub mod error;
pub mod picture;
pub mod tag;
pub mod user;

pub use album::Album;
pub use error::ModelError;
pub use picture::{Picture, PictureId};
pub use tag::Tag;
pub use user::User;

/// Username reserved for the administrative role.
pub const ADMIN_USERNAME: &str = "admin";

/// Registry of all users; the aggregate root for persistence
///
/// Everything reachable from `users` (albums, pictures, tags) is
/// serialized as one graph by the snapshot store.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All users, in registration order
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by username
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username() == username)
    }

    /// Mutable access to a user
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownUser` if no such username exists.
    pub fn user_mut(&mut self, username: &str) -> Result<&mut User, ModelError> {
        self.users
            .iter_mut()
            .find(|u| u.username() == username)
            .ok_or_else(|| ModelError::UnknownUser(username.to_string()))
    }

    /// Authenticate by username match
    ///
    /// This is the full extent of authentication in the system.
    #[must_use]
    pub fn login(&self, username: &str) -> Option<&User> {
        self.user(username)
    }

    /// Register a new user and return a handle to it
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidName` for an empty username,
    /// `ModelError::ReservedUsername` for `admin`, and
    /// `ModelError::DuplicateUser` if the username is taken.
    pub fn add_user(&mut self, username: &str) -> Result<&mut User, ModelError> {
        if username.is_empty() {
            return Err(ModelError::InvalidName("username is empty".into()));
        }
        if username == ADMIN_USERNAME {
            return Err(ModelError::ReservedUsername(username.to_string()));
        }
        if self.user(username).is_some() {
            warn!("user '{username}' already exists, refusing duplicate");
            return Err(ModelError::DuplicateUser(username.to_string()));
        }
        self.users.push(User::new(username));
        match self.users.last_mut() {
            Some(user) => Ok(user),
            None => unreachable!(),
        }
    }

    /// Remove a user and everything it owns
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownUser` if no such username exists.
    pub fn remove_user(&mut self, username: &str) -> Result<(), ModelError> {
        let idx = self
            .users
            .iter()
            .position(|u| u.username() == username)
            .ok_or_else(|| ModelError::UnknownUser(username.to_string()))?;
        self.users.remove(idx);
        Ok(())
    }
}
