//! User: an identity owning albums and the picture arena
//!
//! The user owns its album list and a single arena of pictures keyed by
//! [`PictureId`]. Albums reference ids into the arena, so copying or
//! moving a picture between albums never clones it: edits made through
//! one album are visible through every other album linking the same id.
//! Arena entries are collected once the last album reference is gone.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use uuid::Uuid;

use super::album::Album;
use super::error::ModelError;
use super::picture::{Picture, PictureId};

/// The per-user picture storage, keyed by stable id
pub type PictureArena = BTreeMap<PictureId, Picture>;

/// A user identity with an ordered collection of albums
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    id: Uuid,
    username: String,
    albums: Vec<Album>,
    pictures: PictureArena,
    next_picture: u64,
}

impl User {
    pub(crate) fn new(username: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            albums: Vec::new(),
            pictures: PictureArena::new(),
            next_picture: 0,
        }
    }

    /// The unique identifier, assigned at creation
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The username
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The user's albums, in creation order
    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Look up an album by name
    #[must_use]
    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.name() == name)
    }

    /// The picture arena, for resolving album members
    #[must_use]
    pub const fn pictures(&self) -> &PictureArena {
        &self.pictures
    }

    /// Look up a picture by id
    #[must_use]
    pub fn picture(&self, id: PictureId) -> Option<&Picture> {
        self.pictures.get(&id)
    }

    /// Mutable access to a picture, for caption and tag edits
    ///
    /// The edit is visible through every album that links this id.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownPicture` if the id is not in the arena.
    pub fn picture_mut(&mut self, id: PictureId) -> Result<&mut Picture, ModelError> {
        self.pictures
            .get_mut(&id)
            .ok_or_else(|| ModelError::UnknownPicture(id.to_string()))
    }

    /// Create a new, empty album
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidName` for an empty name and
    /// `ModelError::DuplicateAlbum` if the user already owns an album
    /// with this name.
    pub fn create_album(&mut self, name: &str) -> Result<(), ModelError> {
        if name.is_empty() {
            return Err(ModelError::InvalidName("album name is empty".into()));
        }
        if self.album(name).is_some() {
            return Err(ModelError::DuplicateAlbum(name.to_string()));
        }
        self.albums.push(Album::new(name));
        Ok(())
    }

    /// Rename an album
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownAlbum` if `old` does not exist,
    /// `ModelError::InvalidName` for an empty new name, and
    /// `ModelError::DuplicateAlbum` if `new` is already taken by a
    /// different album.
    pub fn rename_album(&mut self, old: &str, new: &str) -> Result<(), ModelError> {
        if new.is_empty() {
            return Err(ModelError::InvalidName("album name is empty".into()));
        }
        if new != old && self.album(new).is_some() {
            return Err(ModelError::DuplicateAlbum(new.to_string()));
        }
        self.album_mut(old)?.rename(new);
        Ok(())
    }

    /// Delete an album and collect pictures no other album references
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownAlbum` if the album does not exist.
    pub fn delete_album(&mut self, name: &str) -> Result<(), ModelError> {
        let idx = self
            .albums
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| ModelError::UnknownAlbum(name.to_string()))?;
        let removed = self.albums.remove(idx);
        for id in removed.members() {
            self.collect_if_unreferenced(*id);
        }
        Ok(())
    }

    /// Import the image file at `path` into an album
    ///
    /// Duplicate detection is by file-reference equality across the
    /// whole arena: when the same path was already imported anywhere,
    /// the existing picture instance is linked into the album instead
    /// of creating an independent copy, preserving shared-reference
    /// semantics. Importing into an album that already holds the
    /// picture is refused.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownAlbum` if the album does not exist,
    /// `ModelError::DuplicatePicture` if the album already contains the
    /// picture, and `ModelError::Io` if the file's metadata cannot be
    /// read.
    pub fn import_picture(
        &mut self,
        album: &str,
        path: impl AsRef<Path>,
    ) -> Result<PictureId, ModelError> {
        let path = path.as_ref();
        if self.album(album).is_none() {
            return Err(ModelError::UnknownAlbum(album.to_string()));
        }

        if let Some((&id, _)) = self.pictures.iter().find(|(_, p)| p.file() == path) {
            let target = self.album_mut(album)?;
            if target.contains(id) {
                return Err(ModelError::DuplicatePicture(path.display().to_string()));
            }
            target.link(id);
            return Ok(id);
        }

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let picture = Picture::new(&name, path)?;

        let id = PictureId(self.next_picture);
        self.next_picture += 1;
        self.pictures.insert(id, picture);
        self.album_mut(album)?.link(id);
        Ok(id)
    }

    /// Link an existing picture into another album without cloning it
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownAlbum`, `ModelError::UnknownPicture`
    /// if `from` does not contain the id, and
    /// `ModelError::DuplicatePicture` if `to` already does.
    pub fn copy_picture(
        &mut self,
        from: &str,
        to: &str,
        id: PictureId,
    ) -> Result<(), ModelError> {
        self.check_transfer(from, to, id)?;
        self.album_mut(to)?.link(id);
        Ok(())
    }

    /// Move a picture between albums
    ///
    /// The picture stays the same arena instance; only membership
    /// changes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`User::copy_picture`].
    pub fn move_picture(
        &mut self,
        from: &str,
        to: &str,
        id: PictureId,
    ) -> Result<(), ModelError> {
        self.check_transfer(from, to, id)?;
        self.album_mut(from)?.unlink(id);
        self.album_mut(to)?.link(id);
        Ok(())
    }

    /// Remove a picture from one album
    ///
    /// Other albums referencing the id keep it. When this was the last
    /// reference, the arena entry is dropped.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnknownAlbum` or `ModelError::UnknownPicture`
    /// if the album does not contain the id.
    pub fn remove_picture(&mut self, album: &str, id: PictureId) -> Result<(), ModelError> {
        if !self.album_mut(album)?.unlink(id) {
            return Err(ModelError::UnknownPicture(id.to_string()));
        }
        self.collect_if_unreferenced(id);
        Ok(())
    }

    /// Every distinct picture across all albums, in scan order
    ///
    /// Scan order is album creation order, then position within the
    /// album; a picture shared into several albums appears once, at its
    /// first occurrence. This is the order the query engine reports
    /// matches in.
    #[must_use]
    pub fn distinct_pictures(&self) -> Vec<(PictureId, &Picture)> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for album in &self.albums {
            for &id in album.members() {
                if seen.insert(id)
                    && let Some(picture) = self.pictures.get(&id)
                {
                    out.push((id, picture));
                }
            }
        }
        out
    }

    /// Materialize a set of pictures into a brand-new album
    ///
    /// Each id is linked by reference, so the new album shares the same
    /// picture instances as the albums the results came from.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateAlbum`/`ModelError::InvalidName`
    /// from album creation and `ModelError::UnknownPicture` if any id is
    /// not in the arena.
    pub fn create_album_from(
        &mut self,
        name: &str,
        ids: &[PictureId],
    ) -> Result<(), ModelError> {
        for id in ids {
            if !self.pictures.contains_key(id) {
                return Err(ModelError::UnknownPicture(id.to_string()));
            }
        }
        self.create_album(name)?;
        let album = self.album_mut(name)?;
        for &id in ids {
            album.link(id);
        }
        Ok(())
    }

    fn album_mut(&mut self, name: &str) -> Result<&mut Album, ModelError> {
        self.albums
            .iter_mut()
            .find(|a| a.name() == name)
            .ok_or_else(|| ModelError::UnknownAlbum(name.to_string()))
    }

    fn check_transfer(&self, from: &str, to: &str, id: PictureId) -> Result<(), ModelError> {
        let source = self
            .album(from)
            .ok_or_else(|| ModelError::UnknownAlbum(from.to_string()))?;
        if !source.contains(id) {
            return Err(ModelError::UnknownPicture(id.to_string()));
        }
        let target = self
            .album(to)
            .ok_or_else(|| ModelError::UnknownAlbum(to.to_string()))?;
        if target.contains(id) {
            return Err(ModelError::DuplicatePicture(id.to_string()));
        }
        Ok(())
    }

    fn collect_if_unreferenced(&mut self, id: PictureId) {
        if !self.albums.iter().any(|a| a.contains(id)) {
            self.pictures.remove(&id);
        }
    }
}
