//! Album: an ordered collection of picture references
//!
//! An album does not own its pictures. It holds an ordered list of
//! [`PictureId`]s into the owning user's arena, so the same picture can
//! be a member of several albums at once. Membership mutation goes
//! through the owning [`User`](super::User), which enforces the
//! duplicate checks.

use serde::{Deserialize, Serialize};

use super::picture::{DATETIME_FORMAT, PictureId};
use super::user::PictureArena;

/// A named, ordered collection of picture references
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Album {
    name: String,
    members: Vec<PictureId>,
}

impl Album {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
        }
    }

    /// The album name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of pictures in the album
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.members.len()
    }

    /// Member picture ids in insertion order
    #[must_use]
    pub fn members(&self) -> &[PictureId] {
        &self.members
    }

    /// Whether the album contains the given picture
    #[must_use]
    pub fn contains(&self, id: PictureId) -> bool {
        self.members.contains(&id)
    }

    /// Span of capture times as `"MM-dd-yyyy HH:mm - MM-dd-yyyy HH:mm"`
    ///
    /// Sorts the member capture times internally, so the result is
    /// stable regardless of insertion order. An empty album yields an
    /// empty string.
    #[must_use]
    pub fn date_range(&self, arena: &PictureArena) -> String {
        let mut dates: Vec<_> = self
            .members
            .iter()
            .filter_map(|id| arena.get(id))
            .map(|p| p.captured_at())
            .collect();
        dates.sort();

        match (dates.first(), dates.last()) {
            (Some(oldest), Some(newest)) => format!(
                "{} - {}",
                oldest.format(DATETIME_FORMAT),
                newest.format(DATETIME_FORMAT)
            ),
            _ => String::new(),
        }
    }

    /// Rename the album; uniqueness is checked by the owning user
    pub(crate) fn rename(&mut self, new_name: &str) {
        self.name = new_name.to_string();
    }

    pub(crate) fn link(&mut self, id: PictureId) {
        self.members.push(id);
    }

    pub(crate) fn unlink(&mut self, id: PictureId) -> bool {
        match self.members.iter().position(|m| *m == id) {
            Some(idx) => {
                self.members.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::picture::Picture;
    use super::*;
    use crate::testing::picture_file;
    use chrono::{Local, TimeZone};
    use tempfile::tempdir;

    fn arena_with(dates: &[(u64, chrono::DateTime<Local>)]) -> PictureArena {
        let dir = tempdir().unwrap();
        let mut arena = PictureArena::new();
        for (n, when) in dates {
            let name = format!("p{n}.jpg");
            let path = picture_file(dir.path(), &name, *when).unwrap();
            arena.insert(PictureId(*n), Picture::new(&name, &path).unwrap());
        }
        arena
    }

    #[test]
    fn test_photo_count_tracks_membership() {
        let mut album = Album::new("Trip");
        assert_eq!(album.photo_count(), 0);

        album.link(PictureId(1));
        album.link(PictureId(2));
        album.link(PictureId(3));
        assert_eq!(album.photo_count(), 3);

        assert!(album.unlink(PictureId(2)));
        assert_eq!(album.photo_count(), 2);
        assert!(!album.unlink(PictureId(2)));
    }

    #[test]
    fn test_date_range_empty_album() {
        let album = Album::new("Empty");
        assert_eq!(album.date_range(&PictureArena::new()), "");
    }

    #[test]
    fn test_date_range_sorted_regardless_of_insertion_order() {
        let newest = Local.with_ymd_and_hms(2024, 2, 1, 18, 45, 0).unwrap();
        let oldest = Local.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let middle = Local.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        let arena = arena_with(&[(1, newest), (2, oldest), (3, middle)]);

        let mut album = Album::new("Trip");
        album.link(PictureId(1));
        album.link(PictureId(2));
        album.link(PictureId(3));

        assert_eq!(
            album.date_range(&arena),
            "01-01-2024 09:00 - 02-01-2024 18:45"
        );
    }

    #[test]
    fn test_date_range_single_picture() {
        let when = Local.with_ymd_and_hms(2024, 5, 5, 5, 5, 0).unwrap();
        let arena = arena_with(&[(1, when)]);

        let mut album = Album::new("One");
        album.link(PictureId(1));

        assert_eq!(
            album.date_range(&arena),
            "05-05-2024 05:05 - 05-05-2024 05:05"
        );
    }

    #[test]
    fn test_rename() {
        let mut album = Album::new("Old");
        album.rename("New");
        assert_eq!(album.name(), "New");
    }
}
