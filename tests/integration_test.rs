//! Integration tests for shoebox
//!
//! These tests verify end-to-end functionality: building a photo
//! hierarchy through the public API, persisting it as a snapshot, and
//! querying it back, with particular attention to the shared-reference
//! semantics of pictures linked into several albums.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use shoebox::model::{Directory, ModelError, Tag};
use shoebox::query;
use shoebox::snapshot::SnapshotStore;
use shoebox::stock;

/// Create an image-stand-in file whose mtime is `captured_at`
fn picture_file(dir: &Path, name: &str, captured_at: DateTime<Local>) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(b"not really a jpeg").unwrap();
    file.set_modified(captured_at.into()).unwrap();
    path
}

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, hh, mm, 0).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_session_round_trip() {
    let files = tempfile::tempdir().unwrap();
    let lib = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(lib.path().join("library.bin"));

    // Session one: build the hierarchy and flush it
    {
        let mut directory = store.load().unwrap();
        assert!(directory.users().is_empty());

        let alice = directory.add_user("alice").unwrap();
        alice.create_album("Trip").unwrap();
        alice.create_album("Favorites").unwrap();

        let beach = picture_file(files.path(), "beach.jpg", at(2024, 1, 1, 9, 30));
        let peak = picture_file(files.path(), "peak.jpg", at(2024, 1, 15, 16, 45));

        let beach_id = alice.import_picture("Trip", &beach).unwrap();
        alice.import_picture("Trip", &peak).unwrap();
        alice.copy_picture("Trip", "Favorites", beach_id).unwrap();

        let picture = alice.picture_mut(beach_id).unwrap();
        picture.set_caption("first morning").unwrap();
        picture.add_tag(Tag::new("Place", "Coast").unwrap()).unwrap();

        store.save(&directory).unwrap();
    }

    // Session two: everything is back, including aliasing
    let directory = store.load().unwrap();
    let alice = directory.login("alice").unwrap();
    assert_eq!(alice.album("Trip").unwrap().photo_count(), 2);
    assert_eq!(alice.album("Favorites").unwrap().photo_count(), 1);
    assert_eq!(alice.pictures().len(), 2);

    let shared = alice.album("Favorites").unwrap().members()[0];
    assert!(alice.album("Trip").unwrap().contains(shared));
    let picture = alice.picture(shared).unwrap();
    assert_eq!(picture.caption(), "first morning");
    assert_eq!(picture.tags()[0].to_string(), "Place=Coast");
    assert_eq!(
        alice.album("Trip").unwrap().date_range(alice.pictures()),
        "01-01-2024 09:30 - 01-15-2024 16:45"
    );
}

#[test]
fn test_caption_edit_after_restore_visible_through_both_albums() {
    let files = tempfile::tempdir().unwrap();
    let lib = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(lib.path().join("library.bin"));

    let mut directory = Directory::new();
    let bob = directory.add_user("bob").unwrap();
    bob.create_album("A").unwrap();
    bob.create_album("B").unwrap();
    let path = picture_file(files.path(), "shared.jpg", at(2024, 5, 5, 12, 0));
    let id = bob.import_picture("A", &path).unwrap();
    bob.copy_picture("A", "B", id).unwrap();
    store.save(&directory).unwrap();

    let mut restored = store.load().unwrap();
    let bob = restored.user_mut("bob").unwrap();
    bob.picture_mut(id).unwrap().set_caption("changed once").unwrap();

    for album in ["A", "B"] {
        let member = bob.album(album).unwrap().members()[0];
        assert_eq!(bob.picture(member).unwrap().caption(), "changed once");
    }
}

#[test]
fn test_tag_and_date_search_after_restore() {
    let files = tempfile::tempdir().unwrap();
    let lib = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(lib.path().join("library.bin"));

    let mut directory = Directory::new();
    let alice = directory.add_user("alice").unwrap();
    alice.create_album("Trip").unwrap();

    let paths = [
        picture_file(files.path(), "one.jpg", at(2024, 1, 1, 10, 0)),
        picture_file(files.path(), "two.jpg", at(2024, 1, 15, 10, 0)),
        picture_file(files.path(), "three.jpg", at(2024, 2, 1, 10, 0)),
    ];
    let ids: Vec<_> = paths
        .iter()
        .map(|p| alice.import_picture("Trip", p).unwrap())
        .collect();

    alice
        .picture_mut(ids[0])
        .unwrap()
        .add_tag(Tag::new("Color", "Red").unwrap())
        .unwrap();
    alice
        .picture_mut(ids[2])
        .unwrap()
        .add_tag(Tag::new("Color", "Red").unwrap())
        .unwrap();
    store.save(&directory).unwrap();

    let restored = store.load().unwrap();
    let alice = restored.login("alice").unwrap();

    let red = query::search_by_tags(alice, "Color=Red").unwrap();
    assert_eq!(red, vec![ids[0], ids[2]]);

    let january = query::search_by_date(alice, day(2024, 1, 1), day(2024, 1, 20)).unwrap();
    assert_eq!(january, vec![ids[0], ids[1]]);
}

#[test]
fn test_search_results_materialized_as_album() {
    let files = tempfile::tempdir().unwrap();

    let mut directory = Directory::new();
    let alice = directory.add_user("alice").unwrap();
    alice.create_album("Trip").unwrap();

    let red = picture_file(files.path(), "red.jpg", at(2024, 3, 1, 8, 0));
    let blue = picture_file(files.path(), "blue.jpg", at(2024, 3, 2, 8, 0));
    let red_id = alice.import_picture("Trip", &red).unwrap();
    let blue_id = alice.import_picture("Trip", &blue).unwrap();
    alice
        .picture_mut(red_id)
        .unwrap()
        .add_tag(Tag::new("Color", "Red").unwrap())
        .unwrap();

    let results = query::search_by_tags(alice, "Color=Red").unwrap();
    alice.create_album_from("Red Things", &results).unwrap();

    let album = alice.album("Red Things").unwrap();
    assert_eq!(album.members(), &[red_id]);
    assert!(!album.contains(blue_id));

    // The new album shares the picture instance with "Trip"
    alice.picture_mut(red_id).unwrap().set_caption("crimson").unwrap();
    let via_new = alice.album("Red Things").unwrap().members()[0];
    assert_eq!(alice.picture(via_new).unwrap().caption(), "crimson");
}

#[test]
fn test_stock_seed_then_persist() {
    let seed = tempfile::tempdir().unwrap();
    let lib = tempfile::tempdir().unwrap();
    picture_file(seed.path(), "sample1.jpg", at(2023, 6, 1, 12, 0));
    picture_file(seed.path(), "sample2.jpg", at(2023, 6, 2, 12, 0));

    let store = SnapshotStore::new(lib.path().join("library.bin"));
    let mut directory = store.load().unwrap();
    stock::seed_stock_user(&mut directory, seed.path()).unwrap();
    store.save(&directory).unwrap();

    let restored = store.load().unwrap();
    let stock_user = restored.user(stock::STOCK_USERNAME).unwrap();
    assert_eq!(
        stock_user.album(stock::STOCK_ALBUM).unwrap().photo_count(),
        2
    );

    // Seeding again after restore must not duplicate anything
    let mut restored = restored;
    stock::seed_stock_user(&mut restored, seed.path()).unwrap();
    let stock_user = restored.user(stock::STOCK_USERNAME).unwrap();
    assert_eq!(
        stock_user.album(stock::STOCK_ALBUM).unwrap().photo_count(),
        2
    );
}

#[test]
fn test_import_missing_file_reports_io_error() {
    let mut directory = Directory::new();
    let alice = directory.add_user("alice").unwrap();
    alice.create_album("Trip").unwrap();

    let result = alice.import_picture("Trip", "no/such/photo.jpg");
    assert!(matches!(result, Err(ModelError::Io(_))));
}
