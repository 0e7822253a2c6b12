//! Fixtures and assertions shared by the tests of this crate and its dependents.
use std::collections::HashSet;

use rstest::fixture;

use crate::{collection::Collection, schemas::album::AlbumId};

/// A small collection with a known state:
///
/// | title                    | artist      | played |
/// |--------------------------|-------------|--------|
/// | Ride the Lightning       | Metallica   | yes    |
/// | Kind of Blue             | Miles Davis | no     |
/// | Master of Puppets        | Metallica   | no     |
/// | ...And Justice for All   | Metallica   | no     |
///
/// # Panics
///
/// Panics if the fixture itself is broken (duplicate titles).
#[fixture]
pub fn collection_with_state() -> Collection {
    let mut collection = Collection::new();
    collection.add("Ride the Lightning", "Metallica").unwrap();
    collection.add("Kind of Blue", "Miles Davis").unwrap();
    collection.add("Master of Puppets", "Metallica").unwrap();
    collection.add("...And Justice for All", "Metallica").unwrap();
    collection.play("Ride the Lightning").unwrap();
    collection
}

/// Check that every index of `collection` agrees with the record arena.
///
/// # Panics
///
/// Panics, with a description of the broken invariant, if any index is out of sync.
pub fn assert_consistent(collection: &Collection) {
    let played: HashSet<AlbumId> = collection.played.iter().copied().collect();
    assert_eq!(
        played.len(),
        collection.played.len(),
        "an album is in the played index more than once"
    );

    assert_eq!(
        collection.by_title.len(),
        collection.albums.len(),
        "title index and record arena have different sizes"
    );
    assert_eq!(
        collection.played.len() + collection.unplayed.len(),
        collection.albums.len(),
        "played and unplayed don't partition the collection"
    );

    let mut seen_in_artist_index = 0;
    for (artist, ids) in &collection.by_artist {
        assert!(
            collection.artists.contains(artist),
            "{artist} is indexed but not listed"
        );
        for id in ids {
            assert_eq!(&collection.albums[id.0].artist, artist);
        }
        seen_in_artist_index += ids.len();
    }
    assert_eq!(
        seen_in_artist_index,
        collection.albums.len(),
        "artist index doesn't cover the collection exactly once"
    );
    assert_eq!(collection.artists.len(), collection.by_artist.len());

    for (i, album) in collection.albums.iter().enumerate() {
        let id = AlbumId(i);
        assert_eq!(collection.by_title.get(&album.title), Some(&id));
        assert_eq!(
            album.played,
            played.contains(&id),
            "{:?} has the wrong played flag",
            album.title
        );
        assert_eq!(
            !album.played,
            collection.unplayed.contains(&id),
            "{:?} is in the wrong unplayed state",
            album.title
        );
        let by_artist = &collection.by_artist[&album.artist];
        assert_eq!(
            by_artist.iter().filter(|other| **other == id).count(),
            1,
            "{:?} isn't in its artist's albums exactly once",
            album.title
        );
    }
}
