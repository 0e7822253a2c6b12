//! The in-memory album collection, along with the indices derived from it.
//!
//! Every album record lives exactly once in an arena (`albums`), and every index refers to
//! records by [`AlbumId`]. A change to a record is therefore visible through every view
//! without having to hunt down copies.
use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use log::{debug, info};
use tracing::instrument;

use crate::{
    errors::Error,
    schemas::album::{Album, AlbumBrief, AlbumId},
};

#[derive(Clone, Debug, Default)]
pub struct Collection {
    /// Record arena, in insertion order.
    pub(crate) albums: Vec<Album>,
    /// title -> record
    pub(crate) by_title: HashMap<Arc<str>, AlbumId>,
    /// Played albums, in the order they were first played.
    pub(crate) played: Vec<AlbumId>,
    /// Unplayed albums. Ids are monotonic, so iteration is in insertion order.
    pub(crate) unplayed: BTreeSet<AlbumId>,
    /// artist -> records by that artist, in insertion order
    pub(crate) by_artist: HashMap<Arc<str>, Vec<AlbumId>>,
    /// Artists in the order they were first seen.
    pub(crate) artists: Vec<Arc<str>>,
}

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unplayed album to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] if an album with the same title is already in the
    /// collection, in which case nothing is changed.
    #[instrument(skip(self))]
    pub fn add(&mut self, title: &str, artist: &str) -> Result<Album, Error> {
        self.insert(Album::new(title, artist))
    }

    /// Add an album that has already been played.
    ///
    /// No REPL command maps to this, it is for callers seeding a collection from an existing
    /// listening history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] if an album with the same title is already in the
    /// collection, in which case nothing is changed.
    #[instrument(skip(self))]
    pub fn add_played(&mut self, title: &str, artist: &str) -> Result<Album, Error> {
        self.insert(Album {
            played: true,
            ..Album::new(title, artist)
        })
    }

    fn insert(&mut self, album: Album) -> Result<Album, Error> {
        if self.by_title.contains_key(&album.title) {
            debug!("rejecting duplicate album {:?}", album.title);
            return Err(Error::AlreadyExists(album.title));
        }

        let id = AlbumId(self.albums.len());
        self.by_title.insert(album.title.clone(), id);

        if album.played {
            self.played.push(id);
        } else {
            self.unplayed.insert(id);
        }

        if let Some(ids) = self.by_artist.get_mut(&album.artist) {
            ids.push(id);
        } else {
            self.artists.push(album.artist.clone());
            self.by_artist.insert(album.artist.clone(), vec![id]);
        }

        info!("added {:?} by {:?} as album {id}", album.title, album.artist);
        self.albums.push(album.clone());
        Ok(album)
    }

    /// Mark an album as played.
    ///
    /// Playing an album that was already played is not an error, it just doesn't change
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no album with that title is in the collection.
    #[instrument(skip(self))]
    pub fn play(&mut self, title: &str) -> Result<Album, Error> {
        let id = *self
            .by_title
            .get(title)
            .ok_or_else(|| Error::NotFound(title.into()))?;

        let album = &mut self.albums[id.0];
        if !album.played {
            album.played = true;
            self.unplayed.remove(&id);
            self.played.push(id);
            info!("marked {:?} as played", album.title);
        }

        Ok(album.clone())
    }

    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Album> {
        self.by_title.get(title).map(|id| &self.albums[id.0])
    }

    /// Every album, in the order they were added.
    #[must_use]
    pub fn list_all(&self) -> Vec<Album> {
        self.albums.clone()
    }

    /// Played albums, in the order they were played.
    #[must_use]
    pub fn list_played(&self) -> Vec<AlbumBrief> {
        self.briefs(self.played.iter())
    }

    /// Unplayed albums, in the order they were added.
    #[must_use]
    pub fn list_unplayed(&self) -> Vec<AlbumBrief> {
        self.briefs(self.unplayed.iter())
    }

    /// Every album by `artist`, in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArtistNotFound`] if no album by that artist was ever added.
    pub fn list_by_artist(&self, artist: &str) -> Result<Vec<Album>, Error> {
        self.by_artist_filtered(artist, |_| true)
    }

    /// # Errors
    ///
    /// Returns [`Error::ArtistNotFound`] if no album by that artist was ever added.
    pub fn list_played_by_artist(&self, artist: &str) -> Result<Vec<Album>, Error> {
        self.by_artist_filtered(artist, |album| album.played)
    }

    /// # Errors
    ///
    /// Returns [`Error::ArtistNotFound`] if no album by that artist was ever added.
    pub fn list_unplayed_by_artist(&self, artist: &str) -> Result<Vec<Album>, Error> {
        self.by_artist_filtered(artist, |album| !album.played)
    }

    fn by_artist_filtered(
        &self,
        artist: &str,
        filter: impl Fn(&Album) -> bool,
    ) -> Result<Vec<Album>, Error> {
        let ids = self
            .by_artist
            .get(artist)
            .ok_or_else(|| Error::ArtistNotFound(artist.into()))?;

        Ok(ids
            .iter()
            .map(|id| &self.albums[id.0])
            .filter(|album| filter(album))
            .cloned()
            .collect())
    }

    fn briefs<'a>(&self, ids: impl Iterator<Item = &'a AlbumId>) -> Vec<AlbumBrief> {
        ids.map(|id| AlbumBrief::from(&self.albums[id.0])).collect()
    }

    /// Artists with at least one album, in the order they were first seen.
    #[must_use]
    pub fn artists(&self) -> &[Arc<str>] {
        &self.artists
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    #[must_use]
    pub fn played_count(&self) -> usize {
        self.played.len()
    }

    #[must_use]
    pub fn unplayed_count(&self) -> usize {
        self.unplayed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_consistent, collection_with_state};

    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn brief(title: &str, artist: &str) -> AlbumBrief {
        AlbumBrief {
            title: title.into(),
            artist: artist.into(),
        }
    }

    #[test]
    fn test_add() -> Result<()> {
        let mut collection = Collection::new();
        assert!(collection.is_empty());

        let added = collection.add("Ride the Lightning", "Metallica")?;
        assert_eq!(added, Album::new("Ride the Lightning", "Metallica"));

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.list_all(), vec![added.clone()]);
        assert_eq!(
            collection.list_unplayed(),
            vec![brief("Ride the Lightning", "Metallica")]
        );
        assert!(collection.list_played().is_empty());
        assert_eq!(collection.list_by_artist("Metallica")?, vec![added]);
        assert_consistent(&collection);
        Ok(())
    }

    #[test]
    fn test_add_duplicate_is_rejected() -> Result<()> {
        let mut collection = Collection::new();
        collection.add("Ride the Lightning", "Metallica")?;

        let result = collection.add("Ride the Lightning", "Someone Else");
        assert_eq!(
            result,
            Err(Error::AlreadyExists("Ride the Lightning".into()))
        );

        assert_eq!(collection.len(), 1);
        assert!(collection.list_by_artist("Someone Else").is_err());
        assert_eq!(collection.get("Ride the Lightning").unwrap().artist.as_ref(), "Metallica");
        assert_consistent(&collection);
        Ok(())
    }

    #[test]
    fn test_add_played() -> Result<()> {
        let mut collection = Collection::new();
        let added = collection.add_played("Kind of Blue", "Miles Davis")?;
        assert!(added.played);

        assert_eq!(collection.list_played(), vec![brief("Kind of Blue", "Miles Davis")]);
        assert!(collection.list_unplayed().is_empty());
        assert_eq!(collection.list_played_by_artist("Miles Davis")?, vec![added]);
        assert_consistent(&collection);
        Ok(())
    }

    #[test]
    fn test_play() -> Result<()> {
        let mut collection = Collection::new();
        collection.add("Ride the Lightning", "Metallica")?;
        collection.add("Master of Puppets", "Metallica")?;

        let (played_before, unplayed_before) =
            (collection.played_count(), collection.unplayed_count());

        let played = collection.play("Ride the Lightning")?;
        assert!(played.played);

        assert_eq!(collection.played_count(), played_before + 1);
        assert_eq!(collection.unplayed_count(), unplayed_before - 1);
        assert_eq!(
            collection.list_played(),
            vec![brief("Ride the Lightning", "Metallica")]
        );
        assert_eq!(
            collection.list_unplayed(),
            vec![brief("Master of Puppets", "Metallica")]
        );

        // the artist index sees the change too
        let by_artist = collection.list_by_artist("Metallica")?;
        assert!(by_artist[0].played);
        assert!(!by_artist[1].played);
        assert_consistent(&collection);
        Ok(())
    }

    #[test]
    fn test_play_twice_changes_nothing() -> Result<()> {
        let mut collection = Collection::new();
        collection.add("Ride the Lightning", "Metallica")?;
        collection.play("Ride the Lightning")?;

        let again = collection.play("Ride the Lightning")?;
        assert!(again.played);
        assert_eq!(collection.played_count(), 1);
        assert_eq!(collection.unplayed_count(), 0);
        assert_consistent(&collection);
        Ok(())
    }

    #[test]
    fn test_play_missing_album() {
        let mut collection = collection_with_state();
        let before = collection.clone();

        let result = collection.play("Never Added");
        assert_eq!(result, Err(Error::NotFound("Never Added".into())));

        assert_eq!(collection.list_all(), before.list_all());
        assert_eq!(collection.list_played(), before.list_played());
        assert_eq!(collection.list_unplayed(), before.list_unplayed());
        assert_consistent(&collection);
    }

    #[test]
    fn test_played_order_is_play_order() -> Result<()> {
        let mut collection = Collection::new();
        collection.add("A", "X")?;
        collection.add("B", "Y")?;
        collection.add("C", "X")?;

        collection.play("C")?;
        collection.play("A")?;

        assert_eq!(collection.list_played(), vec![brief("C", "X"), brief("A", "X")]);
        assert_eq!(collection.list_unplayed(), vec![brief("B", "Y")]);
        let titles = collection
            .list_all()
            .into_iter()
            .map(|a| a.title.to_string())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_consistent(&collection);
        Ok(())
    }

    #[rstest]
    #[case::all("Metallica", None, vec!["Ride the Lightning", "Master of Puppets", "...And Justice for All"])]
    #[case::played("Metallica", Some(true), vec!["Ride the Lightning"])]
    #[case::unplayed("Metallica", Some(false), vec!["Master of Puppets", "...And Justice for All"])]
    #[case::played_none("Miles Davis", Some(true), vec![])]
    #[case::unplayed_single("Miles Davis", Some(false), vec!["Kind of Blue"])]
    fn test_list_by_artist(
        #[case] artist: &str,
        #[case] played: Option<bool>,
        #[case] expected: Vec<&str>,
    ) -> Result<()> {
        let collection = collection_with_state();

        let albums = match played {
            None => collection.list_by_artist(artist)?,
            Some(true) => collection.list_played_by_artist(artist)?,
            Some(false) => collection.list_unplayed_by_artist(artist)?,
        };

        assert!(albums.iter().all(|a| a.artist.as_ref() == artist));
        let titles = albums.iter().map(|a| a.title.as_ref()).collect::<Vec<_>>();
        assert_eq!(titles, expected);
        Ok(())
    }

    #[rstest]
    fn test_list_by_unknown_artist_is_an_error(
        #[values(None, Some(true), Some(false))] played: Option<bool>,
    ) {
        let collection = collection_with_state();

        let result = match played {
            None => collection.list_by_artist("Nobody"),
            Some(true) => collection.list_played_by_artist("Nobody"),
            Some(false) => collection.list_unplayed_by_artist("Nobody"),
        };

        assert_eq!(result, Err(Error::ArtistNotFound("Nobody".into())));
    }

    #[test]
    fn test_artists_in_first_seen_order() -> Result<()> {
        let mut collection = Collection::new();
        collection.add("A", "X")?;
        collection.add("B", "Y")?;
        collection.add("C", "X")?;

        let expected: Vec<Arc<str>> = vec!["X".into(), "Y".into()];
        assert_eq!(collection.artists(), expected.as_slice());
        Ok(())
    }

    #[test]
    fn test_titles_are_case_sensitive() -> Result<()> {
        let mut collection = Collection::new();
        collection.add("Blue", "Joni Mitchell")?;
        collection.add("blue", "Someone Else")?;

        assert_eq!(collection.len(), 2);
        assert!(collection.play("BLUE").is_err());
        assert_consistent(&collection);
        Ok(())
    }
}
