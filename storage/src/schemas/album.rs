#![allow(clippy::module_name_repetitions)]
use std::{fmt, sync::Arc};

/// Position of an [`Album`] in the collection's record arena.
///
/// Ids are handed out in insertion order and are never reused (albums can't be removed),
/// so ordering ids is the same as ordering by when the album was added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumId(pub(crate) usize);

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// This struct holds everything we know about a particular [`Album`].
/// An [`Album`] is uniquely identified by its title.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Album {
    /// Title of the [`Album`], unique within a collection.
    pub title: Arc<str>,
    /// Artist of the [`Album`].
    pub artist: Arc<str>,
    /// Whether the [`Album`] has been played.
    pub played: bool,
}

impl Album {
    #[must_use]
    pub fn new(title: impl Into<Arc<str>>, artist: impl Into<Arc<str>>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            played: false,
        }
    }

    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.played { "played" } else { "unplayed" }
    }
}

/// The `{title, artist}` projection of an [`Album`], which is what the
/// played and unplayed listings are made of.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumBrief {
    pub title: Arc<str>,
    pub artist: Arc<str>,
}

impl From<Album> for AlbumBrief {
    fn from(album: Album) -> Self {
        Self {
            title: album.title,
            artist: album.artist,
        }
    }
}

impl From<&Album> for AlbumBrief {
    fn from(album: &Album) -> Self {
        Self {
            title: album.title.clone(),
            artist: album.artist.clone(),
        }
    }
}
