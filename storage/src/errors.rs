use std::sync::Arc;

use thiserror::Error;

/// Errors returned by the operations of a [`crate::collection::Collection`].
///
/// The display strings are what a user sees, so they double as the REPL's responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Album is already in the collection.")]
    AlreadyExists(Arc<str>),
    #[error("\"{0}\" is not yet in your collection.")]
    NotFound(Arc<str>),
    #[error("There are no albums by {0} in your collection.")]
    ArtistNotFound(Arc<str>),
}
