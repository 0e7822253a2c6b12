//! The record types stored in a [`crate::collection::Collection`].
pub mod album;
