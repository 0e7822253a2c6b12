//! Handles displaying the output of various commands in a human readable format.

use std::fmt::Write;

use spindle_storage::{
    collection::Collection,
    schemas::album::{Album, AlbumBrief},
};

/// One line per album, with whether it has been played.
pub fn album_list(albums: &[Album]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    for album in albums {
        writeln!(
            output,
            "\"{}\" by {} ({})",
            album.title,
            album.artist,
            album.status()
        )?;
    }

    Ok(output)
}

pub fn album_brief_list(albums: &[AlbumBrief]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    for album in albums {
        writeln!(output, "\"{}\" by {}", album.title, album.artist)?;
    }

    Ok(output)
}

pub fn status(collection: &Collection) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(
        output,
        "{} albums ({} played, {} unplayed) by {} artists",
        collection.len(),
        collection.played_count(),
        collection.unplayed_count(),
        collection.artists().len()
    )?;

    Ok(output)
}

pub fn help() -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "Available commands:")?;
    for (usage, description) in [
        ("add \"Album\" \"Artist\"", "add an album to the collection"),
        ("play \"Album\"", "mark an album as played"),
        ("show all", "list every album"),
        ("show played", "list the albums you've played"),
        ("show unplayed", "list the albums you haven't played yet"),
        ("show all by \"Artist\"", "list every album by an artist"),
        ("show played by \"Artist\"", "list the played albums by an artist"),
        ("show unplayed by \"Artist\"", "list the unplayed albums by an artist"),
        ("status", "count the albums in the collection"),
        ("help", "show this message"),
        ("quit", "end the session"),
    ] {
        writeln!(output, "\t{usage: <28}{description}")?;
    }

    Ok(output)
}
