pub mod implementations;
pub mod parse;
pub mod printing;
pub mod utils;


use spindle_storage::collection::Collection;

pub trait CommandHandler {
    type Output;

    fn handle<W: std::fmt::Write>(&self, collection: &mut Collection, stdout: &mut W) -> Self::Output;
}

/// What the input loop should do after a command has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The commands a user can type at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session
    Quit,
    /// List the available commands
    Help,
    /// Count the albums in the collection
    Status,
    /// Add an (unplayed) album to the collection
    Add { title: String, artist: String },
    /// Mark an album as played
    Play { title: String },
    /// List albums
    Show { target: ShowTarget },
    /// List albums by one artist
    ShowBy { target: ShowTarget, artist: String },
}

/// Which albums a `show` command lists.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShowTarget {
    All,
    Played,
    Unplayed,
}

impl ShowTarget {
    #[must_use]
    pub const fn by_usage(self) -> &'static str {
        match self {
            Self::All => "show all by \"Artist\"",
            Self::Played => "show played by \"Artist\"",
            Self::Unplayed => "show unplayed by \"Artist\"",
        }
    }
}
