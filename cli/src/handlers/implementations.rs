use crate::handlers::printing;

use super::{Command, CommandHandler, Flow, ShowTarget};

use log::debug;
use spindle_storage::{collection::Collection, schemas::album::AlbumBrief};

impl CommandHandler for Command {
    type Output = anyhow::Result<Flow>;

    fn handle<W: std::fmt::Write>(
        &self,
        collection: &mut Collection,
        stdout: &mut W,
    ) -> Self::Output {
        debug!("handling {self:?}");

        match self {
            Self::Quit => {
                writeln!(stdout, "Bye!")?;
                return Ok(Flow::Quit);
            }
            Self::Help => write!(stdout, "{}", printing::help()?)?,
            Self::Status => write!(stdout, "{}", printing::status(collection)?)?,

            Self::Add { title, artist } => match collection.add(title, artist) {
                Ok(album) => writeln!(stdout, "Added \"{}\" by {}", album.title, album.artist)?,
                Err(e) => {
                    debug!("add failed: {e:?}");
                    writeln!(stdout, "{e}")?;
                }
            },
            Self::Play { title } => match collection.play(title) {
                Ok(album) => writeln!(stdout, "You're listening to \"{}\"", album.title)?,
                Err(e) => {
                    debug!("play failed: {e:?}");
                    writeln!(stdout, "{e}")?;
                }
            },

            Self::Show {
                target: ShowTarget::All,
            } => write!(stdout, "{}", printing::album_list(&collection.list_all())?)?,
            Self::Show {
                target: ShowTarget::Played,
            } => write!(
                stdout,
                "{}",
                printing::album_brief_list(&collection.list_played())?
            )?,
            Self::Show {
                target: ShowTarget::Unplayed,
            } => write!(
                stdout,
                "{}",
                printing::album_brief_list(&collection.list_unplayed())?
            )?,

            Self::ShowBy { target, artist } => {
                let albums = match target {
                    ShowTarget::All => collection.list_by_artist(artist),
                    ShowTarget::Played => collection.list_played_by_artist(artist),
                    ShowTarget::Unplayed => collection.list_unplayed_by_artist(artist),
                };
                match albums {
                    Ok(albums) => {
                        let briefs = albums.into_iter().map(AlbumBrief::from).collect::<Vec<_>>();
                        write!(stdout, "{}", printing::album_brief_list(&briefs)?)?;
                    }
                    Err(e) => {
                        debug!("listing by artist failed: {e:?}");
                        writeln!(stdout, "{e}")?;
                    }
                }
            }
        }

        Ok(Flow::Continue)
    }
}
