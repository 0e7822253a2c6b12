//! The input loop: read a line, run it against the collection, repeat.
use std::io;

use log::{error, info, warn};
use spindle_core::config::ReplSettings;
use spindle_storage::collection::Collection;

use crate::handlers::{Command, CommandHandler, Flow, utils::StdIn};

pub struct Repl {
    collection: Collection,
    settings: ReplSettings,
}

impl Repl {
    #[must_use]
    pub fn new(collection: Collection, settings: ReplSettings) -> Self {
        Self {
            collection,
            settings,
        }
    }

    #[cfg(test)]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Handle a single line of input.
    ///
    /// # Errors
    ///
    /// Only fails if writing to `stdout` fails, bad input is reported to the user instead.
    pub fn handle_line<W: std::fmt::Write>(
        &mut self,
        line: &str,
        stdout: &mut W,
    ) -> anyhow::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => command.handle(&mut self.collection, stdout),
            Err(e) => {
                writeln!(stdout, "{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run the loop until the user quits or the input runs out.
    ///
    /// The greeting and prompt are only shown when input is coming from a terminal (or
    /// `force_interactive` is set), so scripts piped into spindle only see command output.
    ///
    /// A line that isn't valid UTF-8 is reported on `stderr` and skipped, any other read error
    /// ends the session.
    ///
    /// # Errors
    ///
    /// Fails if writing to `stdout` or `stderr` fails, or if reading from `stdin` fails for a
    /// reason other than invalid UTF-8.
    pub fn run<I: StdIn, W1: std::fmt::Write, W2: std::fmt::Write>(
        &mut self,
        stdin: &I,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> anyhow::Result<()> {
        let interactive = self.settings.force_interactive || stdin.is_terminal();
        info!("starting session (interactive: {interactive})");

        if interactive {
            writeln!(stdout, "{}\n", self.settings.greeting)?;
        }

        let mut lines = stdin.lines();
        loop {
            if interactive {
                write!(stdout, "{}", self.settings.prompt)?;
            }

            let Some(line) = lines.next() else {
                // end of input, finish the prompt line
                if interactive {
                    writeln!(stdout)?;
                }
                break;
            };

            let line = match line {
                Ok(line) => line,
                // the bad line has been consumed, so the next read can still succeed
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("failed to read a line of input: {e}");
                    writeln!(stderr, "Error: failed to read input: {e}")?;
                    continue;
                }
                Err(e) => {
                    error!("input is unreadable, ending the session: {e}");
                    return Err(anyhow::Error::new(e).context("failed to read input"));
                }
            };

            if self.handle_line(&line, stdout)? == Flow::Quit {
                break;
            }
        }

        info!(
            "session ended with {} albums in the collection",
            self.collection.len()
        );
        Ok(())
    }
}
