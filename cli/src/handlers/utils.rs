use core::fmt;
use std::io::{self, BufRead, IsTerminal};

/// Lets an [`io::Write`] be used where a [`fmt::Write`] is expected.
///
/// Every write is flushed, so a prompt shows up before we block on reading the next line.
pub struct WriteAdapter<W>(pub W);

impl<W> fmt::Write for WriteAdapter<W>
where
    W: io::Write,
{
    fn write_str(&mut self, s: &str) -> Result<(), fmt::Error> {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)?;
        self.0.flush().map_err(|_| fmt::Error)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), fmt::Error> {
        self.0.write_fmt(args).map_err(|_| fmt::Error)?;
        self.0.flush().map_err(|_| fmt::Error)
    }
}

pub trait StdIn {
    fn is_terminal(&self) -> bool;
    fn lines(&self) -> impl Iterator<Item = io::Result<String>>;
}

impl StdIn for io::Stdin {
    fn is_terminal(&self) -> bool {
        self.lock().is_terminal()
    }
    fn lines(&self) -> impl Iterator<Item = io::Result<String>> {
        io::BufReader::new(self.lock()).lines()
    }
}
