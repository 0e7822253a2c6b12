//! Turns a line of user input into a [`Command`].
use std::str::FromStr;

use thiserror::Error;

use super::{Command, ShowTarget};

pub const ADD_USAGE: &str = "add \"Album\" \"Artist\"";
pub const PLAY_USAGE: &str = "play \"Album\"";

/// Why a line couldn't be turned into a [`Command`].
///
/// Like the store errors, the display strings are shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("Null value input. Please try again.")]
    Empty,
    #[error("Unknown command. Please try again.")]
    Unknown,
    #[error("Input must be in the form:\n{0}")]
    Usage(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of non-whitespace characters.
    Word(String),
    /// Everything between a pair of double quotes, which may be nothing at all.
    Quoted(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Word(s) | Self::Quoted(s) => s,
        }
    }
}

/// Split a line into words and quoted phrases.
///
/// A quote that is never closed runs to the end of the line.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '"' {
            chars.next();
            let phrase = chars.by_ref().take_while(|&c| c != '"').collect();
            tokens.push(Token::Quoted(phrase));
        } else {
            let mut word = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() || c == '"' {
                    break;
                }
                word.push(c);
                chars.next();
            }
            tokens.push(Token::Word(word));
        }
    }

    tokens
}

/// The single argument of `play` and the `show ... by` commands, or an unquoted `add` artist.
///
/// Several tokens are joined back together with single spaces, so `play Kind of Blue` works
/// without quotes.
fn argument(tokens: &[Token]) -> Option<String> {
    let joined = tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_add(args: &[Token]) -> Result<Command, ParseError> {
    let (title, artist) = match args {
        [title, artist] => (title.as_str().trim(), artist.as_str().trim().to_string()),
        // after a quoted title, an unquoted artist may span several words
        [Token::Quoted(title), rest @ ..] if rest.iter().all(|t| matches!(t, Token::Word(_))) => {
            (title.trim(), argument(rest).unwrap_or_default())
        }
        _ => return Err(ParseError::Usage(ADD_USAGE)),
    };

    if title.is_empty() || artist.is_empty() {
        return Err(ParseError::Usage(ADD_USAGE));
    }

    Ok(Command::Add {
        title: title.to_string(),
        artist,
    })
}

fn parse_show(args: &[Token]) -> Result<Command, ParseError> {
    let [Token::Word(target), rest @ ..] = args else {
        return Err(ParseError::Unknown);
    };
    let target: ShowTarget = target.parse()?;

    match rest {
        [] => Ok(Command::Show { target }),
        [Token::Word(by), rest @ ..] if by == "by" => argument(rest)
            .map(|artist| Command::ShowBy { target, artist })
            .ok_or(ParseError::Usage(target.by_usage())),
        _ => Err(ParseError::Unknown),
    }
}

impl FromStr for ShowTarget {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "played" => Ok(Self::Played),
            "unplayed" => Ok(Self::Unplayed),
            _ => Err(ParseError::Unknown),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(line);

        let [first, args @ ..] = tokens.as_slice() else {
            return Err(ParseError::Empty);
        };
        // commands are never quoted
        let Token::Word(command) = first else {
            return Err(ParseError::Unknown);
        };

        match (command.as_str(), args) {
            ("quit", []) => Ok(Self::Quit),
            ("help", []) => Ok(Self::Help),
            ("status", []) => Ok(Self::Status),
            ("add", args) => parse_add(args),
            ("play", args) => argument(args)
                .map(|title| Self::Play { title })
                .ok_or(ParseError::Usage(PLAY_USAGE)),
            ("show", args) => parse_show(args),
            _ => Err(ParseError::Unknown),
        }
    }
}
