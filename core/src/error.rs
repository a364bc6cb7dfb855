use std::fmt;
use std::io;

/// Fatal markup failure. Everything else the parsers tolerate by skipping
/// the malformed piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A closing tag was encountered while no element was open.
    UnbalancedMarkup,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnbalancedMarkup => write!(f, "closing tag without opening tag"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Top-level error for the parse-then-render entry point.
#[derive(Debug)]
pub enum Error {
    Markup(ParseError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Markup(err) => write!(f, "markup error: {}", err),
            Error::Io(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Markup(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Markup(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
