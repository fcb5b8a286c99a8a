use core::fmt::{self, Display};
use refute::ParseError;

/// Reason why a problem could not be solved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    OsError,
    InputError,
    SyntaxError,
}

pub struct Error(Kind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: Kind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> &Kind {
        &self.0
    }

    pub fn get_error(&self) -> &Option<Box<dyn std::error::Error>> {
        &self.1
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)?;
        match &self.1 {
            Some(e) => write!(f, ": {}", e),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<Kind> for Error {
    fn from(k: Kind) -> Self {
        Self(k, None)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(Kind::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(Kind::OsError, e.into())
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::new(Kind::SyntaxError, e.to_string().into())
    }
}
