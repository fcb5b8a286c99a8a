use alloc::string::String;
use core::fmt::{self, Display};

/// Error when reading terms, literals, or clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// argument that is neither a single lowercase letter nor starts uppercase
    MalformedTerm(String),
    /// literal without predicate, parentheses, or arguments
    MalformedLiteral(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTerm(s) => write!(f, "malformed term: \"{}\"", s),
            Self::MalformedLiteral(s) => write!(f, "malformed literal: \"{}\"", s),
        }
    }
}
