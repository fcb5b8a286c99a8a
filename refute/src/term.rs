use crate::{ParseError, Subst};
use alloc::string::{String, ToString};
use core::fmt::{self, Display};
use core::str::FromStr;

/// Argument of a literal.
///
/// The kind of a term is decided once when reading it:
/// a single lowercase letter is a variable,
/// anything starting with an uppercase letter is a constant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// Constant
    C(String),
    /// Variable
    V(char),
}

impl Term {
    pub fn is_const(&self) -> bool {
        matches!(self, Self::C(_))
    }

    /// Apply a substitution to the term.
    ///
    /// The image of a variable is not substituted further.
    pub fn subst(&self, sub: &Subst) -> Self {
        match self {
            Self::V(v) => sub.get(*v).cloned().unwrap_or(Self::V(*v)),
            Self::C(_) => self.clone(),
        }
    }
}

impl FromStr for Term {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(v), None) if v.is_lowercase() => Ok(Self::V(v)),
            (Some(c), _) if c.is_uppercase() && s.chars().all(char::is_alphanumeric) => {
                Ok(Self::C(s.to_string()))
            }
            _ => Err(ParseError::MalformedTerm(s.to_string())),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C(c) => c.fmt(f),
            Self::V(v) => v.fmt(f),
        }
    }
}

#[test]
fn classify() {
    assert_eq!("x".parse(), Ok(Term::V('x')));
    assert_eq!("A".parse(), Ok(Term::C("A".to_string())));
    assert_eq!("Alice2".parse(), Ok(Term::C("Alice2".to_string())));
    for bad in ["xy", "", "1", "_", "Al-ice", "aB"] {
        assert_eq!(
            bad.parse::<Term>(),
            Err(ParseError::MalformedTerm(bad.to_string()))
        );
    }
}
