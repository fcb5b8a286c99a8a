use crate::{Lit, ParseError};
use alloc::string::ToString;
use alloc::vec::{self, Vec};
use core::fmt::{self, Display};
use core::str::FromStr;

/// Disjunction of literals.
///
/// The literals are always sorted by predicate name,
/// keeping the order of literals with the same predicate.
/// This makes the printed form `P(x)|~Q(x,A)` canonical:
/// two clauses are equal iff they print the same.
/// The empty clause stands for a contradiction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause(Vec<Lit>);

impl Clause {
    pub fn new(mut lits: Vec<Lit>) -> Self {
        lits.sort_by(|l1, l2| l1.predicate().cmp(l2.predicate()));
        Self(lits)
    }

    /// Return the only literal of the clause.
    ///
    /// Panic if the clause does not consist of exactly one literal.
    pub fn literal(&self) -> &Lit {
        assert_eq!(self.len(), 1, "clause {} is not a single literal", self);
        &self.0[0]
    }

    /// Return true iff no variable occurs in the clause.
    pub fn is_ground(&self) -> bool {
        self.iter().all(Lit::is_ground)
    }

    /// Return true iff some literal contains a constant.
    pub fn has_constant(&self) -> bool {
        self.iter().any(Lit::has_constant)
    }

    /// Keep only the literals whose positions satisfy the predicate.
    pub fn select(&self, f: impl Fn(usize) -> bool) -> Self {
        let iter = self.iter().enumerate().filter(|(i, _)| f(*i));
        Self(iter.map(|(_, lit)| lit.clone()).collect())
    }

    /// Return the disjunction of two clauses.
    ///
    /// Literals occurring in both clauses are kept twice;
    /// [`Clause::verify`] collapses them.
    ///
    /// ~~~
    /// # use refute::Clause;
    /// let c1: Clause = "Q(A)|P(x)".parse().unwrap();
    /// let c2: Clause = "~P(B)|Q(A)".parse().unwrap();
    /// assert_eq!(c1.union(c2).to_string(), "P(x)|~P(B)|Q(A)|Q(A)");
    /// ~~~
    pub fn union(self, other: Self) -> Self {
        let mut lits = self.0;
        lits.extend(other.0);
        Self::new(lits)
    }

    /// Collapse duplicate literals, keeping the first occurrence.
    ///
    /// Return `None` if the clause is empty.
    pub fn verify(self) -> Option<Self> {
        let lits = crate::keep_first(self.0.into_iter());
        (!lits.is_empty()).then(|| Self(lits))
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(lit) = iter.next() {
            write!(f, "{}", lit)?;
            for lit in iter {
                write!(f, "|{}", lit)?;
            }
        } else {
            write!(f, "⊥")?
        }
        Ok(())
    }
}

impl FromStr for Clause {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lits = s.split('|').filter(|lit| !lit.trim().is_empty());
        let lits = lits.map(|lit| lit.parse()).collect::<Result<Vec<_>, _>>()?;
        if lits.is_empty() {
            return Err(ParseError::MalformedLiteral(s.trim().to_string()));
        }
        Ok(Self::new(lits))
    }
}

impl From<Lit> for Clause {
    fn from(lit: Lit) -> Self {
        Self(Vec::from([lit]))
    }
}

impl core::ops::Deref for Clause {
    type Target = Vec<Lit>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;
    type IntoIter = core::slice::Iter<'a, Lit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Clause {
    type Item = Lit;
    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl core::iter::FromIterator<Lit> for Clause {
    fn from_iter<I: IntoIterator<Item = Lit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[test]
fn canonical() {
    let cl: Clause = "R(x) | ~P(A,y)|Q(B)| P(x,x)".parse().unwrap();
    assert_eq!(cl.to_string(), "~P(A,y)|P(x,x)|Q(B)|R(x)");
    assert_eq!(cl.len(), 4);
    assert!(cl.has_constant() && !cl.is_ground());

    // reading the canonical form again yields the same clause
    let again: Clause = cl.to_string().parse().unwrap();
    assert_eq!(again, cl);

    let rest = cl.select(|i| i % 2 == 1);
    assert_eq!(rest.to_string(), "P(x,x)|R(x)");
    assert_eq!(Clause::default().to_string(), "⊥");
}

#[test]
fn verify() {
    let cl: Clause = "P(x)|Q(A)|P(x)".parse().unwrap();
    assert_eq!(cl.len(), 3);
    let cl = cl.verify().unwrap();
    assert_eq!(cl.to_string(), "P(x)|Q(A)");

    let single: Clause = "P(A)|P(A)".parse().unwrap();
    assert_eq!(single.verify().unwrap().to_string(), "P(A)");
    assert_eq!(Clause::default().verify(), None);
}

#[test]
#[should_panic]
fn literal_of_disjunction() {
    let cl: Clause = "P(A)|Q(A)".parse().unwrap();
    cl.literal();
}

#[test]
fn malformed() {
    assert!(matches!("".parse::<Clause>(), Err(ParseError::MalformedLiteral(_))));
    assert!(matches!("P(A)|q(B)".parse::<Clause>(), Ok(_)));
    assert!(matches!("P(A)|Q(b1)".parse::<Clause>(), Err(ParseError::MalformedTerm(_))));
}
