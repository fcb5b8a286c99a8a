use crate::Clause;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::iter::FromIterator;
use hashbrown::HashSet;
use log::trace;

/// Identity of a clause, assigned when the clause enters a knowledge base.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(usize);

/// A knowledge base is a set of clauses, ordered by their number of literals.
///
/// Shorter clauses come first, because they make progress fastest.
#[derive(Clone, Debug, Default)]
pub struct Kb {
    clauses: Vec<(Id, Clause)>,
    present: HashSet<Clause>,
    fresh: usize,
}

impl Display for Kb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.iter();
        if let Some(cl) = iter.next() {
            write!(f, "{}", cl)?;
            for cl in iter {
                write!(f, ", {}", cl)?;
            }
        }
        write!(f, "]")
    }
}

impl Kb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Return the clause at the given position together with its identity.
    pub fn get(&self, i: usize) -> (Id, &Clause) {
        let (id, cl) = &self.clauses[i];
        (*id, cl)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().map(|(_, cl)| cl)
    }

    pub fn contains(&self, cl: &Clause) -> bool {
        self.present.contains(cl)
    }

    /// Add a clause after collapsing its duplicate literals.
    ///
    /// Return true if the clause was new.
    /// Clauses that are empty or already present are discarded.
    pub fn update(&mut self, cl: Clause) -> bool {
        let cl = match cl.verify() {
            Some(cl) if !self.present.contains(&cl) => cl,
            _ => return false,
        };
        trace!("insert {}", cl);
        let id = Id(self.fresh);
        self.fresh += 1;
        self.present.insert(cl.clone());
        self.clauses.push((id, cl));
        self.clauses.sort_by_key(|(_, cl)| cl.len());
        true
    }
}

impl FromIterator<Clause> for Kb {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        let mut kb = Self::new();
        for cl in iter {
            kb.update(cl);
        }
        kb
    }
}

#[cfg(test)]
fn kb(clauses: &[&str]) -> Kb {
    clauses.iter().map(|cl| cl.parse::<Clause>().unwrap()).collect()
}

#[test]
fn update() {
    use alloc::string::ToString;
    let mut kb = kb(&["P(x)|Q(x)", "R(A)"]);
    assert_eq!(kb.to_string(), "[R(A), P(x)|Q(x)]");

    assert!(!kb.update("Q(x)|P(x)|P(x)".parse().unwrap()));
    assert!(!kb.update(Clause::default()));
    assert!(kb.update("S(A)|S(A)".parse().unwrap()));
    assert_eq!(kb.to_string(), "[R(A), S(A), P(x)|Q(x)]");
    assert!(kb.contains(&"S(A)".parse().unwrap()));
    assert_eq!(kb.len(), 3);
}

#[test]
fn identity() {
    let mut kb = kb(&["P(x)|Q(x)"]);
    let (id, _) = kb.get(0);
    kb.update("R(A)".parse().unwrap());
    // the clause moved, but kept its identity
    assert_eq!(kb.get(1), (id, &"P(x)|Q(x)".parse::<Clause>().unwrap()));
    assert_ne!(kb.get(0).0, id);
}
