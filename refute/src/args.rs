use crate::{Subst, Term};
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Arguments of a predicate, printed as `(a,b,c)`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Args<T>(Vec<T>);

impl<T: Display> Display for Args<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            arg.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T: PartialEq> Args<T> {
    /// Return whether the arguments at two different positions are equal.
    pub fn identifies(&self, i: usize, j: usize) -> bool {
        i != j && self.0[i] == self.0[j]
    }

    /// Return whether the substitution of `self` equates
    /// arguments that `other` keeps apart.
    pub fn merges(&self, other: &Self) -> bool {
        let n = self.len();
        let mut pairs = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j)));
        pairs.any(|(i, j)| self.identifies(i, j) && !other.identifies(i, j))
    }
}

impl Args<Term> {
    pub fn is_ground(&self) -> bool {
        self.iter().all(Term::is_const)
    }

    pub fn has_constant(&self) -> bool {
        self.iter().any(Term::is_const)
    }

    pub fn subst(&self, sub: &Subst) -> Self {
        self.iter().map(|tm| tm.subst(sub)).collect()
    }
}

impl<'a, T> IntoIterator for &'a Args<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> core::iter::FromIterator<T> for Args<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> core::ops::Deref for Args<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[test]
fn merges() {
    let args = |s: &[&str]| -> Args<Term> { s.iter().map(|t| t.parse().unwrap()).collect() };
    let before = args(&["x", "y", "x"]);
    assert!(!before.merges(&before));
    assert!(args(&["A", "A", "A"]).merges(&before));
    assert!(!args(&["A", "B", "A"]).merges(&before));
}
