use crate::Term;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use hashbrown::HashMap;

/// Map from variables to terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subst(HashMap<char, Term>);

impl Display for Subst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dom: Vec<_> = self.0.iter().collect();
        dom.sort_unstable_by_key(|(v, _)| **v);
        write!(f, "{{")?;
        let mut iter = dom.into_iter();
        if let Some((v, tm)) = iter.next() {
            write!(f, "{} ↦ {}", v, tm)?;
            for (v, tm) in iter {
                write!(f, ", {} ↦ {}", v, tm)?;
            }
        }
        write!(f, "}}")
    }
}

impl Subst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of assigned variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtain a variable binding.
    pub fn get(&self, v: char) -> Option<&Term> {
        self.0.get(&v)
    }

    /// Follow a variable through the substitution.
    ///
    /// Images are always constants or unbound variables,
    /// so one lookup suffices.
    fn root(&self, v: char) -> Term {
        self.get(v).cloned().unwrap_or(Term::V(v))
    }

    /// Replace every image `old` by `new`.
    fn repoint(&mut self, old: &Term, new: &Term) {
        for tm in self.0.values_mut() {
            if tm == old {
                *tm = new.clone();
            }
        }
    }

    /// Bind a variable to a constant.
    ///
    /// Variables that alias the same variable are bound to the constant, too.
    /// Return false if the variable is already bound to a different constant.
    pub fn bind(&mut self, v: char, c: &Term) -> bool {
        match self.root(v) {
            old @ Term::C(_) => old == *c,
            Term::V(r) => {
                self.repoint(&Term::V(r), c);
                self.0.insert(r, c.clone());
                true
            }
        }
    }

    /// Identify two variables.
    ///
    /// If one of them is bound to a constant, the other one is bound to it.
    /// Return false if they are bound to different constants.
    pub fn alias(&mut self, v: char, w: char) -> bool {
        match (self.root(v), self.root(w)) {
            (Term::V(r), Term::V(s)) if r == s => true,
            (Term::V(r), s @ Term::V(_)) => {
                self.repoint(&Term::V(r), &s);
                self.0.insert(r, s);
                true
            }
            (Term::V(r), c @ Term::C(_)) | (c @ Term::C(_), Term::V(r)) => self.bind(r, &c),
            (c, d) => c == d,
        }
    }
}

impl core::iter::FromIterator<(char, Term)> for Subst {
    fn from_iter<I: IntoIterator<Item = (char, Term)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[test]
fn bind() {
    use alloc::string::ToString;
    let a = Term::C("A".to_string());
    let b = Term::C("B".to_string());

    let mut sub = Subst::new();
    assert!(sub.bind('x', &a));
    assert!(sub.bind('x', &a));
    assert!(!sub.bind('x', &b));
    assert_eq!(sub.get('x'), Some(&a));
    assert_eq!(sub.len(), 1);
    assert_eq!(sub.to_string(), "{x ↦ A}");
}

#[test]
fn alias_then_bind() {
    use alloc::string::ToString;
    let a = Term::C("A".to_string());

    let mut sub = Subst::new();
    assert!(sub.alias('x', 'y'));
    assert!(sub.alias('z', 'x'));
    assert_eq!(sub.get('z'), Some(&Term::V('y')));
    assert!(sub.bind('y', &a));
    assert_eq!(sub.to_string(), "{x ↦ A, y ↦ A, z ↦ A}");
    assert_eq!(Term::V('z').subst(&sub), a);
}

#[test]
fn bind_then_alias() {
    use alloc::string::ToString;
    let a = Term::C("A".to_string());
    let b = Term::C("B".to_string());

    let mut sub = Subst::new();
    assert!(sub.bind('x', &a));
    assert!(sub.alias('y', 'x'));
    assert_eq!(sub.get('y'), Some(&a));
    assert!(sub.alias('x', 'y'));

    assert!(sub.bind('z', &b));
    assert!(!sub.alias('z', 'y'));
    assert!(!sub.alias('x', 'z'));
}
