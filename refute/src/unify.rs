use crate::{Clause, Lit, Subst};

/// Outcome of applying a substitution to a clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unified {
    /// The clause has no literals.
    Empty,
    /// Some literal would get equal arguments at positions
    /// where it had different arguments before.
    Invalid,
    Success(Clause),
}

impl Unified {
    /// Return the resulting clause, where `Empty` yields the empty clause.
    pub fn remainder(self) -> Option<Clause> {
        match self {
            Self::Empty => Some(Clause::default()),
            Self::Invalid => None,
            Self::Success(cl) => Some(cl),
        }
    }
}

impl Lit {
    /// Apply a substitution to the arguments,
    /// unless it makes two previously different arguments equal.
    pub fn subst_distinct(&self, sub: &Subst) -> Option<Self> {
        let args = self.args().subst(sub);
        (!args.merges(self.args())).then(|| self.with_args(args))
    }
}

impl Clause {
    /// Apply a substitution to all literals of the clause.
    pub fn apply(&self, sub: &Subst) -> Unified {
        if self.is_empty() {
            return Unified::Empty;
        }
        match self.iter().map(|lit| lit.subst_distinct(sub)).collect::<Option<Clause>>() {
            Some(cl) => Unified::Success(cl),
            None => Unified::Invalid,
        }
    }
}

#[cfg(test)]
fn sub(bindings: &[(char, &str)]) -> Subst {
    let parse = |tm: &str| tm.parse::<crate::Term>().unwrap();
    bindings.iter().map(|(v, tm)| (*v, parse(tm))).collect()
}

#[test]
fn apply() {
    let cl: Clause = "P(x)|Q(y,B)".parse().unwrap();
    let unified = cl.apply(&sub(&[('x', "A")]));
    assert_eq!(unified, Unified::Success("P(A)|Q(y,B)".parse().unwrap()));

    // the empty substitution is the identity
    assert_eq!(cl.apply(&Subst::new()), Unified::Success(cl.clone()));

    // images are not substituted further
    let unified = cl.apply(&sub(&[('x', "y"), ('y', "A")]));
    assert_eq!(unified, Unified::Success("P(y)|Q(A,B)".parse().unwrap()));

    assert_eq!(Clause::default().apply(&sub(&[('x', "A")])), Unified::Empty);
}

#[test]
fn apply_invalid() {
    let cl: Clause = "P(x,A)".parse().unwrap();
    assert_eq!(cl.apply(&sub(&[('x', "A")])), Unified::Invalid);

    let cl: Clause = "Q(B)|P(x,y)".parse().unwrap();
    assert_eq!(cl.apply(&sub(&[('x', "A"), ('y', "A")])), Unified::Invalid);
    assert_eq!(cl.apply(&sub(&[('x', "y")])), Unified::Invalid);

    // arguments that were equal before may stay equal
    let cl: Clause = "P(x,x)".parse().unwrap();
    let unified = cl.apply(&sub(&[('x', "A")]));
    assert_eq!(unified, Unified::Success("P(A,A)".parse().unwrap()));
}
