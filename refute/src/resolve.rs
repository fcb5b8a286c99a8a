//! Binary resolution of clauses, including cross-matched literals.

use crate::{Clause, Lit, Subst, Term, Unified};
use alloc::vec::Vec;
use log::{debug, trace};

/// Result of resolving two clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The clauses do not resolve.
    Fail,
    /// A single resolvent. The empty clause signals a contradiction.
    Success(Clause),
    /// One resolvent for every pairing of cross-matched literals.
    Multi(Vec<Clause>),
}

/// Positions of complementary literals in the first and the second clause.
pub type Pair = (usize, usize);

/// Return the positions of all complementary literals of two clauses.
pub fn complementary<'a>(c1: &'a Clause, c2: &'a Clause) -> impl Iterator<Item = Pair> + 'a {
    let iter = c1.iter().enumerate();
    iter.flat_map(move |(i, l1)| {
        let iter = c2.iter().enumerate();
        iter.filter(move |(_, l2)| l1.is_complement(l2))
            .map(move |(j, _)| (i, j))
    })
}

/// Zip the arguments of two complementary literals.
///
/// Panic if the literals have different arities,
/// because then the clause set uses the same predicate inconsistently.
fn zip<'a>(l1: &'a Lit, l2: &'a Lit) -> impl Iterator<Item = (&'a Term, &'a Term)> {
    assert_eq!(
        l1.arity(),
        l2.arity(),
        "arity mismatch between {} and {}",
        l1,
        l2
    );
    l1.args().iter().zip(l2.args().iter())
}

/// Return false if the literals have different constants at some position.
fn constants_agree(l1: &Lit, l2: &Lit) -> bool {
    zip(l1, l2).all(|args| match args {
        (Term::C(c1), Term::C(c2)) => c1 == c2,
        _ => true,
    })
}

/// Return true if some position of the literals holds a constant.
fn grounds(l1: &Lit, l2: &Lit) -> bool {
    zip(l1, l2).any(|(t1, t2)| t1.is_const() || t2.is_const())
}

/// Extend a substitution such that it maps the two literals' arguments together.
///
/// Variables are followed through the substitution first,
/// so the order of the argument positions does not matter.
/// Return false if a variable would be bound to two different constants.
fn bind(sub: &mut Subst, l1: &Lit, l2: &Lit) -> bool {
    zip(l1, l2).all(|args| match args {
        (Term::V(v), c @ Term::C(_)) | (c @ Term::C(_), Term::V(v)) => sub.bind(*v, c),
        (Term::V(v), Term::V(w)) => sub.alias(*v, *w),
        (Term::C(c1), Term::C(c2)) => c1 == c2,
    })
}

/// Return true if no chosen pair shares a position with the given pair.
fn disjoint(chosen: &[Pair], (i, j): Pair) -> bool {
    chosen.iter().all(|&(k, l)| k != i && l != j)
}

/// Enumerate all maximal sets of pairs that do not share positions.
///
/// The number of such sets grows exponentially with the number of pairs.
///
/// ~~~
/// # use refute::resolve::pairings;
/// let pairs = [(0, 0), (0, 1), (1, 0), (1, 1)];
/// let expected = vec![vec![(0, 0), (1, 1)], vec![(0, 1), (1, 0)]];
/// assert_eq!(pairings(&pairs), expected);
/// ~~~
pub fn pairings(pairs: &[Pair]) -> Vec<Vec<Pair>> {
    fn go(all: &[Pair], rest: &[Pair], chosen: &mut Vec<Pair>, out: &mut Vec<Vec<Pair>>) {
        match rest.split_first() {
            Some((&pair, rest)) => {
                if disjoint(chosen, pair) {
                    chosen.push(pair);
                    go(all, rest, chosen, out);
                    chosen.pop();
                }
                go(all, rest, chosen, out)
            }
            // every pair is either chosen or conflicts with a chosen one
            None if all.iter().all(|&pair| !disjoint(chosen, pair)) => out.push(chosen.clone()),
            None => (),
        }
    }
    let mut out = Vec::new();
    go(pairs, pairs, &mut Vec::new(), &mut out);
    out
}

/// Remove the literals at the given pairs from both clauses,
/// apply the substitution to the remaining literals, and join them.
///
/// If no literal remains, the result is the empty clause only if
/// the pair is a perfect complement or
/// at least one of the clauses is ground.
fn resolve_pairs(
    c1: &Clause,
    c2: &Clause,
    pairs: &[Pair],
    sub: &Subst,
    perfect: bool,
) -> Resolution {
    let rest1 = c1.select(|i| pairs.iter().all(|p| p.0 != i));
    let rest2 = c2.select(|j| pairs.iter().all(|p| p.1 != j));
    match (rest1.apply(sub), rest2.apply(sub)) {
        (Unified::Empty, Unified::Empty) => {
            if perfect || c1.is_ground() || c2.is_ground() {
                Resolution::Success(Clause::default())
            } else {
                Resolution::Fail
            }
        }
        (r1, r2) => match (r1.remainder(), r2.remainder()) {
            (Some(r1), Some(r2)) => Resolution::Success(r1.union(r2)),
            _ => Resolution::Fail,
        },
    }
}

/// Resolve two clauses on all their complementary literals.
///
/// Pairs of complementary literals that share a literal with
/// another pair are cross-matched.
/// If there are no cross-matched pairs,
/// a single substitution is built from all pairs and
/// all paired literals are resolved away at once.
/// Otherwise, every maximal pairing of cross-matched literals
/// yields its own substitution and resolvent;
/// if any of them fails, the whole resolution fails.
pub fn resolve(c1: &Clause, c2: &Clause) -> Resolution {
    let pairs: Vec<Pair> = complementary(c1, c2).collect();
    let lits = |&(i, j): &Pair| (&c1[i], &c2[j]);

    if !pairs.iter().map(lits).all(|(l1, l2)| constants_agree(l1, l2)) {
        debug!("constant mismatch");
        return Resolution::Fail;
    }

    let crossed = |&(i, j): &Pair| pairs.iter().filter(|p| p.0 == i || p.1 == j).count() > 1;
    let (cross, pairs): (Vec<Pair>, Vec<Pair>) = pairs.iter().partition(|&p| crossed(p));

    let perfect = pairs.len() == 1 && c1.len() == 1;
    let ground = cross.iter().chain(&pairs).map(lits).any(|(l1, l2)| grounds(l1, l2));
    if !ground && !perfect {
        debug!("imperfect complement");
        return Resolution::Fail;
    }

    let subst = |pairs: &[Pair]| {
        let mut sub = Subst::new();
        let bound = pairs.iter().map(lits).all(|(l1, l2)| bind(&mut sub, l1, l2));
        bound.then(|| sub)
    };

    if cross.is_empty() {
        let sub = match subst(&pairs) {
            Some(sub) => sub,
            None => return Resolution::Fail,
        };
        trace!("resolve on {:?} with {}", pairs, sub);
        return resolve_pairs(c1, c2, &pairs, &sub, perfect);
    }

    let choices = pairings(&cross);
    debug!("{} cross-matched pairs, {} pairings", cross.len(), choices.len());
    let mut resolvents = Vec::with_capacity(choices.len());
    for pairing in choices {
        let mut all = pairs.clone();
        all.extend(pairing);
        let resolvent = match subst(&all) {
            Some(sub) => {
                trace!("resolve on {:?} with {}", all, sub);
                resolve_pairs(c1, c2, &all, &sub, perfect)
            }
            None => Resolution::Fail,
        };
        match resolvent {
            Resolution::Success(r) => resolvents.push(r),
            _ => return Resolution::Fail,
        }
    }
    Resolution::Multi(resolvents)
}

#[cfg(test)]
fn resolve_str(c1: &str, c2: &str) -> Resolution {
    resolve(&c1.parse().unwrap(), &c2.parse().unwrap())
}

#[cfg(test)]
fn success(cl: &str) -> Resolution {
    Resolution::Success(cl.parse().unwrap())
}

#[test]
fn contradiction() {
    let empty = Resolution::Success(Clause::default());
    assert_eq!(resolve_str("P(A)", "~P(A)"), empty);
    assert_eq!(resolve_str("~P(x)", "P(A)"), empty);
    assert_eq!(resolve_str("~P(x,B)", "P(A,y)"), empty);
}

#[test]
fn single_pair() {
    assert_eq!(resolve_str("~P(x)|Q(x)", "P(A)"), success("Q(A)"));
    assert_eq!(resolve_str("~Q(A)", "~P(x)|Q(x)"), success("~P(A)"));
    let resolvent = resolve_str("~P(x,y)|R(y,x)", "P(A,z)|S(z)");
    assert_eq!(resolvent, success("R(z,A)|S(z)"));
    // perfect complement of variables only
    assert_eq!(resolve_str("~P(x)", "P(y)|R(y)"), success("R(y)"));
}

#[test]
fn fail() {
    // constant mismatch
    assert_eq!(resolve_str("P(A)", "~P(B)"), Resolution::Fail);
    assert_eq!(resolve_str("P(A)|Q(x)", "~P(B)|~P(A)"), Resolution::Fail);
    // imperfect complement: no constant anywhere
    assert_eq!(resolve_str("P(x)|Q(x)", "~P(y)"), Resolution::Fail);
    // substitution makes two different arguments equal
    assert_eq!(resolve_str("~P(x)|Q(x,A)", "P(A)"), Resolution::Fail);
    // variable bound to different constants
    let resolvent = resolve_str("~P(x)|~Q(x)|R(x)", "P(A)|Q(B)");
    assert_eq!(resolvent, Resolution::Fail);
}

#[test]
fn several_pairs() {
    // all pairs are resolved away under one substitution
    let resolvent = resolve_str("~P(x)|~Q(x)|R(x)", "P(A)|Q(A)");
    assert_eq!(resolvent, success("R(A)"));
    // nothing remains, but one of the clauses is ground
    let resolvent = resolve_str("P(A)|Q(A)", "~P(A)|~Q(A)");
    assert_eq!(resolvent, Resolution::Success(Clause::default()));
    // nothing remains, and both clauses have variables
    let resolvent = resolve_str("P(x)|Q(A)", "~P(B)|~Q(y)");
    assert_eq!(resolvent, Resolution::Fail);
}

#[test]
fn shared_variables() {
    // y = x is learnt after x ↦ A
    let resolvent = resolve_str("P(A)|Q(y)|S(y)", "~P(x)|~Q(x)");
    assert_eq!(resolvent, success("S(A)"));
    assert_eq!(resolve_str("~P(x)|~Q(x)", "P(A)|Q(y)|S(y)"), success("S(A)"));
    // x = y is learnt before x ↦ A
    let resolvent = resolve_str("~P(x)|~Q(x)", "P(y)|Q(A)|S(y)");
    assert_eq!(resolvent, success("S(A)"));
    // x = y, but x ↦ A and y ↦ B
    let resolvent = resolve_str("~P(x)|~Q(x,y)|~R(y)", "P(A)|Q(z,z)|R(B)");
    assert_eq!(resolvent, Resolution::Fail);
}

#[test]
fn cross_match() {
    let c1: Clause = "P(x)|P(y)".parse().unwrap();
    let c2: Clause = "~P(A)|~P(B)".parse().unwrap();
    let pairs: Vec<_> = complementary(&c1, &c2).collect();
    assert_eq!(pairs.len(), 4);
    // (x ↦ A, y ↦ B) and (x ↦ B, y ↦ A) both consume all literals
    let empty = Clause::default();
    assert_eq!(resolve(&c1, &c2), Resolution::Multi(Vec::from([empty.clone(), empty])));

    let resolvents = Vec::from(["~P(B)", "~P(A)"].map(|cl| cl.parse().unwrap()));
    assert_eq!(resolve_str("P(x)", "~P(A)|~P(B)"), Resolution::Multi(resolvents));

    let resolvents = Vec::from(["Q(A)|R(B)", "Q(B)|R(A)"].map(|cl| cl.parse().unwrap()));
    let resolvent = resolve_str("P(x)|P(y)|Q(x)", "~P(A)|~P(B)|R(y)");
    assert_eq!(resolvent, Resolution::Multi(resolvents));

    // ordinary pairs are resolved in every pairing
    let resolvents = Vec::from(["~P(B)|R(y)", "~P(A)|R(y)"].map(|cl| cl.parse().unwrap()));
    let resolvent = resolve_str("~S(z)|P(x)|R(y)", "S(C)|~P(A)|~P(B)");
    assert_eq!(resolvent, Resolution::Multi(resolvents));
}

#[test]
fn cross_match_fail() {
    // the second pairing binds x to A and B
    let resolvent = resolve_str("P(x)|Q(x)", "~P(A)|~P(B)|~Q(A)");
    assert_eq!(resolvent, Resolution::Fail);
}

#[test]
#[should_panic]
fn arity_mismatch() {
    resolve_str("P(A)", "~P(A,B)");
}

#[test]
fn pairings_grow() {
    let pairs = |n: usize| -> Vec<Pair> {
        let iter = (0..n).flat_map(|i| (0..n).map(move |j| (i, j)));
        iter.collect()
    };
    assert_eq!(pairings(&pairs(3)).len(), 6);
    assert_eq!(pairings(&pairs(4)).len(), 24);
}
