//! Resolution refutation for first-order clauses.
//!
//! A query is proved by adding its negation to a knowledge base and
//! resolving clauses until the empty clause appears.
//! The search only ever tries one substitution per way of pairing
//! complementary literals, so it is sound with respect to its own rules,
//! but not complete.
//!
//! ~~~
//! use refute::{search::Search, Clause, Kb, Lit};
//! let kb: Kb = ["~P(x)|Q(x)", "P(A)"]
//!     .iter()
//!     .map(|s| s.parse::<Clause>().unwrap())
//!     .collect();
//! let query: Lit = "Q(A)".parse().unwrap();
//! let mut search = Search::new(&query, &kb, (), Default::default());
//! assert!(search.prove().is_proved());
//! ~~~

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod search;

mod app;
mod args;
mod clause;
mod error;
mod kb;
mod literal;
mod observe;
pub mod resolve;
mod signed;
mod stats;
mod subst;
mod term;
mod unify;

pub use app::App;
pub use args::Args;
pub use clause::Clause;
pub use error::ParseError;
pub use kb::{Id, Kb};
pub use literal::Lit;
pub use observe::{Observer, Step, Trace};
pub use resolve::Resolution;
pub use signed::Signed;
pub use stats::Stats;
pub use subst::Subst;
pub use term::Term;
pub use unify::Unified;

use alloc::vec::Vec;
use core::hash::Hash;

/// Return the keys that are mapped to more than one different value.
///
/// ~~~
/// let arities = [("P", 1), ("Q", 2), ("P", 1), ("Q", 1)];
/// let mismatch: Vec<_> = refute::nonfunctional(&arities).collect();
/// assert_eq!(mismatch, vec![&"Q"]);
/// ~~~
pub fn nonfunctional<K: Eq + Hash, V: Eq>(kv: &[(K, V)]) -> impl Iterator<Item = &K> {
    let iter = kv.iter().scan(hashbrown::HashMap::new(), |map, (k, v)| {
        Some(map.insert(k, v).and_then(|v_old| (v != v_old).then(|| k)))
    });
    iter.flatten()
}

/// Remove duplicates, keeping the first occurrence of every element.
fn keep_first<T: Eq>(v: impl Iterator<Item = T>) -> Vec<T> {
    let mut result = Vec::new();
    for x in v {
        if result.iter().all(|y| x != *y) {
            result.push(x)
        }
    }
    result
}
