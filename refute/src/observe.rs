use crate::Clause;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Receiver of the resolution steps accepted by a search.
pub trait Observer {
    /// Resolving `matched` with `target` yielded `resolvent`.
    ///
    /// An empty resolvent marks the contradiction that ends a proof.
    fn resolved(&mut self, target: &Clause, matched: &Clause, resolvent: &Clause);
}

impl Observer for () {
    fn resolved(&mut self, _: &Clause, _: &Clause, _: &Clause) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn resolved(&mut self, target: &Clause, matched: &Clause, resolvent: &Clause) {
        (**self).resolved(target, matched, resolvent)
    }
}

impl<A: Observer, B: Observer> Observer for (A, B) {
    fn resolved(&mut self, target: &Clause, matched: &Clause, resolvent: &Clause) {
        self.0.resolved(target, matched, resolvent);
        self.1.resolved(target, matched, resolvent)
    }
}

/// Resolution step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub target: Clause,
    pub matched: Clause,
    pub resolvent: Clause,
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[TARGET] {}", self.target)?;
        writeln!(f, "[MATCH] {}", self.matched)?;
        writeln!(f, "[RESULT] {}", self.resolvent)
    }
}

/// Sequence of accepted resolution steps.
///
/// Printing a trace yields one block of
/// `[TARGET]`, `[MATCH]`, and `[RESULT]` lines per step,
/// separated by empty lines.
#[derive(Clone, Debug, Default)]
pub struct Trace(Vec<Step>);

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.0
    }
}

impl Observer for Trace {
    fn resolved(&mut self, target: &Clause, matched: &Clause, resolvent: &Clause) {
        self.0.push(Step {
            target: target.clone(),
            matched: matched.clone(),
            resolvent: resolvent.clone(),
        })
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|step| writeln!(f, "{}", step))
    }
}
