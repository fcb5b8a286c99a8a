use crate::resolve::{self, Resolution};
use crate::{Clause, Id, Kb, Lit, Observer, Stats};
use core::fmt::{self, Display};
use hashbrown::HashSet;
use log::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Search for a refutation of a query's negation.
///
/// The search sweeps over all pairs of clauses with two cursors,
/// the target and the source.
/// Every pair of clauses is tried at most once.
/// Whenever resolution yields a clause,
/// both cursors go back to the start of the (re-sorted) knowledge base.
pub struct Search<O> {
    kb: Kb,
    tried: HashSet<(Id, Id)>,
    target: usize,
    source: usize,
    /// iteration when the knowledge base last grew
    last_growth: usize,
    stats: Stats,
    observer: O,
    opt: Opt,
}

pub struct Opt {
    /// maximal number of iterations without new clauses
    pub cutoff: usize,
}

impl Default for Opt {
    fn default() -> Self {
        Self { cutoff: 100_000 }
    }
}

/// Reason why a query could not be proved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Limit {
    /// all pairs of clauses were tried
    Saturation,
    /// the knowledge base did not grow for too long
    Cutoff,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Outcome {
    Proved,
    Disproved(Limit),
}

impl Outcome {
    pub fn is_proved(&self) -> bool {
        matches!(self, Self::Proved)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proved => write!(f, "TRUE"),
            Self::Disproved(_) => write!(f, "FALSE"),
        }
    }
}

/// What to do after an iteration.
enum Action {
    /// move the cursors to the next pair
    Advance,
    /// restart from the first pair
    Reset,
    Proved,
}

impl<O: Observer> Search<O> {
    /// Prepare a search for a proof of `query` from the clauses in `kb`.
    ///
    /// The search works on its own copy of the knowledge base,
    /// starting with the negated query.
    pub fn new(query: &Lit, kb: &Kb, observer: O, opt: Opt) -> Self {
        let mut own = Kb::new();
        own.update(Clause::from(-query.clone()));
        for cl in kb.iter() {
            own.update(cl.clone());
        }
        Self {
            kb: own,
            tried: HashSet::new(),
            target: 0,
            source: 1,
            last_growth: 0,
            stats: Stats::default(),
            observer,
            opt,
        }
    }

    pub fn kb(&self) -> &Kb {
        &self.kb
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn prove(&mut self) -> Outcome {
        info!("prove with {} clauses: {}", self.kb.len(), self.kb);
        let outcome = loop {
            self.stats.iterations += 1;
            let n = self.kb.len();
            // every ordered pair of distinct clauses has been tried
            if 2 * self.tried.len() >= n * n.saturating_sub(1) {
                break Outcome::Disproved(Limit::Saturation);
            }
            if self.stats.iterations - self.last_growth > self.opt.cutoff {
                break Outcome::Disproved(Limit::Cutoff);
            }
            match self.step() {
                Action::Advance => self.advance(),
                Action::Reset => {
                    self.target = 0;
                    self.source = 0;
                }
                Action::Proved => break Outcome::Proved,
            }
        };
        self.stats.tried = self.tried.len();
        self.stats.clauses = self.kb.len();
        info!("{:?} after {} iterations", outcome, self.stats.iterations);
        outcome
    }

    fn advance(&mut self) {
        self.source += 1;
        if self.source >= self.kb.len() {
            self.source = 0;
            self.target += 1;
        }
        if self.target >= self.kb.len() {
            self.target = 0;
        }
        trace!("target {}, source {}", self.target, self.source);
    }

    fn step(&mut self) -> Action {
        if self.source == self.target {
            return Action::Advance;
        }
        let (sid, matched) = self.kb.get(self.source);
        let (tid, target) = self.kb.get(self.target);
        let pair = if sid < tid { (sid, tid) } else { (tid, sid) };
        if !self.tried.insert(pair) {
            return Action::Advance;
        }
        if resolve::complementary(matched, target).next().is_none() {
            return Action::Advance;
        }

        debug!("resolve {} with {}", matched, target);
        self.stats.attempts += 1;
        let (matched, target) = (matched.clone(), target.clone());
        match resolve::resolve(&matched, &target) {
            Resolution::Fail => {
                debug!("resolution failed");
                Action::Advance
            }
            Resolution::Success(resolvent) => self.accept(&target, &matched, resolvent),
            Resolution::Multi(resolvents) => {
                debug!("{} resolvents from cross-matched literals", resolvents.len());
                for resolvent in resolvents {
                    if let Action::Proved = self.accept(&target, &matched, resolvent) {
                        return Action::Proved;
                    }
                }
                Action::Reset
            }
        }
    }

    fn accept(&mut self, target: &Clause, matched: &Clause, resolvent: Clause) -> Action {
        debug!("resolvent: {}", resolvent);
        self.observer.resolved(target, matched, &resolvent);
        self.stats.resolvents += 1;
        if resolvent.is_empty() {
            return Action::Proved;
        }
        if self.kb.update(resolvent) {
            self.stats.growth += 1;
            self.last_growth = self.stats.iterations;
        }
        Action::Reset
    }
}
