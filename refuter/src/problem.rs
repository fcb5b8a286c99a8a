use crate::{Error, Kind};
use log::info;
use refute::{Clause, Kb, Lit};
use std::path::Path;
use std::str::FromStr;

/// Queries to be proved from clauses.
#[derive(Debug)]
pub struct Problem {
    pub queries: Vec<Lit>,
    pub clauses: Vec<Clause>,
}

/// Read a line with a count `n`, followed by `n` more lines.
fn section<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Result<Vec<&'a str>, Error> {
    let n = lines.next().ok_or(Kind::InputError)?.trim();
    let n: usize = n.parse().map_err(|e| Error::new(Kind::SyntaxError, Box::new(e)))?;
    (0..n)
        .map(|_| lines.next().ok_or_else(|| Error::from(Kind::InputError)))
        .collect()
}

impl Problem {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        info!("loading {:?}", path);
        std::fs::read_to_string(path)?.parse()
    }

    /// Knowledge base of the clauses, deduplicated and sorted by length.
    pub fn kb(&self) -> Kb {
        self.clauses.iter().cloned().collect()
    }

    fn literals(&self) -> impl Iterator<Item = &Lit> {
        self.queries.iter().chain(self.clauses.iter().flat_map(|cl| cl.iter()))
    }

    /// Fail if a predicate is used with different numbers of arguments.
    fn check_arities(&self) -> Result<(), Error> {
        let arities: Vec<_> = self.literals().map(|l| (l.predicate(), l.arity())).collect();
        let result = match refute::nonfunctional(&arities).next() {
            Some(p) => {
                let msg = format!("predicate {} used with different arities", p);
                Err(Error::new(Kind::SyntaxError, msg.into()))
            }
            None => Ok(()),
        };
        result
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let queries = section(&mut lines)?;
        let queries = queries.iter().map(|q| q.parse()).collect::<Result<Vec<Lit>, _>>()?;
        let clauses = section(&mut lines)?;
        let clauses = clauses.iter().map(|cl| cl.parse()).collect::<Result<Vec<Clause>, _>>()?;
        let problem = Self { queries, clauses };
        problem.check_arities()?;
        info!(
            "{} queries and {} clauses",
            problem.queries.len(),
            problem.clauses.len()
        );
        Ok(problem)
    }
}

#[test]
fn parse() {
    let problem: Problem = "2\nQ(A)\n~R(B,x)\n2\n~P(x)|Q(x)\nP(A)\n".parse().unwrap();
    assert_eq!(problem.queries.len(), 2);
    assert_eq!(problem.queries[1].to_string(), "~R(B,x)");
    assert_eq!(problem.clauses[0].to_string(), "~P(x)|Q(x)");
    assert_eq!(problem.kb().len(), 2);
}

#[test]
fn missing_lines() {
    let err = "2\nQ(A)\n".parse::<Problem>().unwrap_err();
    assert_eq!(err.get_kind(), &Kind::InputError);
    let err = "1\nQ(A)\n".parse::<Problem>().unwrap_err();
    assert_eq!(err.get_kind(), &Kind::InputError);
}

#[test]
fn arity_mismatch() {
    let err = "1\nQ(A)\n1\n~Q(x,y)\n".parse::<Problem>().unwrap_err();
    assert_eq!(err.get_kind(), &Kind::SyntaxError);
}
