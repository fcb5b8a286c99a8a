//! Prove queries stored in problem files by resolution refutation.
//!
//! A problem file consists of
//! a line with the number of queries, one query literal per line,
//! a line with the number of clauses, and one clause per line:
//!
//! ~~~ text
//! 1
//! Q(A)
//! 2
//! ~P(x)|Q(x)
//! P(A)
//! ~~~

mod cli;
mod error;
pub mod graph;
pub mod problem;

pub use cli::Cli;
pub use error::{Error, Kind};
pub use graph::Graph;
pub use problem::Problem;
