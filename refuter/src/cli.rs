use clap::Parser;
use refute::search::Opt;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Prove queries from clauses by resolution refutation
///
/// Every input file contains queries and clauses.
/// For every query, the prover prints "TRUE" if
/// the clauses entail the query, otherwise "FALSE".
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Write results of the i-th input file to "output<i>.txt" in given directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write resolution steps to "matches_input<i>query<q>.txt" in given directory
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Write resolution graphs to "input<i>query<q>.dot" in given directory
    #[arg(long)]
    pub graph: Option<PathBuf>,

    /// Write proof search statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Give up after this many iterations without new clauses
    #[arg(long, default_value_t = 100_000)]
    pub cutoff: usize,

    /// Paths of the problem files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

fn join(dir: &Path, file: String) -> PathBuf {
    let mut path = dir.to_path_buf();
    path.push(file);
    path
}

impl Cli {
    pub fn opt(&self) -> Opt {
        Opt {
            cutoff: self.cutoff,
        }
    }

    /// Write the results of the `i`-th input file.
    pub fn output(&self, i: usize, out: impl Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(dir) => std::fs::write(join(dir, format!("output{}.txt", i)), out.to_string()),
            None => write!(std::io::stdout(), "{}", out),
        }
    }

    pub fn trace_path(&self, i: usize, q: usize) -> Option<PathBuf> {
        let file = || format!("matches_input{}query{}.txt", i, q);
        self.trace.as_ref().map(|dir| join(dir, file()))
    }

    pub fn graph_path(&self, i: usize, q: usize) -> Option<PathBuf> {
        let file = || format!("input{}query{}.dot", i, q);
        self.graph.as_ref().map(|dir| join(dir, file()))
    }
}
