use clap::Parser;
use log::info;
use refute::search::{Outcome, Search};
use refute::{Clause, Stats, Trace};
use refuter::{Cli, Error, Graph, Problem};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Statistics of the search for one query.
#[derive(Serialize)]
struct Record<'a> {
    file: &'a Path,
    query: String,
    outcome: Outcome,
    stats: Stats,
}

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {:?}", e.get_kind());
        if let Some(e) = e.get_error() {
            eprintln!("{}", e)
        }
        std::process::exit(1);
    }
}

fn write_trace(path: &Path, clauses: &[Clause], trace: &Trace) -> Result<(), Error> {
    info!("saving resolution steps to {:?}", path);
    let mut f = File::create(path)?;
    for cl in clauses {
        writeln!(f, "{}", cl)?;
    }
    writeln!(f, "{}", trace.steps().len())?;
    write!(f, "{}", trace)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut records = Vec::new();
    for (i, file) in (1..).zip(&cli.files) {
        let problem = Problem::from_file(file)?;
        let kb = problem.kb();
        info!("kb: {}", kb);

        let mut results = String::new();
        for (q, query) in (1..).zip(&problem.queries) {
            info!("query {}: {}", q, query);
            let mut trace = Trace::default();
            let mut graph = Graph::new(Clause::from(-query.clone()));
            let observer = (&mut trace, &mut graph);
            let mut search = Search::new(query, &kb, observer, cli.opt());
            let outcome = search.prove();
            let stats = search.stats().clone();
            info!("{} after {} resolution steps", outcome, graph.steps());

            if let Some(path) = cli.trace_path(i, q) {
                write_trace(&path, &problem.clauses, &trace)?;
            }
            if let Some(path) = cli.graph_path(i, q) {
                info!("saving resolution graph to {:?}", path);
                std::fs::write(path, graph.dot())?;
            }

            results.push_str(&format!("{}\n", outcome));
            let query = query.to_string();
            records.push(Record { file, query, outcome, stats });
        }
        cli.output(i, results)?;
    }

    if let Some(path) = &cli.stats {
        let f = File::create(path)?;
        serde_json::to_writer_pretty(f, &records)?;
    }
    Ok(())
}
