use refute::search::{Opt, Search};
use refute::Clause;
use refuter::{Graph, Kind, Problem};

const PROBLEM: &str = "\
2
Q(A)
Q(B)
2
~P(x)|Q(x)
P(A)
";

#[test]
fn solve() {
    let problem: Problem = PROBLEM.parse().unwrap();
    let kb = problem.kb();
    let results: Vec<_> = problem
        .queries
        .iter()
        .map(|q| Search::new(q, &kb, (), Opt::default()).prove().to_string())
        .collect();
    assert_eq!(results, vec!["TRUE", "FALSE"]);
}

#[test]
fn graph() {
    let problem: Problem = PROBLEM.parse().unwrap();
    let query = &problem.queries[0];
    let mut graph = Graph::new(Clause::from(-query.clone()));
    let mut search = Search::new(query, &problem.kb(), &mut graph, Opt::default());
    assert!(search.prove().is_proved());

    assert_eq!(graph.steps(), 2);
    let dot = graph.dot();
    assert!(dot.starts_with("digraph"));
    assert_eq!(dot.matches("->").count(), 4);
    assert_eq!(dot.matches("doublecircle").count(), 1);
    assert_eq!(dot.matches("star").count(), 1);
    assert!(dot.contains("{}"));
}

#[test]
fn syntax_error() {
    let err = "1\nQ(A\n0\n".parse::<Problem>().unwrap_err();
    assert_eq!(err.get_kind(), &Kind::SyntaxError);
    let err = "1\nQ(A)\nmany\n".parse::<Problem>().unwrap_err();
    assert_eq!(err.get_kind(), &Kind::SyntaxError);
    let err = "1\nQ(A)\n1\nP(ab)|Q(x)\n".parse::<Problem>().unwrap_err();
    assert_eq!(err.get_kind(), &Kind::SyntaxError);
    let detail = err.get_error().as_ref().unwrap().to_string();
    assert!(detail.contains("ab"));
}

#[test]
fn input_error() {
    let err = "".parse::<Problem>().unwrap_err();
    assert_eq!(err.get_kind(), &Kind::InputError);
    assert!(err.get_error().is_none());
}
