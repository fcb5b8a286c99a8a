use refute::search::{Limit, Opt, Outcome, Search};
use refute::{Clause, Kb, Lit, Trace};

fn kb(clauses: &[&str]) -> Kb {
    clauses.iter().map(|cl| cl.parse::<Clause>().unwrap()).collect()
}

fn prove(clauses: &[&str], query: &str) -> Outcome {
    let query: Lit = query.parse().unwrap();
    Search::new(&query, &kb(clauses), (), Opt::default()).prove()
}

#[test]
fn contradiction() {
    assert_eq!(prove(&["P(A)"], "P(A)"), Outcome::Proved);
}

#[test]
fn saturation() {
    let query: Lit = "Q(A)".parse().unwrap();
    let kb = kb(&["P(A)"]);
    let mut search = Search::new(&query, &kb, (), Opt::default());
    assert_eq!(search.prove(), Outcome::Disproved(Limit::Saturation));
    assert_eq!(search.kb().len(), 2);
    // one unordered pair stands for both ordered pairs
    assert_eq!(search.stats().tried, 1);
    assert_eq!(search.stats().attempts, 0);
}

#[test]
fn saturation_bound() {
    let clauses = ["P(A)", "Q(B)|R(C)", "S(x)|T(x,y)", "~U(A)"];
    let query: Lit = "V(A)".parse().unwrap();
    let mut search = Search::new(&query, &kb(&clauses), (), Opt::default());
    assert_eq!(search.prove(), Outcome::Disproved(Limit::Saturation));
    let n = clauses.len() + 1;
    assert_eq!(search.stats().tried * 2, n * (n - 1));
    assert_eq!(search.stats().clauses, n);
}

#[test]
fn modus_ponens() {
    let clauses = ["~Parent(x,y)|Ancestor(x,y)", "Parent(Alice,Bob)"];
    assert_eq!(prove(&clauses, "Ancestor(Alice,Bob)"), Outcome::Proved);
    assert!(!prove(&clauses, "Ancestor(Bob,Alice)").is_proved());
    assert!(!prove(&clauses, "Parent(Bob,Alice)").is_proved());
}

#[test]
fn chain() {
    let clauses = [
        "~Take(x,Warfarin)|~Old(x)|Alert(x)",
        "Take(Alice,Warfarin)",
        "Old(Alice)",
        "Take(Bob,Warfarin)",
    ];
    assert!(prove(&clauses, "Alert(Alice)").is_proved());
    assert!(!prove(&clauses, "Alert(Bob)").is_proved());
}

#[test]
fn negated_query() {
    let clauses = ["~Sick(x)|~Healthy(x)", "Sick(Carl)"];
    assert!(prove(&clauses, "~Healthy(Carl)").is_proved());
    assert!(!prove(&clauses, "Healthy(Carl)").is_proved());
}

#[test]
fn shared_variables() {
    let clauses = ["~P(x)|~Q(x)", "P(A)|Q(y)|S(y)"];
    assert!(prove(&clauses, "S(A)").is_proved());
    assert!(!prove(&clauses, "S(B)").is_proved());

    let clauses = ["~P(x)|~Q(x)", "P(y)|Q(A)|S(y)"];
    assert!(prove(&clauses, "S(A)").is_proved());
    assert!(!prove(&clauses, "S(B)").is_proved());
}

#[test]
fn cross_match() {
    let clauses = ["P(x)|P(y)"];
    assert!(prove(&clauses, "P(A)").is_proved());
}

#[test]
fn trace() {
    let query: Lit = "Q(A)".parse().unwrap();
    let kb = kb(&["~P(x)|Q(x)", "P(A)"]);
    let mut trace = Trace::default();
    let outcome = Search::new(&query, &kb, &mut trace, Opt::default()).prove();
    assert_eq!(outcome, Outcome::Proved);

    let steps = trace.steps();
    let last = steps.last().unwrap();
    assert!(last.resolvent.is_empty());
    assert_eq!(steps.first().unwrap().resolvent.to_string(), "~P(A)");
    let text = trace.to_string();
    assert!(text.starts_with("[TARGET] ~Q(A)\n[MATCH] ~P(x)|Q(x)\n[RESULT] ~P(A)\n\n"));
    assert!(text.ends_with("[RESULT] ⊥\n\n"));
}

#[test]
fn cutoff() {
    let query: Lit = "Q(A)".parse().unwrap();
    let kb = kb(&["P(A)"]);

    let mut search = Search::new(&query, &kb, (), Opt { cutoff: 0 });
    assert_eq!(search.prove(), Outcome::Disproved(Limit::Cutoff));
    assert_eq!(search.stats().iterations, 1);

    let mut search = Search::new(&query, &kb, (), Opt { cutoff: 1 });
    assert_eq!(search.prove(), Outcome::Disproved(Limit::Saturation));
    assert_eq!(search.stats().iterations, 2);
}
