use std::path::PathBuf;
use allsat::{Error, Formula, Solution, Variable};
use rayon::prelude::*;

fn fixture(name: &str) -> Formula {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let content = std::fs::read_to_string(&path).unwrap();
    Formula::from_problem(&content).unwrap()
}

fn solution(values: &[(&str, bool)]) -> Solution {
    values.iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[test]
fn contradicting_unit_clauses() {
    let a = Variable::new("A");

    let formula = Formula::new();
    formula.add_clause(vec![&a]).unwrap();
    formula.add_clause(vec![!&a]).unwrap();

    assert_eq!(formula.satisfiable(), (false, vec![]));
}

#[test]
fn tautology() {
    let a = Variable::new("A");

    let formula = Formula::new();
    formula.add_clause(vec![a.clone(), a.negate()]).unwrap();

    let (satisfiable, solutions) = formula.satisfiable();
    assert!(satisfiable);
    assert_eq!(solutions, vec![
        solution(&[("A", false)]),
        solution(&[("A", true)]),
    ]);
}

#[test]
fn disjunction() {
    let formula = Formula::new();
    formula.add_clause(vec![Variable::new("A"), Variable::new("B")]).unwrap();

    let (satisfiable, solutions) = formula.satisfiable();
    assert!(satisfiable);
    assert_eq!(solutions, vec![
        solution(&[("A", false), ("B", true)]),
        solution(&[("A", true), ("B", false)]),
        solution(&[("A", true), ("B", true)]),
    ]);
}

#[test]
fn implication_forces_its_conclusion() {
    let a = Variable::new("A");
    let b = Variable::new("B");

    let formula = Formula::new();
    formula.add_clause(vec![&a]).unwrap();
    formula.add_clause(vec![!&a, b.clone()]).unwrap();

    let (satisfiable, solutions) = formula.satisfiable();
    assert!(satisfiable);
    assert!(solutions.iter().all(|solution| solution.value("A") == Some(true)));
    assert_eq!(solutions, vec![solution(&[("A", true), ("B", true)])]);
}

#[test]
fn exactly_one_of_three() {
    let b1 = Variable::new("B1");
    let b2 = Variable::new("B2");
    let b3 = Variable::new("B3");

    let formula = Formula::new();
    formula.add_clause(vec![!&b1, !&b2]).unwrap();
    formula.add_clause(vec![!&b1, !&b3]).unwrap();
    formula.add_clause(vec![!&b2, !&b3]).unwrap();
    formula.add_clause(vec![&b1, &b2, &b3]).unwrap();

    let (satisfiable, solutions) = formula.satisfiable();
    assert!(satisfiable);
    assert_eq!(solutions.len(), 3);
    for solution in &solutions {
        let true_count = ["B1", "B2", "B3"].iter()
            .filter(|name| solution.value(name) == Some(true))
            .count();
        assert_eq!(true_count, 1);
    }
}

#[test]
fn dependency_selection() {
    let a = Variable::new("A");
    let b1 = Variable::new("B1");
    let b2 = Variable::new("B2");
    let b3 = Variable::new("B3");

    let formula = Formula::new();
    formula.add_clause(vec![&a]).unwrap();
    formula.add_clause(vec![!&a, b1.clone(), b2.clone(), b3.clone()]).unwrap();
    formula.add_clause(vec![!&b1, !&b2]).unwrap();
    formula.add_clause(vec![!&b1, !&b3]).unwrap();
    formula.add_clause(vec![!&b2, !&b3]).unwrap();

    let (satisfiable, solutions) = formula.satisfiable();
    assert!(satisfiable);
    let rendered: Vec<String> = solutions.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec![
        "A = true\tB1 = false\tB2 = false\tB3 = true",
        "A = true\tB1 = false\tB2 = true\tB3 = false",
        "A = true\tB1 = true\tB2 = false\tB3 = false",
    ]);
}

#[test]
fn empty_formula_has_one_empty_solution() {
    let formula = Formula::new();

    let (satisfiable, solutions) = formula.satisfiable();
    assert!(satisfiable);
    assert_eq!(solutions, vec![Solution::new()]);
}

#[test]
fn empty_clause_is_refused() {
    let formula = Formula::new();
    formula.add_clause(vec![Variable::new("A")]).unwrap();

    let result = formula.add_clause(Vec::<Variable>::new());
    assert!(matches!(result, Err(Error::EmptyClause)));
    assert_eq!(formula.num_clauses(), 1);
    assert_eq!(formula.satisfiable().1.len(), 1);
}

#[test]
fn variables_are_numbered_by_first_appearance() {
    let formula = Formula::new();
    formula.add_clause(vec![Variable::new("Z"), Variable::new("A")]).unwrap();
    formula.add_clause(vec![Variable::new("M"), !Variable::new("Z")]).unwrap();

    assert_eq!(formula.variable_names(), vec!["Z", "A", "M"]);
    assert_eq!(formula.var_id("M"), Some(2));
    assert_eq!(formula.var_id("Q"), None);
    assert_eq!(formula.to_string(), "(Z ∨ A) ∧ (¬Z ∨ M)");
}

#[test]
fn duplicate_literals_are_merged() {
    let a = Variable::new("A");

    let formula = Formula::new();
    formula.add_clause(vec![&a, &a, &a]).unwrap();

    assert_eq!(formula.clauses()[0].len(), 1);
    assert_eq!(formula.satisfiable().1, vec![solution(&[("A", true)])]);
}

#[test]
fn decoding() {
    let formula = Formula::new();
    formula.add_clause(vec![Variable::new("x"), !Variable::new("y")]).unwrap();

    let clauses = formula.clauses();
    let literals = clauses[0].literals();
    assert_eq!(formula.decode(literals[0]), ("x".to_string(), true));
    assert_eq!(formula.decode(literals[1]), ("y".to_string(), false));
    assert_eq!(formula.render_literal(literals[1]), "¬y");
    assert_eq!(formula.render_assignment(&vec![Some(true), None]), "x");
    assert_eq!(formula.render_assignment(&vec![Some(false), Some(true)]), "¬x y");
}

#[test]
#[should_panic]
fn decoding_unknown_variable() {
    let formula = Formula::new();
    formula.add_clause(vec![Variable::new("x")]).unwrap();

    formula.decode(allsat::Literal::pos(7));
}

#[test]
fn repeated_queries_agree() {
    let formula = fixture("colouring/triangle.txt");

    let first = formula.satisfiable();
    let second = formula.satisfiable();
    assert_eq!(first, second);
}

#[test]
fn unknown_names_have_no_value() {
    let formula = Formula::new();
    formula.add_clause(vec![Variable::new("A")]).unwrap();

    let (_, solutions) = formula.satisfiable();
    assert_eq!(solutions[0].value("B"), None);
}

#[test]
fn concurrent_clause_registration() {
    let clauses: Vec<Vec<Variable>> = (0..16)
        .map(|i| vec![Variable::new(format!("x{}", i)), !Variable::new(format!("x{}", (i + 1) % 16))])
        .collect();

    let formula = Formula::new();
    clauses.par_iter().for_each(|clause| {
        formula.add_clause(clause).unwrap();
    });

    assert_eq!(formula.num_clauses(), 16);
    assert_eq!(formula.num_variables(), 16);
    // a cycle of implications: all false or all true
    let (satisfiable, solutions) = formula.satisfiable();
    assert!(satisfiable);
    assert_eq!(solutions.len(), 2);
}

#[test]
fn simple_fixtures() {
    let cases = [
        ("simple/01.txt", 2),
        ("simple/02.txt", 1),
        ("simple/03.txt", 3),
        ("simple/04.txt", 0),
    ];

    for (name, models) in cases.iter() {
        let formula = fixture(name);
        let (satisfiable, solutions) = formula.satisfiable();
        assert_eq!(satisfiable, *models > 0, "{}:\n{}", name, formula);
        assert_eq!(solutions.len(), *models, "{}:\n{}", name, formula);
    }
}

#[test]
fn colouring_fixtures() {
    let cases = [
        ("colouring/triangle.txt", 6),
        ("colouring/square.txt", 2),
        ("colouring/k4.txt", 0),
    ];

    for (name, models) in cases.iter() {
        let formula = fixture(name);
        let (satisfiable, solutions) = formula.satisfiable();
        assert_eq!(satisfiable, *models > 0, "{}:\n{}", name, formula);
        assert_eq!(solutions.len(), *models, "{}:\n{}", name, formula);
    }
}

#[test]
fn declared_variables_are_free() {
    let formula = Formula::new();
    assert_eq!(formula.declare("A"), 0);
    formula.add_clause(vec![Variable::new("B")]).unwrap();
    assert_eq!(formula.declare("B"), 1);

    let (_, solutions) = formula.satisfiable();
    assert_eq!(solutions, vec![
        solution(&[("A", false), ("B", true)]),
        solution(&[("A", true), ("B", true)]),
    ]);
}
