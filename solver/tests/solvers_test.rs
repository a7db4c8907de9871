use std::sync::atomic::AtomicBool;
use std::time::Duration;
use async_std::task::block_on;
use allsat::{
    solvers::{FlagWaiter, InterruptibleSolver, InterruptibleSolverWrapper, TimeLimitedSolver, TimedSolver},
    Bruteforce, Clause, Literal, SATSolution, Solver, WatchedSolver, CNF,
};

/// Every pigeon sits in some hole, no two pigeons share one
fn pigeonhole(pigeons: usize, holes: usize) -> CNF {
    let var = |pigeon: usize, hole: usize| pigeon * holes + hole;
    let mut formula = CNF::empty();
    for pigeon in 0..pigeons {
        formula.push((0..holes).map(|hole| Literal::pos(var(pigeon, hole))).collect());
    }
    for hole in 0..holes {
        for first in 0..pigeons {
            for second in first + 1..pigeons {
                formula.push(Clause::new(vec![Literal::neg(var(first, hole)), Literal::neg(var(second, hole))]));
            }
        }
    }
    formula
}

#[test]
fn pigeons_fit_in_as_many_holes() {
    let solution = WatchedSolver.solve(&pigeonhole(3, 3));
    // one model per permutation
    assert_eq!(solution.models().len(), 6);
}

#[test]
fn too_many_pigeons() {
    assert!(WatchedSolver.solve(&pigeonhole(4, 3)).is_unsat());
    assert!(Bruteforce::Bruteforce.solve(&pigeonhole(4, 3)).is_unsat());
}

#[test]
fn raised_flag_stops_the_search() {
    let flag = AtomicBool::new(true);
    let formula = pigeonhole(3, 3);

    assert!(WatchedSolver.solve_until(&formula, &flag).is_unknown());
    assert!(Bruteforce::Bruteforce.solve_until(&formula, &flag).is_unknown());
}

#[test]
fn interruptible_solver_completes() {
    let formula = pigeonhole(3, 3);

    let solution = block_on(WatchedSolver.solve_interruptible(&formula));
    assert_eq!(solution, WatchedSolver.solve(&formula));

    let wrapped = InterruptibleSolverWrapper::from(Bruteforce::Bruteforce);
    assert_eq!(wrapped.solve(&formula), WatchedSolver.solve(&formula));
}

#[test]
fn boxed_interruptible_solver() {
    let solver: Box<dyn InterruptibleSolver + Send + Sync> = Box::new(WatchedSolver);
    let solution = block_on(solver.solve_interruptible(&pigeonhole(2, 2)));
    assert_eq!(solution.models().len(), 2);
}

#[test]
fn time_limit_is_respected() {
    // hopeless without clause learning
    let solver = TimeLimitedSolver::new(WatchedSolver, Duration::from_millis(50));
    assert_eq!(solver.solve(&pigeonhole(11, 10)), SATSolution::Unknown);
}

#[test]
fn generous_time_limit() {
    let solver = TimeLimitedSolver::new(WatchedSolver, Duration::from_secs(60));
    assert_eq!(solver.solve(&pigeonhole(4, 3)), SATSolution::Unsatisfiable);
}

#[test]
fn timed_solver() {
    let solver = TimedSolver::new(WatchedSolver);
    let (_, solution) = solver.solve_timed(&pigeonhole(3, 3));
    assert_eq!(solution, solver.solve(&pigeonhole(3, 3)));
}

#[test]
fn boxed_solvers() {
    let solvers: Vec<Box<dyn Solver>> = vec![Box::new(WatchedSolver), Box::new(Bruteforce::Bruteforce)];
    let formula = pigeonhole(2, 3);
    let results: Vec<SATSolution> = solvers.iter().map(|solver| solver.solve(&formula)).collect();
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].models().len(), 12);
}

#[test]
#[should_panic(expected = "search went wrong")]
fn panicking_search_is_not_unknown() {
    block_on(FlagWaiter::start(|_| panic!("search went wrong")));
}
