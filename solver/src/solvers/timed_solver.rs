use std::time::{Duration, Instant};

use crate::{SATSolution, Solver, CNF};

/// Reports how long another solver needs to enumerate all models
pub struct TimedSolver<S> {
    solver: S,
}

impl<S> TimedSolver<S> {
    pub fn new(solver: S) -> Self {
        TimedSolver { solver }
    }
}

impl<S: Solver> Solver for TimedSolver<S> {
    fn solve(&self, formula: &CNF) -> SATSolution {
        self.solver.solve(formula)
    }
}

impl<S: Solver> TimedSolver<S> {
    /// Enumerates the models and returns the elapsed wall-clock time along with them
    pub fn solve_timed(&self, formula: &CNF) -> (Duration, SATSolution) {
        let start = Instant::now();
        let solution = self.solver.solve(formula);
        let elapsed = start.elapsed();
        tracing::info!(?elapsed, models = solution.models().len(), status = solution.status(), "enumeration finished");
        (elapsed, solution)
    }
}
