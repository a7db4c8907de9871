use std::time::Duration;
use async_std::future::timeout;
use async_std::task::block_on;
use async_trait::async_trait;

use super::InterruptibleSolver;
use crate::{SATSolution, Solver, CNF};

/// Bounds the enumeration of an [`InterruptibleSolver`] by wall-clock time.
///
/// Models found before the deadline are discarded: an enumeration that did not
/// exhaust the search space reports [`SATSolution::Unknown`].
pub struct TimeLimitedSolver<S: InterruptibleSolver> {
    limit: Duration,
    solver: S,
}

impl<S: InterruptibleSolver> TimeLimitedSolver<S> {
    pub fn new(solver: S, limit: Duration) -> TimeLimitedSolver<S> {
        TimeLimitedSolver { limit, solver }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    async fn enumerate_within_limit(&self, formula: &CNF) -> SATSolution {
        match timeout(self.limit, self.solver.solve_interruptible(formula)).await {
            Ok(solution) => solution,
            Err(_) => {
                tracing::warn!(limit = ?self.limit, "enumeration abandoned");
                SATSolution::Unknown
            },
        }
    }
}

impl<S: InterruptibleSolver> Solver for TimeLimitedSolver<S> {
    fn solve(&self, formula: &CNF) -> SATSolution {
        block_on(self.enumerate_within_limit(formula))
    }
}

#[async_trait]
impl<S: InterruptibleSolver + Send + Sync> InterruptibleSolver for TimeLimitedSolver<S> {
    async fn solve_interruptible(&self, formula: &CNF) -> SATSolution {
        self.enumerate_within_limit(formula).await
    }
}
