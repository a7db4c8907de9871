use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{panic, thread};

use async_std::task::block_on;
use async_trait::async_trait;
use auto_impl::auto_impl;
use futures::channel::oneshot;

use crate::{Bruteforce, CNF, SATSolution, Solver, WatchedSolver};

/// A solver whose search can be abandoned from the outside.
///
/// Dropping the returned future before it completes stops the search at its
/// next step.
#[async_trait]
#[auto_impl(Box)]
pub trait InterruptibleSolver {
    async fn solve_interruptible(&self, formula: &CNF) -> SATSolution;
}

#[async_trait]
impl InterruptibleSolver for WatchedSolver {
    async fn solve_interruptible(&self, formula: &CNF) -> SATSolution {
        let solver = *self;
        let formula = formula.clone();
        FlagWaiter::start(move |flag| solver.solve_until(&formula, &flag)).await
    }
}

#[async_trait]
impl InterruptibleSolver for Bruteforce {
    async fn solve_interruptible(&self, formula: &CNF) -> SATSolution {
        let solver = *self;
        let formula = formula.clone();
        FlagWaiter::start(move |flag| solver.solve_until(&formula, &flag)).await
    }
}

/// Runs a search on a worker thread and raises its interrupt flag once the
/// waiting future goes away
pub struct FlagWaiter(Arc<AtomicBool>);

impl FlagWaiter {
    pub async fn start<F>(search: F) -> SATSolution
    where F: FnOnce(Arc<AtomicBool>) -> SATSolution + Send + 'static
    {
        let flag = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = oneshot::channel();

        let worker_flag = flag.clone();
        let worker = thread::spawn(move || {
            // the receiver is gone if we were interrupted
            let _ = sender.send(search(worker_flag));
        });

        let _waiter = FlagWaiter(flag);
        match receiver.await {
            Ok(solution) => solution,
            // the sender only goes away without a result if the search panicked
            Err(_) => match worker.join() {
                Err(panic) => panic::resume_unwind(panic),
                Ok(()) => {
                    tracing::error!("solver thread terminated without a result");
                    SATSolution::Unknown
                },
            },
        }
    }
}

impl Drop for FlagWaiter {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Runs an interruptible solver to completion on the current thread
pub struct InterruptibleSolverWrapper<S: InterruptibleSolver> {
    solver: S,
}

impl<S: InterruptibleSolver> From<S> for InterruptibleSolverWrapper<S> {
    fn from(solver: S) -> Self {
        InterruptibleSolverWrapper{solver}
    }
}

impl<S: InterruptibleSolver> Solver for InterruptibleSolverWrapper<S> {
    fn solve(&self, formula: &CNF) -> SATSolution {
        block_on(self.solver.solve_interruptible(formula))
    }
}
