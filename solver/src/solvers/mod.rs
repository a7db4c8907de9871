mod interruptible_solver;
mod time_limited_solver;
mod timed_solver;

pub use interruptible_solver::{InterruptibleSolver, InterruptibleSolverWrapper, FlagWaiter};
pub use time_limited_solver::TimeLimitedSolver;
pub use timed_solver::TimedSolver;
