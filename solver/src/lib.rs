/// Packed literals
pub mod literal;
/// The CNF representation of a formula over packed literals
pub mod cnf;
/// Named variables, clause registration and translation of results
pub mod formula;
/// Text formats a formula can be loaded from
pub mod problem;
/// The Solver trait which has to be implemented by each solver
pub mod sat_solver;
/// Module that specifies the output of a solver
mod sat_solution;
mod solution;
/// The watch list used to detect contradicted clauses
pub mod watch_list;
/// Module that contains the watched literal search
mod dpll;
pub mod bruteforce;
/// A module which offers some additional solver,
/// for one that can be interrupted or timed.
pub mod solvers;
mod error;
mod util;

pub use literal::{Literal, VarId};
pub use cnf::{Clause, ClauseId, CNF};
pub use formula::{Formula, Variable};
pub use sat_solver::{check_valuation, Solver};
pub use sat_solution::{SATSolution, Valuation};
pub use solution::Solution;
pub use watch_list::{PartialAssignment, WatchList};
pub use dpll::WatchedSolver;
pub use bruteforce::Bruteforce;
pub use error::{Error, Result};
