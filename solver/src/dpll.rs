use std::sync::atomic::{AtomicBool, Ordering};

use crate::cnf::{ClauseId, CNF};
use crate::literal::{Literal, VarId};
use crate::watch_list::{PartialAssignment, WatchList};
use crate::{SATSolution, Solver, Valuation};

/// Enumerates every model with a chronological backtracking search.
///
/// Variables are decided in index order, `false` before `true`. A decision is
/// checked against the clauses watching the literal it falsifies, so a
/// contradiction is found without scanning the whole formula. There is no
/// learning, no restarts and no branching heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct WatchedSolver;

impl Solver for WatchedSolver {
    fn solve(&self, formula: &CNF) -> SATSolution {
        Search::new(formula).enumerate(None)
    }
}

impl WatchedSolver {
    /// Same as [`Solver::solve`] but gives up as soon as `interrupt` is raised
    pub fn solve_until(&self, formula: &CNF, interrupt: &AtomicBool) -> SATSolution {
        Search::new(formula).enumerate(Some(interrupt))
    }
}

const TRIED_FALSE: u8 = 1 << 0;
const TRIED_TRUE: u8 = 1 << 1;

/// Bit of the tried mask belonging to a polarity
fn tried_bit(value: bool) -> u8 {
    if value { TRIED_TRUE } else { TRIED_FALSE }
}

/// State of a single enumeration.
///
/// Variables below `depth` are assigned, the others are not. `tried` remembers
/// for every variable which polarities were already explored at the current
/// position of the search tree.
struct Search<'a> {
    formula: &'a CNF,
    watches: WatchList,
    assignment: PartialAssignment,
    tried: Vec<u8>,
}

impl<'a> Search<'a> {
    fn new(formula: &'a CNF) -> Search<'a> {
        Search {
            formula,
            watches: WatchList::new(formula),
            assignment: vec![None; formula.num_variables()],
            tried: vec![0; formula.num_variables()],
        }
    }

    fn enumerate(mut self, interrupt: Option<&AtomicBool>) -> SATSolution {
        if self.formula.has_empty_clause() {
            tracing::debug!("formula contains an empty clause");
            return SATSolution::Unsatisfiable;
        }

        let num_variables = self.formula.num_variables();
        let mut models: Vec<Valuation> = Vec::new();
        let mut depth: VarId = 0;

        loop {
            if interrupt.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
                tracing::debug!(models = models.len(), "search interrupted");
                return SATSolution::Unknown;
            }

            if depth == num_variables {
                // a leaf: remember the model and go back to the last decision,
                // which still knows the polarities it has tried
                models.push(self.model());
                match depth.checked_sub(1) {
                    Some(previous) => depth = previous,
                    None => break,
                }
                continue;
            }

            if self.decide(depth) {
                depth += 1;
                continue;
            }

            // both polarities are exhausted
            self.tried[depth] = 0;
            self.assignment[depth] = None;
            match depth.checked_sub(1) {
                Some(previous) => depth = previous,
                None => break,
            }
        }

        tracing::debug!(models = models.len(), "search space exhausted");
        SATSolution::from_models(models)
    }

    /// Tries the untried polarities of `var`, `false` first.
    ///
    /// Returns `true` as soon as one of them survives the watch list update,
    /// with the variable left assigned. Otherwise the variable ends up unassigned.
    fn decide(&mut self, var: VarId) -> bool {
        for &value in &[false, true] {
            let bit = tried_bit(value);
            if self.tried[var] & bit != 0 {
                continue;
            }
            self.tried[var] |= bit;
            self.assignment[var] = Some(value);
            tracing::trace!(var, value, "trying");

            match self.propagate(Literal::falsified_by(var, value)) {
                None => return true,
                Some(clause) => {
                    tracing::trace!(var, value, clause = %self.formula[clause], "clause contradicted");
                    self.assignment[var] = None;
                },
            }
        }
        false
    }

    fn propagate(&mut self, falsified: Literal) -> Option<ClauseId> {
        self.watches.update(falsified, self.formula, &self.assignment)
    }

    fn model(&self) -> Valuation {
        self.assignment.iter()
            .map(|value| value.unwrap_or(false))
            .collect()
    }
}
