use std::sync::atomic::{AtomicBool, Ordering};

use crate::sat_solver::*;
use crate::{SATSolution, Valuation, CNF};

/// A simple CNF solver that naively checks all possible
/// valuations and keeps the satisfying ones
#[derive(Clone, Copy, Debug)]
pub enum Bruteforce {
    Bruteforce,
}

impl Solver for Bruteforce {
    fn solve(&self, formula: &CNF) -> SATSolution {
        enumerate(formula, None)
    }
}

impl Bruteforce {
    /// Same as [`Solver::solve`] but gives up as soon as `interrupt` is raised
    pub fn solve_until(&self, formula: &CNF, interrupt: &AtomicBool) -> SATSolution {
        enumerate(formula, Some(interrupt))
    }
}

fn enumerate(formula: &CNF, interrupt: Option<&AtomicBool>) -> SATSolution {
    // initial valuation sets all to false
    let mut valuation = vec![false; formula.num_variables()];
    let mut models = Vec::new();
    if guess(formula, 0, &mut valuation, &mut models, interrupt) {
        SATSolution::from_models(models)
    } else {
        SATSolution::Unknown
    }
}

/// Collects the models extending the first `change` values of the valuation.
/// Returns `false` if interrupted.
fn guess(formula: &CNF, change: usize, valuation: &mut Valuation, models: &mut Vec<Valuation>, interrupt: Option<&AtomicBool>) -> bool {
    if interrupt.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
        return false;
    }
    if change == valuation.len() {
        if check_valuation(formula, valuation) {
            models.push(valuation.clone());
        }
        true
    } else {
        // false first, then set the current bit
        valuation[change] = false;
        if !guess(formula, change + 1, valuation, models, interrupt) {
            return false;
        }
        valuation[change] = true;
        let res = guess(formula, change + 1, valuation, models, interrupt);
        // set back to default
        valuation[change] = false;
        res
    }
}
