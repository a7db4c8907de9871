use crate::{CNF, SATSolution};
use rayon::prelude::*;


/// A procedure enumerating all models of a formula
pub trait Solver {
    fn solve(&self, formula: &CNF) -> SATSolution;
}

/// Checks whether a total valuation satisfies every clause of the formula
pub fn check_valuation(formula: &CNF, val: &[bool]) -> bool {
    formula.clauses().par_iter()
        .all(|clause| clause.literals().iter().any(|lit| lit.eval(val[lit.var()])))
}

impl<T: Solver> Solver for &T {
    fn solve(&self, formula: &CNF) -> SATSolution {
        (*self).solve(formula)
    }
}

impl<T: Solver + ?Sized> Solver for Box<T> {
    fn solve(&self, formula: &CNF) -> SATSolution {
        (**self).solve(formula)
    }
}
