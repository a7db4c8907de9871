use std::borrow::Borrow;
use std::fmt;
use itertools::Itertools;
use parking_lot::Mutex;

use crate::cnf::{Clause, ClauseId, CNF};
use crate::error::{Error, Result};
use crate::literal::{Literal, VarId};
use crate::util::IndexSet;
use crate::watch_list::PartialAssignment;
use crate::{SATSolution, Solution, Solver, Valuation, WatchedSolver};

const CONJUNCTION: &str = " ∧ ";
const DISJUNCTION: &str = " ∨ ";

/// A named boolean variable, or its negation, as it appears in a clause
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    positive: bool,
}

impl Variable {
    /// The positive occurrence of the variable called `name`
    pub fn new(name: impl Into<String>) -> Variable {
        Variable { name: name.into(), positive: true }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// The opposite occurrence of the same variable
    pub fn negate(&self) -> Variable {
        Variable { name: self.name.clone(), positive: !self.positive }
    }
}

impl std::ops::Not for Variable {
    type Output = Variable;

    fn not(mut self) -> Self::Output {
        self.positive = !self.positive;
        self
    }
}

impl std::ops::Not for &Variable {
    type Output = Variable;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

#[derive(Clone, Debug, Default)]
struct Tables {
    /// Variable names in order of first appearance, the position is the variable index
    names: IndexSet<String>,
    formula: CNF,
}

impl Tables {
    fn name_of(&self, var: VarId) -> &str {
        match self.names.get_index(var) {
            Some(name) => name,
            None => panic!("Variable {} was never registered, the clause list is corrupted", var),
        }
    }

    fn register(&mut self, name: &str) -> VarId {
        match self.names.get_full(name) {
            Some((index, _)) => index,
            None => self.names.insert_full(name.to_owned()).0,
        }
    }

    fn render_literal(&self, literal: Literal) -> String {
        let name = self.name_of(literal.var());
        if literal.polarity() {
            name.to_owned()
        } else {
            format!("¬{}", name)
        }
    }

    fn render_clause(&self, clause: &Clause) -> String {
        format!("({})", clause.literals().iter()
            .map(|literal| self.render_literal(*literal))
            .join(DISJUNCTION))
    }

    fn solution(&self, valuation: &Valuation) -> Solution {
        valuation.iter()
            .enumerate()
            .map(|(var, value)| (self.name_of(var).to_owned(), *value))
            .collect()
    }
}

/// A CNF formula over named variables.
///
/// Clauses can be added through a shared reference from several threads; the
/// naming tables and the clause list are guarded by one lock. Satisfiability
/// queries work on a private copy of the clause list, so a query sees exactly
/// the clauses added before it started.
#[derive(Debug, Default)]
pub struct Formula {
    tables: Mutex<Tables>,
}

impl Clone for Formula {
    fn clone(&self) -> Self {
        Formula { tables: Mutex::new(self.tables.lock().clone()) }
    }
}

impl Formula {
    /// Creates an empty formula
    pub fn new() -> Formula {
        Formula::default()
    }

    /// Adds the disjunction of `literals` to the formula.
    ///
    /// Unknown variables get the next free index. Duplicated literals are merged.
    /// An empty clause is refused and leaves the formula untouched.
    pub fn add_clause<I>(&self, literals: I) -> Result<ClauseId>
    where I: IntoIterator,
          I::Item: Borrow<Variable>
    {
        let literals: Vec<I::Item> = literals.into_iter().collect();
        if literals.is_empty() {
            return Err(Error::EmptyClause);
        }

        let mut tables = self.tables.lock();
        let mut packed = Vec::with_capacity(literals.len());
        for literal in &literals {
            let literal = literal.borrow();
            let var = tables.register(&literal.name);
            packed.push(Literal::new(var, literal.positive));
        }

        Ok(tables.formula.push(Clause::new(packed)))
    }

    /// Registers a variable without constraining it.
    ///
    /// The variable takes part in every model from now on, free to take either
    /// value unless some clause says otherwise. Returns its index, which is the
    /// old one if the name is already known.
    pub fn declare(&self, name: &str) -> VarId {
        let mut tables = self.tables.lock();
        let var = tables.register(name);
        let num_variables = tables.names.len();
        tables.formula.declare_variables(num_variables);
        var
    }

    /// Adds a clause no assignment satisfies. Only for inputs which may
    /// legitimately contain one, [`Formula::add_clause`] refuses it.
    pub(crate) fn add_empty_clause(&self) -> ClauseId {
        let clause_id = self.tables.lock().formula.push(Clause::new(Vec::new()));
        tracing::debug!(clause = clause_id, "empty clause, the formula is unsatisfiable");
        clause_id
    }

    /// Maps a packed literal back to its variable name and the value making it true
    pub fn decode(&self, literal: Literal) -> (String, bool) {
        self.decode_value(literal.var(), literal.polarity())
    }

    /// Names the variable with index `var`, paired with `value`
    pub fn decode_value(&self, var: VarId, value: bool) -> (String, bool) {
        (self.tables.lock().name_of(var).to_owned(), value)
    }

    /// The index of a variable, if it appeared in some clause
    pub fn var_id(&self, name: &str) -> Option<VarId> {
        self.tables.lock().names.get_full(name).map(|(index, _)| index)
    }

    pub fn num_variables(&self) -> usize {
        self.tables.lock().names.len()
    }

    pub fn num_clauses(&self) -> usize {
        self.tables.lock().formula.len()
    }

    /// Variable names ordered by index
    pub fn variable_names(&self) -> Vec<String> {
        self.tables.lock().names.iter().cloned().collect()
    }

    /// A snapshot of the packed clause list
    pub fn clauses(&self) -> CNF {
        self.tables.lock().formula.clone()
    }

    /// Enumerates all models with the watched literal search.
    ///
    /// Returns whether the formula is satisfiable together with all solutions,
    /// `(false, [])` if there are none.
    pub fn satisfiable(&self) -> (bool, Vec<Solution>) {
        let result = self.solve_with(&WatchedSolver);
        (result.is_sat(), self.solutions(&result))
    }

    /// Runs any solver on a snapshot of the formula
    pub fn solve_with(&self, solver: &impl Solver) -> SATSolution {
        let formula = self.clauses();
        tracing::debug!(variables = formula.num_variables(), clauses = formula.len(), "solving");
        let result = solver.solve(&formula);
        tracing::debug!(result = %result, "solved");
        result
    }

    /// Translates the models of a solver result into named solutions
    pub fn solutions(&self, result: &SATSolution) -> Vec<Solution> {
        let tables = self.tables.lock();
        result.models()
            .iter()
            .map(|valuation| tables.solution(valuation))
            .collect()
    }

    /// Renders a packed literal by name, negations prefixed with `¬`
    pub fn render_literal(&self, literal: Literal) -> String {
        self.tables.lock().render_literal(literal)
    }

    /// Renders the assigned variables of a partial assignment as literals
    pub fn render_assignment(&self, assignment: &PartialAssignment) -> String {
        let tables = self.tables.lock();
        assignment.iter()
            .enumerate()
            .filter_map(|(var, value)| value.map(|value| Literal::new(var, value)))
            .map(|literal| tables.render_literal(literal))
            .join(" ")
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.tables.lock();
        write!(f, "{}", tables.formula.iter()
            .map(|clause| tables.render_clause(clause))
            .join(CONJUNCTION))
    }
}
