use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use itertools::Itertools;

use crate::literal::{Literal, VarId};

/// Index of a clause in a [`CNF`]
pub type ClauseId = usize;

/// Representation of a formula in CNF form over packed literals
/// (conjunction of clauses).
///
/// Every literal refers to a variable below `num_variables`. Clauses only enter
/// through [`CNF::push`], which keeps the count in step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CNF {
    clauses: Vec<Clause>,
    num_variables: usize,
}

/// Representation of a clause (disjunction of literals).
///
/// The literals are kept sorted ascending and free of duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl CNF {
    /// Creates an empty CNF formula
    pub fn empty() -> CNF {
        CNF { clauses: Vec::new(), num_variables: 0 }
    }

    /// Inserts a new clause into the formula, growing the variable count if needed
    pub fn push(&mut self, clause: Clause) -> ClauseId {
        if let Some(max) = clause.max_var() {
            self.num_variables = self.num_variables.max(max + 1);
        }
        self.clauses.push(clause);
        self.clauses.len() - 1
    }

    /// Makes sure there are at least `num_variables` variables, used or not
    pub fn declare_variables(&mut self, num_variables: usize) {
        self.num_variables = self.num_variables.max(num_variables);
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns number of clauses in the formula
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// Checks whether some clause can never be satisfied
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }
}

impl Index<ClauseId> for CNF {
    type Output = Clause;

    fn index(&self, id: ClauseId) -> &Self::Output {
        &self.clauses[id]
    }
}

impl FromIterator<Clause> for CNF {
    fn from_iter<I: IntoIterator<Item=Clause>>(iter: I) -> Self {
        let mut cnf = CNF::empty();
        iter.into_iter().for_each(|clause| { cnf.push(clause); });
        cnf
    }
}

impl IntoIterator for CNF {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a> IntoIterator for &'a CNF {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl Clause {
    /// Creates a clause, sorting the literals and removing duplicates
    pub fn new(literals: impl IntoIterator<Item=Literal>) -> Clause {
        let mut literals: Vec<Literal> = literals.into_iter().collect();
        literals.sort();
        literals.dedup();
        Clause { literals }
    }

    /// The literals in ascending order of their packed value
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The literal a fresh watch list attaches the clause to
    pub fn first(&self) -> Option<Literal> {
        self.literals.first().copied()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Checks whether the clause contains a literal and its negation
    pub fn is_tautology(&self) -> bool {
        // sorted, so complementary literals are neighbours
        self.literals.windows(2)
            .any(|pair| pair[0].var() == pair[1].var())
    }

    fn max_var(&self) -> Option<VarId> {
        self.literals.last().map(|lit| lit.var())
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item=Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.clauses {
            writeln!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.literals.iter().join(" "))
    }
}
