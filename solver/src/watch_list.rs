use std::collections::VecDeque;
use std::ops::Index;

use crate::cnf::{ClauseId, CNF};
use crate::literal::Literal;

/// Value of every variable during search, `None` if unassigned
pub type PartialAssignment = Vec<Option<bool>>;

/// Maps every literal to the clauses currently watching it.
///
/// Every clause is watched at exactly one literal. As long as the clause has not
/// been found contradicted, that literal is unassigned or true under the current
/// partial assignment. The list is consumed by a single search: entries migrate
/// between literals destructively, so every search builds a fresh one.
#[derive(Clone, Debug)]
pub struct WatchList {
    watches: Vec<VecDeque<ClauseId>>,
}

impl WatchList {
    /// Attaches every clause to its first literal.
    ///
    /// Empty clauses are not watched by anything.
    pub fn new(formula: &CNF) -> WatchList {
        let mut watches = vec![VecDeque::new(); 2 * formula.num_variables()];
        for (id, clause) in formula.iter().enumerate() {
            if let Some(first) = clause.first() {
                watches[first.index()].push_back(id);
            }
        }
        WatchList { watches }
    }

    /// Re-homes every clause watching `falsified`, a literal that just became false.
    ///
    /// Returns the clause whose literals are all false if there is one. Clauses
    /// moved before the contradiction was found stay moved; the contradicted clause
    /// and the ones behind it remain at `falsified`.
    pub fn update(&mut self, falsified: Literal, formula: &CNF, assignment: &PartialAssignment) -> Option<ClauseId> {
        while let Some(clause_id) = self.watches[falsified.index()].pop_front() {
            let alternative = formula[clause_id].literals()
                .iter()
                .copied()
                .find(|lit| assignment[lit.var()].map_or(true, |value| lit.eval(value)));

            match alternative {
                Some(literal) => {
                    tracing::trace!(clause = clause_id, from = %falsified, to = %literal, "moving watch");
                    self.watches[literal.index()].push_back(clause_id);
                },
                None => {
                    self.watches[falsified.index()].push_front(clause_id);
                    return Some(clause_id);
                },
            }
        }
        None
    }

    /// The clauses watching a literal
    pub fn watching(&self, literal: Literal) -> &VecDeque<ClauseId> {
        &self.watches[literal.index()]
    }

    /// Enumerates all literals which are watched by at least one clause
    pub fn iter(&self) -> impl Iterator<Item=(Literal, &VecDeque<ClauseId>)> {
        self.watches.iter()
            .enumerate()
            .filter(|(_, clauses)| !clauses.is_empty())
            .map(|(index, clauses)| (Literal::from_index(index), clauses))
    }

    /// Number of watch entries, equal to the number of non-empty clauses
    pub fn len(&self) -> usize {
        self.watches.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Index<Literal> for WatchList {
    type Output = VecDeque<ClauseId>;

    fn index(&self, literal: Literal) -> &Self::Output {
        self.watching(literal)
    }
}
