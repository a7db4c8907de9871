//! Loading formulas from text.
//!
//! The problem format has one clause per line. Literals are separated by
//! whitespace and a leading `~` negates a variable. Lines starting with `#` are
//! comments, blank lines are skipped:
//!
//! ```text
//! # at most one of them
//! ~B1 ~B2
//! B1 B2
//! ```

use std::io::BufRead;
use std::str::FromStr;
use dimacs::parse_dimacs;

use crate::error::{Error, Result};
use crate::formula::{Formula, Variable};

const COMMENT: char = '#';
const NEGATION: char = '~';

impl Formula {
    /// Parses a formula in the problem format
    pub fn from_problem(input: &str) -> Result<Formula> {
        let formula = Formula::new();
        for (index, line) in input.lines().enumerate() {
            add_line(&formula, index + 1, line)?;
        }
        Ok(formula)
    }

    /// Reads a formula in the problem format line by line
    pub fn read_problem(reader: impl BufRead) -> Result<Formula> {
        let formula = Formula::new();
        for (index, line) in reader.lines().enumerate() {
            add_line(&formula, index + 1, &line?)?;
        }
        Ok(formula)
    }

    /// Parses a DIMACS string. Variables are named by their DIMACS number.
    ///
    /// All variables of the header are declared up front in numeric order, so
    /// variable `n` gets index `n - 1` and unused ones still double the number
    /// of models. An empty clause makes the formula unsatisfiable.
    pub fn from_dimacs(input: &str) -> Result<Formula> {
        let (num_vars, clauses) = match parse_dimacs(input) {
            Ok(dimacs::Instance::Cnf{num_vars, clauses}) => (num_vars, clauses),
            Ok(_) => return Err(Error::NotCnf),
            Err(error) => return Err(Error::Dimacs(format!("{:?}", error))),
        };

        let formula = Formula::new();
        for var in 1..=num_vars {
            formula.declare(&var.to_string());
        }
        for clause in clauses.iter() {
            if clause.lits().is_empty() {
                formula.add_empty_clause();
                continue;
            }
            formula.add_clause(clause.lits().iter().map(|lit| {
                let variable = Variable::new(lit.var().to_u64().to_string());
                if lit.sign() == dimacs::Sign::Pos { variable } else { !variable }
            }))?;
        }
        Ok(formula)
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Formula::from_problem(s)
    }
}

fn add_line(formula: &Formula, line_number: usize, line: &str) -> Result<()> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
        return Ok(());
    }

    let literals = line.split_whitespace()
        .map(|token| parse_literal(token, line_number))
        .collect::<Result<Vec<Variable>>>()?;

    formula.add_clause(literals)?;
    Ok(())
}

fn parse_literal(token: &str, line_number: usize) -> Result<Variable> {
    match token.strip_prefix(NEGATION) {
        Some("") => Err(Error::Parse {
            line: line_number,
            message: format!("'{}' is not followed by a variable name", NEGATION),
        }),
        Some(name) if name.starts_with(NEGATION) => Err(Error::Parse {
            line: line_number,
            message: format!("Double negation in '{}'", token),
        }),
        Some(name) => Ok(!Variable::new(name)),
        None => Ok(Variable::new(token)),
    }
}
