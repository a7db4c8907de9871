use thiserror::Error;

/// Everything that can go wrong while building a formula.
///
/// An unsatisfiable formula is not an error, it is a regular answer of the solver.
#[derive(Debug, Error)]
pub enum Error {
    /// A clause without literals was added. It could never be satisfied,
    /// so it is refused instead of silently making the formula unsatisfiable.
    #[error("A clause needs at least one literal.")]
    EmptyClause,

    /// A line of a problem file could not be read.
    ///
    /// # Arguments
    /// * `line` - The (one based) line of interest.
    /// * `message` - What was wrong with it.
    #[error("Parsing failed in line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The DIMACS input is malformed.
    #[error("Could not parse DIMACS input: {0}")]
    Dimacs(String),

    /// The DIMACS input describes something else than a CNF formula.
    #[error("Only CNF formulae are supported")]
    NotCnf,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
