use std::fmt::Write as FmtWrite;

/// A total assignment, indexed by variable
pub type Valuation = Vec<bool>;

const MAX_LITERALS_PER_LINE: usize = 8;

/// Outcome of enumerating the models of a formula
#[derive(Clone, PartialEq, Eq)]
pub enum SATSolution {
    /// All models of the formula, never empty
    Satisfiable(Vec<Valuation>),
    Unsatisfiable,
    /// The search was interrupted before the search space was exhausted
    Unknown,
}

impl std::iter::FromIterator<Valuation> for SATSolution {
    fn from_iter<T: IntoIterator<Item = Valuation>>(iter: T) -> Self {
        SATSolution::from_models(iter.into_iter().collect())
    }
}

impl SATSolution {
    /// Wraps the models found by an exhausted search
    pub fn from_models(models: Vec<Valuation>) -> SATSolution {
        if models.is_empty() {
            SATSolution::Unsatisfiable
        } else {
            SATSolution::Satisfiable(models)
        }
    }

    pub fn is_sat(&self) -> bool {
        match self {
            SATSolution::Satisfiable(_)  => true,
            _                            => false,
        }
    }

    pub fn is_unsat(&self) -> bool {
        match self {
            SATSolution::Unsatisfiable   => true,
            _                            => false,
        }
    }

    pub fn is_unknown(&self) -> bool {
        match self {
            SATSolution::Unknown => true,
            _                    => false,
        }
    }

    /// The models found, empty unless satisfiable
    pub fn models(&self) -> &[Valuation] {
        match self {
            SATSolution::Satisfiable(models) => models,
            _                                => &[],
        }
    }

    pub fn into_models(self) -> Vec<Valuation> {
        match self {
            SATSolution::Satisfiable(models) => models,
            _                                => Vec::new(),
        }
    }

    /// Status word of the DIMACS solution line
    pub fn status(&self) -> &'static str {
        match self {
            SATSolution::Satisfiable(_) => "SATISFIABLE",
            SATSolution::Unsatisfiable  => "UNSATISFIABLE",
            SATSolution::Unknown        => "UNKNOWN",
        }
    }

    /// Prints the outcome in DIMACS style, one `v` block per model
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("s {}\n", self.status());
        for model in self.models() {
            let mut iter = model.iter().enumerate().peekable();
            while iter.peek().is_some() {
                out.push('v');
                for (id, sign) in iter.by_ref().take(MAX_LITERALS_PER_LINE) {
                    // writing into a String cannot fail
                    let _ = write!(&mut out, " {}{}",
                        if *sign { "" }
                        else { "-" },
                        id+1);
                }
                out.push('\n');
            }
            out.push_str("v 0\n");
        }
        out
    }
}

impl std::fmt::Debug for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

impl std::fmt::Display for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SATSolution::Unsatisfiable => write!(f, "Unsatisfiable"),
            SATSolution::Unknown => write!(f, "Unknown"),
            SATSolution::Satisfiable(models) => write!(f, "Satisfiable ({} models)", models.len()),
        }
    }
}
