use std::fmt;

/// Dense, zero based index of a variable, allocated in order of first appearance
pub type VarId = usize;

/// A literal packed into a single unsigned integer: `variable * 2 + polarity`.
///
/// Polarity `1` is the positive occurrence of the variable, polarity `0` the
/// negated one. The packed value doubles as the key of the watch list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(usize);

impl Literal {
    /// Packs a variable and a polarity (`true` for the positive occurrence)
    pub fn new(var: VarId, polarity: bool) -> Literal {
        Literal(var << 1 | polarity as usize)
    }

    /// Creates the positive literal of a variable
    pub fn pos(var: VarId) -> Literal {
        Literal::new(var, true)
    }

    /// Creates the negated literal of a variable
    pub fn neg(var: VarId) -> Literal {
        Literal::new(var, false)
    }

    /// Restores a literal from its packed representation
    pub fn from_index(index: usize) -> Literal {
        Literal(index)
    }

    /// The packed representation
    pub fn index(self) -> usize {
        self.0
    }

    pub fn var(self) -> VarId {
        self.0 >> 1
    }

    /// `true` iff this is the positive occurrence
    pub fn polarity(self) -> bool {
        self.0 & 1 == 1
    }

    pub fn negate(self) -> Literal {
        Literal(self.0 ^ 1)
    }

    /// Evaluates the literal given the value of its variable
    pub fn eval(self, value: bool) -> bool {
        self.polarity() == value
    }

    /// The literal of `var` which becomes false once `var` is set to `value`
    pub fn falsified_by(var: VarId, value: bool) -> Literal {
        Literal::new(var, !value)
    }

    /// Converts to the signed, one based DIMACS notation.
    ///
    /// **NOTE** it is not integer-overflow friendly.
    pub fn to_i64(self) -> i64 {
        let id = self.var() as i64 + 1;
        if self.polarity() { id } else { -id }
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i64())
    }
}
