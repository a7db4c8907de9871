use std::collections::BTreeMap;
use std::fmt;
use itertools::Itertools;

/// One model of a [`Formula`](crate::Formula), by variable name.
///
/// Iteration and rendering follow the alphabetical order of the names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Solution(BTreeMap<String, bool>);

impl Solution {
    pub fn new() -> Solution {
        Solution(BTreeMap::new())
    }

    pub fn set(&mut self, variable: impl Into<String>, value: bool) {
        self.0.insert(variable.into(), value);
    }

    /// The value of a variable, `None` if the formula does not know the name
    pub fn value(&self, variable: &str) -> Option<bool> {
        self.0.get(variable).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=(&str, bool)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl std::iter::FromIterator<(String, bool)> for Solution {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Solution(iter.into_iter().collect())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter()
            .map(|(name, value)| format!("{} = {}", name, value))
            .join("\t"))
    }
}
