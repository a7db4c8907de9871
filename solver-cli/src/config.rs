use allsat::Solver;
use std::path::PathBuf;

/// Formats the input can be given in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// One clause per line, `~` negates, `#` starts a comment
    Problem,
    Dimacs,
}

pub struct Config {
    pub input:       Option<String>,
    pub format:      InputFormat,
    pub return_code: bool,
    pub solver:      Box<dyn Solver>,
    pub output:      Option<PathBuf>,
}
