use thiserror::Error;

use crate::grammar::Rule;

#[derive(Debug, Error)]
pub enum Error {
    #[error("argument group opened at line {line} (offset {offset}) is never closed")]
    UnterminatedArgument { offset: usize, line: usize },

    #[error("directive at line {line} (offset {offset}) has no name")]
    EmptyIdentifier { offset: usize, line: usize },

    #[error("{0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),
}
