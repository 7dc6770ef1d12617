use thiserror::Error;

use crate::lexer::Position;

/// Raised before execution starts; a program that fails to build never
/// touches its input or output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("unbalanced loop: `scuttle` without `hoist` at command {index} ({pos})")]
    UnmatchedLoopEnd { index: usize, pos: Position },
    #[error("unbalanced loop: `hoist` never closed at command {index} ({pos})")]
    UnclosedLoopStart { index: usize, pos: Position },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tape underflow: `larboard` at cell 0, command {index} ({pos})")]
    TapeUnderflow { index: usize, pos: Position },
    #[error("io err at command {index}")]
    Io {
        index: usize,
        #[source]
        err: std::io::Error,
    },
}
