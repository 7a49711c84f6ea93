use thiserror::Error;

use crate::engine::Divergence;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("cannot parse {line:?}: {message}")]
    Parse { line: String, message: String },

    #[error("case {case}: sequence must contain at least one element")]
    EmptySequence { case: usize },

    #[error("case {case}: expected {expected} elements, found {actual}")]
    LengthMismatch {
        case: usize,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Divergence(#[from] Divergence),

    #[error("unknown task {task:?} in {group}, available: {}", .available.join(", "))]
    UnknownTask {
        group: String,
        task: String,
        available: Vec<String>,
    },
}
