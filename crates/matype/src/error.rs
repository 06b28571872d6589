use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Location of a character in the original input.
///
/// `line` starts at 1. `column` is the 1-based index of the character on its
/// line; a fresh parser sits at column 0, and so does a newline, which counts
/// as the start of the line it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The kind of a parsing context, without its buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextKind {
    Root,
    Operator,
    Matrix,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextKind::Root => "root",
            ContextKind::Operator => "operator",
            ContextKind::Matrix => "matrix",
        };
        f.write_str(name)
    }
}

/// Matrix shape violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StructuralError {
    #[error("Inconsistent row size!")]
    InconsistentRowSize,
    #[error("Inconsistent matrix bar index!")]
    InconsistentBarIndex,
}

/// A terminal parse failure. The first one raised wins.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ParseError {
    #[error("{error} ({position})")]
    Structural {
        error: StructuralError,
        position: Position,
    },
    /// End of input arrived while a matrix (or operator) was still open.
    #[error("Reached end of input, but not root parsing context!")]
    Unterminated { context: ContextKind },
    /// A character kept being replayed without any context accepting it.
    #[error("Parser stalled on {ch:?} ({position})")]
    Stalled { ch: char, position: Position },
}

impl ParseError {
    /// The message without its position suffix.
    pub fn message(&self) -> String {
        match self {
            ParseError::Structural { error, .. } => error.to_string(),
            ParseError::Unterminated { .. } => {
                "Reached end of input, but not root parsing context!".to_string()
            }
            ParseError::Stalled { ch, .. } => format!("Parser stalled on {ch:?}"),
        }
    }

    /// Where the failing character was, when one is to blame.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Structural { position, .. } | ParseError::Stalled { position, .. } => {
                Some(*position)
            }
            ParseError::Unterminated { .. } => None,
        }
    }
}
