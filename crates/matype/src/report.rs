use crate::error::{ParseError, Position};
use serde::{Deserialize, Serialize};

/// Serializable outcome of a whole compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Success {
        latex: String,
    },
    Failure {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
        error: ParseError,
    },
}

impl Report {
    pub fn is_success(&self) -> bool {
        matches!(self, Report::Success { .. })
    }

    /// Pretty JSON, as printed by `matype --json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Result<String, ParseError>> for Report {
    fn from(result: Result<String, ParseError>) -> Self {
        match result {
            Ok(latex) => Report::Success { latex },
            Err(error) => Report::Failure {
                message: error.message(),
                position: error.position(),
                error,
            },
        }
    }
}
