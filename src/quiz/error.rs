use std::fmt;

use thiserror::Error;

use crate::quiz::index::NodeIndex;
use crate::quiz::validation::ValidationReport;

/// Which of the two index spaces a lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Results,
    Questions,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Results => f.write_str("result catalog"),
            Collection::Questions => f.write_str("question graph"),
        }
    }
}

/// Errors raised by the quiz engine and dataset loading.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Index outside a collection's bounds.
    #[error("index {index} is out of range for the {collection} (size {len})")]
    OutOfRange {
        collection: Collection,
        index: usize,
        len: usize,
    },

    /// Choice index outside the current node's choice set.
    #[error("choice {choice} is not offered by node {node} ({available} choices)")]
    InvalidChoice {
        node: NodeIndex,
        choice: usize,
        available: usize,
    },

    /// Operation not allowed in the session's current state.
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),

    /// The session took more hops than the graph has nodes.
    #[error("traversal exceeded {limit} hops; the question graph likely contains a cycle")]
    TraversalLimitExceeded { limit: usize },

    /// Dataset failed integrity checks. Carries every violation found.
    #[error("dataset failed validation:\n{0}")]
    ValidationViolation(ValidationReport),

    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
