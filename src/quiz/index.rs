use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a question node inside a [`QuestionGraph`](crate::quiz::graph::QuestionGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(pub usize);

/// Position of a result inside a [`ResultCatalog`](crate::quiz::catalog::ResultCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultIndex(pub usize);

impl NodeIndex {
    /// Entry point of every new session.
    pub const ENTRY: NodeIndex = NodeIndex(0);
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

impl fmt::Display for ResultIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "result #{}", self.0)
    }
}

/// Where a choice leads: another question, or a terminal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Node(NodeIndex),
    Result(ResultIndex),
}

impl Destination {
    pub fn is_terminal(self) -> bool {
        matches!(self, Destination::Result(_))
    }

    /// The raw index, stripped of which space it belongs to.
    pub fn raw_index(self) -> usize {
        match self {
            Destination::Node(n) => n.0,
            Destination::Result(r) => r.0,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Node(n) => write!(f, "{n}"),
            Destination::Result(r) => write!(f, "{r}"),
        }
    }
}
