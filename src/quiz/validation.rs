use std::fmt;

use crate::quiz::index::Destination;

/// A single integrity problem found while checking a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The graph has no node 0 to start from.
    EmptyGraph,
    /// A choice points past the end of the collection its flag selects.
    DestinationOutOfRange {
        node: usize,
        choice: usize,
        destination: Destination,
        bound: usize,
    },
    /// A node offers fewer than two or more than three choices.
    ChoiceCount { node: usize, count: usize },
    /// A friend reference points past the end of the catalog.
    FriendOutOfRange {
        result: usize,
        slot: usize,
        friend: usize,
        bound: usize,
    },
    /// A result lists fewer than two or more than three friends.
    FriendCount { result: usize, count: usize },
    /// Rarity score is negative or not a finite number.
    InvalidRarity { result: usize, score: f64 },
}

impl Violation {
    /// Question node the violation belongs to, if any.
    pub fn node(&self) -> Option<usize> {
        match self {
            Violation::DestinationOutOfRange { node, .. } | Violation::ChoiceCount { node, .. } => {
                Some(*node)
            }
            _ => None,
        }
    }

    /// Choice slot the violation belongs to, if any.
    pub fn choice(&self) -> Option<usize> {
        match self {
            Violation::DestinationOutOfRange { choice, .. } => Some(*choice),
            _ => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyGraph => f.write_str("question graph is empty; node 0 is required"),
            Violation::DestinationOutOfRange {
                node,
                choice,
                destination,
                bound,
            } => write!(
                f,
                "node {node}, choice {choice}: destination {destination} is out of range (size {bound})"
            ),
            Violation::ChoiceCount { node, count } => {
                write!(f, "node {node}: has {count} choices, expected 2 or 3")
            }
            Violation::FriendOutOfRange {
                result,
                slot,
                friend,
                bound,
            } => write!(
                f,
                "result {result}, friend {slot}: index {friend} is out of range (size {bound})"
            ),
            Violation::FriendCount { result, count } => {
                write!(f, "result {result}: has {count} friends, expected 2 or 3")
            }
            Violation::InvalidRarity { result, score } => write!(
                f,
                "result {result}: rarity score {score} is not a finite non-negative number"
            ),
        }
    }
}

/// All violations found in one pass over a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {v}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}
