use serde::{Deserialize, Serialize};

use crate::quiz::error::{Collection, QuizError, Result};
use crate::quiz::index::{Destination, NodeIndex};
use crate::quiz::node::QuestionNode;
use crate::quiz::validation::{ValidationReport, Violation};

/// The decision graph: question nodes as an adjacency list whose edges are
/// tagged either with another node or with a terminal result.
///
/// Node 0 is the entry point of every session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionGraph {
    nodes: Vec<QuestionNode>,
}

impl QuestionGraph {
    pub fn new(nodes: Vec<QuestionNode>) -> Self {
        Self { nodes }
    }

    pub fn get(&self, index: NodeIndex) -> Result<&QuestionNode> {
        self.nodes.get(index.0).ok_or(QuizError::OutOfRange {
            collection: Collection::Questions,
            index: index.0,
            len: self.nodes.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[QuestionNode] {
        &self.nodes
    }

    /// Check every choice of every node against the collection it points into.
    ///
    /// Does not stop at the first problem; the report holds all of them.
    pub fn validate(&self, result_catalog_size: usize) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.nodes.is_empty() {
            report.push(Violation::EmptyGraph);
        }

        for (n, node) in self.nodes.iter().enumerate() {
            let count = node.choices.len();
            if !(2..=3).contains(&count) {
                report.push(Violation::ChoiceCount { node: n, count });
            }

            for (c, choice) in node.choices.iter().enumerate() {
                let bound = match choice.destination {
                    Destination::Node(_) => self.nodes.len(),
                    Destination::Result(_) => result_catalog_size,
                };
                if choice.destination.raw_index() >= bound {
                    report.push(Violation::DestinationOutOfRange {
                        node: n,
                        choice: c,
                        destination: choice.destination,
                        bound,
                    });
                }
            }
        }

        report
    }

    /// Number of questions on the deepest play-through starting at `from`,
    /// counting `from` itself. Capped at the node count, which is also where
    /// a cyclic graph ends up. Dangling node references are ignored.
    pub fn longest_path(&self, from: NodeIndex) -> usize {
        let len = self.nodes.len();
        if from.0 >= len {
            return 0;
        }

        // Layer d holds every node reachable in exactly d hops.
        let mut layer = vec![false; len];
        layer[from.0] = true;
        let mut depth = 0;

        while depth < len && layer.contains(&true) {
            depth += 1;
            let mut next = vec![false; len];
            for (i, node) in self.nodes.iter().enumerate() {
                if !layer[i] {
                    continue;
                }
                for choice in &node.choices {
                    if let Destination::Node(target) = choice.destination {
                        if target.0 < len {
                            next[target.0] = true;
                        }
                    }
                }
            }
            layer = next;
        }

        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::index::ResultIndex;
    use crate::quiz::node::Choice;

    fn small_graph() -> QuestionGraph {
        QuestionGraph::new(vec![
            QuestionNode::new("root", "?", vec![Choice::next("a", 1), Choice::next("b", 2)]),
            QuestionNode::new(
                "left",
                "?",
                vec![Choice::end("x", ResultIndex(0)), Choice::next("y", 2)],
            ),
            QuestionNode::new(
                "right",
                "?",
                vec![Choice::end("x", ResultIndex(1)), Choice::end("y", ResultIndex(2))],
            ),
        ])
    }

    #[test]
    fn test_get_out_of_range() {
        let graph = small_graph();
        assert_eq!(graph.get(NodeIndex(2)).unwrap().id, "right");
        assert!(matches!(
            graph.get(NodeIndex(3)),
            Err(QuizError::OutOfRange {
                collection: Collection::Questions,
                index: 3,
                len: 3
            })
        ));
    }

    #[test]
    fn test_validate_clean_graph() {
        assert!(small_graph().validate(3).is_empty());
    }

    #[test]
    fn test_validate_checks_the_space_the_flag_selects() {
        // Result #2 only exists when the catalog has three entries.
        let report = small_graph().validate(2);
        assert_eq!(report.len(), 1);
        let v = &report.violations()[0];
        assert_eq!(v.node(), Some(2));
        assert_eq!(v.choice(), Some(1));
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let graph = QuestionGraph::new(vec![
            QuestionNode::new("only", "?", vec![Choice::next("a", 5)]),
            QuestionNode::new(
                "wide",
                "?",
                vec![
                    Choice::next("a", 0),
                    Choice::next("b", 0),
                    Choice::next("c", 0),
                    Choice::end("d", ResultIndex(40)),
                ],
            ),
        ]);

        let report = graph.validate(16);
        assert_eq!(report.len(), 4);
        assert!(report
            .iter()
            .any(|v| matches!(v, Violation::ChoiceCount { node: 0, count: 1 })));
        assert!(report
            .iter()
            .any(|v| matches!(v, Violation::ChoiceCount { node: 1, count: 4 })));
        assert!(report.iter().any(|v| matches!(
            v,
            Violation::DestinationOutOfRange { node: 0, choice: 0, bound: 2, .. }
        )));
        assert!(report.iter().any(|v| matches!(
            v,
            Violation::DestinationOutOfRange { node: 1, choice: 3, bound: 16, .. }
        )));
    }

    #[test]
    fn test_validate_empty_graph() {
        let report = QuestionGraph::new(Vec::new()).validate(16);
        assert_eq!(report.violations(), &[Violation::EmptyGraph]);
    }

    #[test]
    fn test_longest_path() {
        let graph = small_graph();
        assert_eq!(graph.longest_path(NodeIndex(0)), 3);
        assert_eq!(graph.longest_path(NodeIndex(2)), 1);
        assert_eq!(graph.longest_path(NodeIndex(9)), 0);
    }

    #[test]
    fn test_longest_path_survives_cycles() {
        let graph = QuestionGraph::new(vec![
            QuestionNode::new("a", "?", vec![Choice::next("x", 1), Choice::next("y", 1)]),
            QuestionNode::new("b", "?", vec![Choice::next("x", 0), Choice::end("y", ResultIndex(0))]),
        ]);
        assert_eq!(graph.longest_path(NodeIndex(0)), 2);
    }

    #[test]
    fn test_longest_path_on_wide_ladder() {
        // Every node fans out three ways into the next one: 3^n distinct walks.
        let n = 200;
        let mut nodes: Vec<_> = (0..n - 1)
            .map(|i| {
                QuestionNode::new(
                    format!("rung-{i}"),
                    "?",
                    vec![
                        Choice::next("a", i + 1),
                        Choice::next("b", i + 1),
                        Choice::next("c", i + 1),
                    ],
                )
            })
            .collect();
        nodes.push(QuestionNode::new(
            "top",
            "?",
            vec![Choice::end("x", ResultIndex(0)), Choice::end("y", ResultIndex(1))],
        ));
        let graph = QuestionGraph::new(nodes);

        assert!(graph.validate(2).is_empty());
        assert_eq!(graph.longest_path(NodeIndex(0)), n);
        assert_eq!(graph.longest_path(NodeIndex(150)), 50);
    }
}
