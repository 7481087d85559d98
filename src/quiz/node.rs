use serde::{Deserialize, Serialize};

use crate::quiz::index::{Destination, NodeIndex, ResultIndex};

/// A single question ("midpoint") in the decision graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionNode {
    /// Stable identifier, independent of the node's position.
    pub id: String,
    /// The question shown to the player.
    pub prompt: String,
    /// Offered answers, in display order.
    pub choices: Vec<Choice>,
}

/// One answer offered by a [`QuestionNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ChoiceRecord", into = "ChoiceRecord")]
pub struct Choice {
    pub label: String,
    pub destination: Destination,
}

// Flat on-disk shape: the terminal flag picks the index space.
#[derive(Serialize, Deserialize)]
struct ChoiceRecord {
    label: String,
    destination_index: usize,
    is_terminal: bool,
}

impl From<ChoiceRecord> for Choice {
    fn from(record: ChoiceRecord) -> Self {
        let destination = if record.is_terminal {
            Destination::Result(ResultIndex(record.destination_index))
        } else {
            Destination::Node(NodeIndex(record.destination_index))
        };
        Choice {
            label: record.label,
            destination,
        }
    }
}

impl From<Choice> for ChoiceRecord {
    fn from(choice: Choice) -> Self {
        ChoiceRecord {
            destination_index: choice.destination.raw_index(),
            is_terminal: choice.destination.is_terminal(),
            label: choice.label,
        }
    }
}

impl Choice {
    /// Answer that moves on to another question.
    pub fn next(label: impl Into<String>, node: usize) -> Self {
        Self {
            label: label.into(),
            destination: Destination::Node(NodeIndex(node)),
        }
    }

    /// Answer that ends the quiz on a result.
    pub fn end(label: impl Into<String>, result: ResultIndex) -> Self {
        Self {
            label: label.into(),
            destination: Destination::Result(result),
        }
    }

    pub fn destination_index(&self) -> usize {
        self.destination.raw_index()
    }

    pub fn is_terminal(&self) -> bool {
        self.destination.is_terminal()
    }
}

impl QuestionNode {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            choices,
        }
    }

    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Labels in display order, ready for rendering as buttons.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|c| c.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_wire_format() {
        let node = QuestionNode::new(
            "q",
            "Pick one",
            vec![Choice::next("go on", 3), Choice::end("stop", ResultIndex(7))],
        );

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["choices"][0]["destination_index"], 3);
        assert_eq!(value["choices"][0]["is_terminal"], false);
        assert_eq!(value["choices"][1]["destination_index"], 7);
        assert_eq!(value["choices"][1]["is_terminal"], true);

        let parsed: QuestionNode = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, node);
    }

    #[test]
    fn test_terminal_flag_selects_index_space() {
        let choice: Choice = serde_json::from_str(
            r#"{"label": "x", "destination_index": 2, "is_terminal": true}"#,
        )
        .unwrap();
        assert_eq!(choice.destination, Destination::Result(ResultIndex(2)));
        assert!(choice.is_terminal());
        assert_eq!(choice.destination_index(), 2);
    }

    #[test]
    fn test_labels_in_order() {
        let node = QuestionNode::new(
            "q",
            "?",
            vec![Choice::next("a", 1), Choice::next("b", 2), Choice::next("c", 3)],
        );
        assert_eq!(node.labels().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(node.choice(3).is_none());
    }
}
