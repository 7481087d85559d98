use serde::{Deserialize, Serialize};

use crate::quiz::animal::Animal;
use crate::quiz::error::{Collection, QuizError, Result};
use crate::quiz::index::ResultIndex;
use crate::quiz::validation::{ValidationReport, Violation};

/// Ordered registry of every possible quiz outcome.
///
/// Declaration order is the index space shared with friend lists and with
/// terminal choices in the question graph. The catalog is never mutated once
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCatalog {
    results: Vec<Animal>,
}

impl ResultCatalog {
    pub fn new(results: Vec<Animal>) -> Self {
        Self { results }
    }

    pub fn get(&self, index: ResultIndex) -> Result<&Animal> {
        self.results.get(index.0).ok_or(QuizError::OutOfRange {
            collection: Collection::Results,
            index: index.0,
            len: self.results.len(),
        })
    }

    pub fn all(&self) -> &[Animal] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Pairs each result with its index.
    pub fn iter(&self) -> impl Iterator<Item = (ResultIndex, &Animal)> {
        self.results
            .iter()
            .enumerate()
            .map(|(i, a)| (ResultIndex(i), a))
    }

    pub fn find_by_id(&self, id: &str) -> Option<(ResultIndex, &Animal)> {
        self.iter().find(|(_, a)| a.id == id)
    }

    /// Check friend references and rarity scores of every result.
    ///
    /// Self-references and duplicate friends are allowed.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let bound = self.results.len();

        for (i, animal) in self.results.iter().enumerate() {
            let count = animal.friends.len();
            if !(2..=3).contains(&count) {
                report.push(Violation::FriendCount { result: i, count });
            }
            for (slot, friend) in animal.friends.iter().enumerate() {
                if friend.0 >= bound {
                    report.push(Violation::FriendOutOfRange {
                        result: i,
                        slot,
                        friend: friend.0,
                        bound,
                    });
                }
            }
            if !animal.rarity_score.is_finite() || animal.rarity_score < 0.0 {
                report.push(Violation::InvalidRarity {
                    result: i,
                    score: animal.rarity_score,
                });
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(id: &str, friends: &[usize]) -> Animal {
        Animal {
            id: id.into(),
            title: id.into(),
            overview: String::new(),
            description: String::new(),
            image_key: id.into(),
            rarity_score: 3.0,
            friends: friends.iter().map(|&f| ResultIndex(f)).collect(),
        }
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let catalog = ResultCatalog::new(vec![animal("a", &[1, 1]), animal("b", &[0, 0])]);

        assert_eq!(catalog.get(ResultIndex(1)).unwrap().id, "b");
        match catalog.get(ResultIndex(2)) {
            Err(QuizError::OutOfRange {
                collection: Collection::Results,
                index: 2,
                len: 2,
            }) => {}
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_all_keeps_declaration_order() {
        let catalog = ResultCatalog::new(vec![
            animal("z", &[1, 2]),
            animal("a", &[0, 2]),
            animal("m", &[0, 1]),
        ]);
        let ids: Vec<_> = catalog.all().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
        assert_eq!(catalog.find_by_id("m").map(|(i, _)| i), Some(ResultIndex(2)));
    }

    #[test]
    fn test_validate_reports_every_friend_problem() {
        let mut lonely = animal("c", &[0]);
        lonely.rarity_score = f64::NAN;
        let catalog = ResultCatalog::new(vec![
            animal("a", &[1, 9]),
            animal("b", &[0, 2, 5]),
            lonely,
        ]);

        let report = catalog.validate();
        assert_eq!(report.len(), 4);
        assert!(report.iter().any(|v| matches!(
            v,
            Violation::FriendOutOfRange { result: 0, slot: 1, friend: 9, bound: 3 }
        )));
        assert!(report.iter().any(|v| matches!(
            v,
            Violation::FriendOutOfRange { result: 1, slot: 2, friend: 5, .. }
        )));
        assert!(report
            .iter()
            .any(|v| matches!(v, Violation::FriendCount { result: 2, count: 1 })));
        assert!(report
            .iter()
            .any(|v| matches!(v, Violation::InvalidRarity { result: 2, .. })));
    }

    #[test]
    fn test_self_and_duplicate_friends_are_permitted() {
        let catalog = ResultCatalog::new(vec![animal("a", &[0, 1]), animal("b", &[0, 0])]);
        assert!(catalog.validate().is_empty());
    }
}
