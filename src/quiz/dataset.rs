use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::quiz::catalog::ResultCatalog;
use crate::quiz::error::{QuizError, Result};
use crate::quiz::graph::QuestionGraph;
use crate::quiz::validation::ValidationReport;

/// Results and questions that together form one playable quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub results: ResultCatalog,
    pub questions: QuestionGraph,
}

impl Dataset {
    /// Run both integrity checks and merge their findings.
    pub fn validate(&self) -> ValidationReport {
        let mut report = self.questions.validate(self.results.len());
        report.merge(self.results.validate());
        report
    }

    /// Fail with the complete report if any check failed.
    pub fn ensure_valid(&self) -> Result<()> {
        let report = self.validate();
        if report.is_empty() {
            Ok(())
        } else {
            warn!("Dataset rejected with {} violation(s)", report.len());
            Err(QuizError::ValidationViolation(report))
        }
    }

    /// Parse without validating. Useful for reporting on broken datasets.
    pub fn parse_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset = Self::parse_json(json)?;
        dataset.ensure_valid()?;
        debug!(
            "Loaded dataset: {} results, {} questions",
            dataset.results.len(),
            dataset.questions.len()
        );
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading dataset from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::data;
    use crate::quiz::validation::Violation;

    const TINY: &str = r#"{
        "results": [
            {"id": "a", "title": "A", "overview": "", "description": "", "image_key": "a",
             "rarity_score": 1.0, "friends": [1, 1]},
            {"id": "b", "title": "B", "overview": "", "description": "", "image_key": "b",
             "rarity_score": 7.5, "friends": [0, 0]}
        ],
        "questions": [
            {"id": "q0", "prompt": "?", "choices": [
                {"label": "yes", "destination_index": 1, "is_terminal": false},
                {"label": "no", "destination_index": 0, "is_terminal": true}
            ]},
            {"id": "q1", "prompt": "??", "choices": [
                {"label": "yes", "destination_index": 0, "is_terminal": true},
                {"label": "no", "destination_index": 1, "is_terminal": true}
            ]}
        ]
    }"#;

    #[test]
    fn test_load_tiny_dataset() {
        let dataset = Dataset::from_json_str(TINY).unwrap();
        assert_eq!(dataset.results.len(), 2);
        assert_eq!(dataset.questions.len(), 2);
    }

    #[test]
    fn test_load_rejects_with_full_report() {
        let broken = TINY
            .replace(r#""friends": [1, 1]"#, r#""friends": [1, 4]"#)
            .replace(
                r#"{"label": "no", "destination_index": 1, "is_terminal": true}"#,
                r#"{"label": "no", "destination_index": 2, "is_terminal": true}"#,
            );

        match Dataset::from_json_str(&broken) {
            Err(QuizError::ValidationViolation(report)) => {
                assert_eq!(report.len(), 2);
                assert!(report
                    .iter()
                    .any(|v| matches!(v, Violation::FriendOutOfRange { result: 0, friend: 4, .. })));
                assert!(report.iter().any(|v| matches!(
                    v,
                    Violation::DestinationOutOfRange { node: 1, choice: 1, bound: 2, .. }
                )));
            }
            other => panic!("expected ValidationViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Dataset::from_json_str("{\"results\": 3}"),
            Err(QuizError::Json(_))
        ));
    }

    #[test]
    fn test_canonical_survives_json() {
        let json = data::canonical().to_json_pretty().unwrap();
        let back = Dataset::from_json_str(&json).unwrap();
        let canonical = data::canonical();

        assert_eq!(back.questions, canonical.questions);
        for (parsed, expected) in back.results.all().iter().zip(canonical.results.all()) {
            assert_eq!(parsed.id, expected.id);
            assert_eq!(parsed.friends, expected.friends);
            assert!((parsed.rarity_score - expected.rarity_score).abs() < 1e-9);
        }
    }
}
