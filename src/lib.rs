//! Branching personality quiz: a question graph whose answers lead either to
//! further questions or to one of the animal results.

pub mod check;
pub mod play;
pub mod quiz;

pub use quiz::animal::{Animal, Mbti, RarityTier};
pub use quiz::catalog::ResultCatalog;
pub use quiz::dataset::Dataset;
pub use quiz::error::{QuizError, Result};
pub use quiz::graph::QuestionGraph;
pub use quiz::index::{Destination, NodeIndex, ResultIndex};
pub use quiz::node::{Choice, QuestionNode};
pub use quiz::validation::{ValidationReport, Violation};
pub use quiz::{QuizEngine, Session, SessionOutcome, SessionState};
