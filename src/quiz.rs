pub mod animal;
pub mod catalog;
pub mod data;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod index;
pub mod node;
pub mod validation;

use log::{debug, info, warn};

use animal::Animal;
use catalog::ResultCatalog;
use dataset::Dataset;
use error::{QuizError, Result};
use graph::QuestionGraph;
use index::{Destination, NodeIndex, ResultIndex};
use node::QuestionNode;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Where a play-through currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an answer to this question.
    Active(NodeIndex),
    /// Finished on this result. No transition leaves this state.
    Terminated(ResultIndex),
}

/// One player's play-through. Owned by whoever drives it; never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    /// Questions answered so far, oldest first. Its length is the hop count.
    answered: Vec<NodeIndex>,
}

impl Session {
    fn new() -> Self {
        Self {
            state: SessionState::Active(NodeIndex::ENTRY),
            answered: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// `None` once the session has terminated.
    pub fn current_node_index(&self) -> Option<NodeIndex> {
        match self.state {
            SessionState::Active(node) => Some(node),
            SessionState::Terminated(_) => None,
        }
    }

    /// Set only once the session has terminated.
    pub fn result_index(&self) -> Option<ResultIndex> {
        match self.state {
            SessionState::Active(_) => None,
            SessionState::Terminated(result) => Some(result),
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, SessionState::Terminated(_))
    }

    /// Number of answers submitted.
    pub fn hops(&self) -> usize {
        self.answered.len()
    }

    pub fn answered(&self) -> &[NodeIndex] {
        &self.answered
    }
}

/// What a submitted answer led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Continued(NodeIndex),
    Terminated(ResultIndex),
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Walks a [`Session`] through a question graph, one answer at a time.
///
/// The engine only borrows its data, so any number of engines and sessions
/// can share one loaded [`Dataset`] without locking.
#[derive(Debug, Clone, Copy)]
pub struct QuizEngine<'a> {
    questions: &'a QuestionGraph,
    results: &'a ResultCatalog,
}

impl<'a> QuizEngine<'a> {
    /// Build an engine over a dataset, rejecting it with every violation if
    /// it fails validation.
    pub fn new(dataset: &'a Dataset) -> Result<Self> {
        dataset.ensure_valid()?;
        Ok(Self {
            questions: &dataset.questions,
            results: &dataset.results,
        })
    }

    pub fn questions(&self) -> &'a QuestionGraph {
        self.questions
    }

    pub fn results(&self) -> &'a ResultCatalog {
        self.results
    }

    /// Most answers one session may submit. A graph without cycles never
    /// needs more than one answer per node.
    pub fn hop_limit(&self) -> usize {
        self.questions.len()
    }

    pub fn start(&self) -> Session {
        info!("Session started at {}", NodeIndex::ENTRY);
        Session::new()
    }

    /// The question the caller should render next.
    pub fn current_prompt(&self, session: &Session) -> Result<&'a QuestionNode> {
        match session.state {
            SessionState::Active(node) => self.questions.get(node),
            SessionState::Terminated(_) => {
                Err(QuizError::InvalidState("session has already terminated"))
            }
        }
    }

    /// Apply the player's answer to the current question.
    ///
    /// On any error the session is left exactly as it was.
    pub fn submit_choice(
        &self,
        session: &mut Session,
        choice_index: usize,
    ) -> Result<SessionOutcome> {
        let current = match session.state {
            SessionState::Active(node) => node,
            SessionState::Terminated(_) => {
                warn!("Answer submitted to a terminated session");
                return Err(QuizError::InvalidState("session has already terminated"));
            }
        };

        let node = self.questions.get(current)?;
        let choice = node.choice(choice_index).ok_or(QuizError::InvalidChoice {
            node: current,
            choice: choice_index,
            available: node.choices.len(),
        })?;

        let limit = self.hop_limit();
        if session.hops() + 1 > limit {
            warn!(
                "Session exceeded {} hops at {}; aborting traversal",
                limit, current
            );
            return Err(QuizError::TraversalLimitExceeded { limit });
        }

        session.answered.push(current);
        let outcome = match choice.destination {
            Destination::Node(next) => {
                session.state = SessionState::Active(next);
                info!(
                    "Transition: {} -> {} (answer: {})",
                    current, next, choice.label
                );
                SessionOutcome::Continued(next)
            }
            Destination::Result(result) => {
                session.state = SessionState::Terminated(result);
                info!(
                    "Session terminated at {} via {} after {} answer(s)",
                    result,
                    current,
                    session.hops()
                );
                SessionOutcome::Terminated(result)
            }
        };

        Ok(outcome)
    }

    /// Undo the last answer of an active session, returning to the question
    /// it was given on. Terminated sessions cannot step back.
    pub fn step_back(&self, session: &mut Session) -> Result<NodeIndex> {
        if session.is_terminated() {
            return Err(QuizError::InvalidState("session has already terminated"));
        }
        let previous = session
            .answered
            .pop()
            .ok_or(QuizError::InvalidState("no answer to take back"))?;
        debug!("Stepped back to {}", previous);
        session.state = SessionState::Active(previous);
        Ok(previous)
    }

    /// The result a terminated session ended on.
    pub fn result(&self, session: &Session) -> Result<&'a Animal> {
        match session.state {
            SessionState::Terminated(result) => self.results.get(result),
            SessionState::Active(_) => Err(QuizError::InvalidState("session has not terminated")),
        }
    }

    /// Look up a result's friends, in order.
    pub fn resolve_friends(&self, animal: &Animal) -> Result<Vec<&'a Animal>> {
        animal
            .friends
            .iter()
            .map(|&friend| self.results.get(friend))
            .collect()
    }
}

impl QuizEngine<'static> {
    /// Engine over the built-in dataset.
    pub fn canonical() -> Self {
        let dataset = data::canonical();
        Self {
            questions: &dataset.questions,
            results: &dataset.results,
        }
    }
}
