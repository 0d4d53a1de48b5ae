use std::fmt;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use quiz_core::{QuizSession, SessionSnapshot};
use storage::QuestionRepository;

use crate::error::QuizError;
use crate::quiz::asker::Asker;
use crate::quiz::race::{RaceCoordinator, RaceOutcome};
use crate::quiz::shuffle::Shuffler;
use crate::Clock;

/// Result of one timed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizReport {
    pub outcome: RaceOutcome,
    pub snapshot: SessionSnapshot,
}

impl fmt::Display for QuizReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The quiz is complete, you answered {} out of {} problems correctly",
            self.snapshot.correct, self.snapshot.total
        )
    }
}

/// Orchestrates loading, optional shuffling and the timed run.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<dyn QuestionRepository>,
    time_limit: Duration,
    shuffle: bool,
    seed: Option<u64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionRepository>, time_limit: Duration) -> Self {
        Self {
            clock,
            questions,
            time_limit,
            shuffle: false,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Pin the shuffle seed instead of deriving it from the clock.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Load the questions and build a session, shuffling first if enabled.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Load` if the questions cannot be loaded.
    pub async fn prepare_session(&self) -> Result<Arc<QuizSession>, QuizError> {
        let mut questions = self.questions.load_questions().await?;

        if self.shuffle {
            let mut shuffler = match self.seed {
                Some(seed) => Shuffler::new(seed),
                None => Shuffler::from_clock(&self.clock),
            };
            tracing::debug!(seed = shuffler.seed(), "shuffling questions");
            questions = shuffler.shuffle(questions);
        }

        tracing::debug!(total = questions.len(), "quiz session ready");
        Ok(Arc::new(QuizSession::new(questions)))
    }

    /// Race the asker against the time limit and report the tally at that moment.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError` from the race.
    pub async fn run<R, W>(
        &self,
        session: Arc<QuizSession>,
        asker: Asker<R, W>,
    ) -> Result<QuizReport, QuizError>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let outcome = RaceCoordinator::new(self.time_limit)
            .race(Arc::clone(&session), asker)
            .await?;
        let snapshot = session.snapshot();

        tracing::debug!(?outcome, correct = snapshot.correct, total = snapshot.total, "quiz finished");
        Ok(QuizReport { outcome, snapshot })
    }
}
