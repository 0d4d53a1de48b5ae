use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

use crate::model::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("all {total} questions have already been answered")]
    Completed { total: usize },
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Point-in-time tally of a session, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl SessionSnapshot {
    /// Returns true when every question has been answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run: a fixed question order plus running tallies.
///
/// The question list is set at construction and only read afterwards. The
/// counters are written by a single asker and read by whoever reports on the
/// run, possibly while the asker is still going. Atomics keep that read well
/// defined; a report taken mid-answer may simply miss the latest answer.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    answered: AtomicUsize,
    correct: AtomicUsize,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answered: AtomicUsize::new(0),
            correct: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Record the result of one answered question.
    ///
    /// Only a correct answer moves the correct tally; both kinds count as answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if every question already has an answer.
    pub fn record_answer(&self, is_correct: bool) -> Result<(), SessionError> {
        let total = self.total_questions();
        self.answered
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |answered| {
                (answered < total).then_some(answered + 1)
            })
            .map_err(|_| SessionError::Completed { total })?;

        if is_correct {
            self.correct.fetch_add(1, Ordering::AcqRel);
        }
        Ok(())
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        // Correct is read first so it can never exceed the answered count read after it.
        let correct = self.correct_count();
        SessionSnapshot {
            correct,
            answered: self.answered_count(),
            total: self.total_questions(),
        }
    }
}
