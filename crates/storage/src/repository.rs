use async_trait::async_trait;
use quiz_core::Question;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::csv_file::CsvQuestionFile;

/// Errors surfaced while loading questions from a source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed quiz file: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record} has {found} fields, expected 2 (question, answer)")]
    FieldCount { record: u64, found: usize },
}

/// Repository contract for the question list of a quiz.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load every question, preserving source order.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be read or is malformed.
    /// Loading is all-or-nothing; no partial list is returned.
    async fn load_questions(&self) -> Result<Vec<Question>, LoadError>;
}

/// Simple in-memory repository implementation for testing and embedding.
#[derive(Clone)]
pub struct InMemoryRepository {
    questions: Arc<[Question]>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, LoadError> {
        Ok(self.questions.to_vec())
    }
}

/// Holds the question repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(InMemoryRepository::new(questions)),
        }
    }

    /// Build a `Storage` that reads questions from a CSV file on each load.
    #[must_use]
    pub fn csv(path: impl Into<PathBuf>) -> Self {
        Self {
            questions: Arc::new(CsvQuestionFile::new(path)),
        }
    }
}
