use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::Question;

use crate::repository::{LoadError, QuestionRepository};

const PROMPT_IDX: usize = 0;
const ANSWER_IDX: usize = 1;
const FIELDS_PER_RECORD: usize = 2;

/// Question repository backed by a headerless two-column CSV file.
#[derive(Debug, Clone)]
pub struct CsvQuestionFile {
    path: PathBuf,
}

impl CsvQuestionFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionRepository for CsvQuestionFile {
    async fn load_questions(&self) -> Result<Vec<Question>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Open {
                path: self.path.clone(),
                source,
            })?;
        let questions = parse_questions(bytes.as_slice())?;
        tracing::debug!(path = %self.path.display(), count = questions.len(), "loaded quiz file");
        Ok(questions)
    }
}

/// Parse `question,answer` records from any reader.
///
/// Every record is a question; there is no header row. Fields are taken
/// verbatim, so surrounding whitespace is part of the prompt or answer.
///
/// # Errors
///
/// Returns `LoadError::Csv` for malformed CSV and `LoadError::FieldCount` for
/// a record that does not have exactly two fields. The first bad record
/// aborts the whole parse.
pub fn parse_questions(reader: impl Read) -> Result<Vec<Question>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() != FIELDS_PER_RECORD {
            return Err(LoadError::FieldCount {
                record: idx as u64 + 1,
                found: record.len(),
            });
        }
        questions.push(Question::new(&record[PROMPT_IDX], &record[ANSWER_IDX]));
    }

    Ok(questions)
}
