#![forbid(unsafe_code)]

pub mod csv_file;
pub mod repository;

pub use csv_file::{CsvQuestionFile, parse_questions};
pub use repository::{InMemoryRepository, LoadError, QuestionRepository, Storage};
