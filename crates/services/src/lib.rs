#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::{AskError, QuizError};
pub use quiz::{
    Asker, QuizLoopService, QuizReport, RaceCoordinator, RaceOutcome, Shuffler, is_correct,
};
