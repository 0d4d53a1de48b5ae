#![forbid(unsafe_code)]

pub mod model;
pub mod time;

pub use model::{Question, QuizSession, SessionError, SessionSnapshot};
pub use time::Clock;
