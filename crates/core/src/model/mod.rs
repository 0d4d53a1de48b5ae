mod question;
mod session;

pub use question::Question;
pub use session::{QuizSession, SessionError, SessionSnapshot};
