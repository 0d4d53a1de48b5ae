mod asker;
mod race;
mod shuffle;
mod workflow;

// Public API of the quiz subsystem.
pub use asker::{Asker, is_correct};
pub use race::{RaceCoordinator, RaceOutcome};
pub use shuffle::Shuffler;
pub use workflow::{QuizLoopService, QuizReport};
