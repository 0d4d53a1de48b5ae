use std::io::{BufRead, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;

use quiz_core::QuizSession;

use crate::error::QuizError;
use crate::quiz::asker::Asker;

/// Which side of the race finished first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceOutcome {
    /// The deadline elapsed while questions were still being asked.
    TimedOut,
    /// Every question was answered before the deadline.
    Completed,
}

impl RaceOutcome {
    /// Line announced to the player once the race is decided.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            RaceOutcome::TimedOut => "Ran out of time!",
            RaceOutcome::Completed => "Finished all questions!",
        }
    }
}

/// Runs the asker against a deadline and reports whichever finishes first.
///
/// The asker runs on its own OS thread that is never joined. On timeout it is
/// abandoned where it stands, usually blocked on a read, and process exit
/// tears it down. Answers it records after the race is decided are not
/// reported.
#[derive(Debug, Clone, Copy)]
pub struct RaceCoordinator {
    limit: Duration,
}

impl RaceCoordinator {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Start the deadline and the asker, then wait for the first of the two.
    ///
    /// The deadline wins ties: a result observed at or after it counts as a timeout.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Ask` if the asker fails before the deadline,
    /// `QuizError::Spawn` if its thread cannot start, and
    /// `QuizError::AskerVanished` if it exits without reporting.
    pub async fn race<R, W>(
        &self,
        session: Arc<QuizSession>,
        mut asker: Asker<R, W>,
    ) -> Result<RaceOutcome, QuizError>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        // A limit too large to represent as an instant never expires.
        let deadline = Instant::now().checked_add(self.limit);
        let timer = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending().await,
            }
        };
        let (done_tx, done_rx) = oneshot::channel();

        thread::Builder::new()
            .name("quiz-asker".into())
            .spawn(move || {
                let result = asker.ask_all(&session);
                // The coordinator is gone once the deadline has won.
                let _ = done_tx.send(result);
            })
            .map_err(QuizError::Spawn)?;

        tokio::select! {
            biased;

            () = timer => Ok(self.timed_out()),
            done = done_rx => {
                // Timer resolution is coarse; a result seen at or past the deadline lost the race.
                if deadline.is_some_and(|at| Instant::now() >= at) {
                    return Ok(self.timed_out());
                }
                match done {
                    Ok(Ok(())) => {
                        tracing::info!("all questions answered before the deadline");
                        Ok(RaceOutcome::Completed)
                    }
                    Ok(Err(err)) => Err(QuizError::Ask(err)),
                    Err(_) => Err(QuizError::AskerVanished),
                }
            }
        }
    }

    fn timed_out(&self) -> RaceOutcome {
        tracing::info!(limit_secs = self.limit.as_secs(), "quiz deadline elapsed");
        RaceOutcome::TimedOut
    }
}
