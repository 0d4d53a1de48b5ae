//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::SessionError;
use storage::LoadError;

/// Errors emitted while asking questions on the input stream.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AskError {
    #[error("failed to read answer: {0}")]
    Read(#[source] std::io::Error),
    #[error("input closed before an answer was entered")]
    InputClosed,
    #[error("failed to write prompt: {0}")]
    Write(#[source] std::io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted by a quiz run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Ask(#[from] AskError),
    #[error("failed to start the asker thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("asker stopped without reporting a result")]
    AskerVanished,
}
