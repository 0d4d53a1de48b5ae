use std::io::{BufRead, Write};

use quiz_core::{Question, QuizSession};

use crate::error::AskError;

/// Score a response against the expected answer.
///
/// An empty response is a skip and never scores, even for an empty answer.
/// Anything else must match exactly, case included.
#[must_use]
pub fn is_correct(response: &str, expected: &str) -> bool {
    !response.is_empty() && response == expected
}

/// Remove a single trailing line terminator, `\n` or `\r\n`.
///
/// Returns `None` if the line has no terminator, which means input ended mid-line.
fn strip_line_terminator(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\n')?;
    Some(line.strip_suffix('\r').unwrap_or(line))
}

/// Interactive loop that presents questions and scores typed answers.
///
/// It knows nothing about deadlines: a read blocks for as long as the input does.
pub struct Asker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Asker<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Present one question and report whether the answer was correct.
    ///
    /// # Errors
    ///
    /// Returns `AskError::Write` if the prompt cannot be written,
    /// `AskError::Read` if reading fails, and `AskError::InputClosed` if
    /// input ends before a full line arrives.
    pub fn ask(&mut self, question: &Question) -> Result<bool, AskError> {
        write!(self.output, "What is {}? ", question.prompt()).map_err(AskError::Write)?;
        self.output.flush().map_err(AskError::Write)?;

        let mut line = String::new();
        self.input.read_line(&mut line).map_err(AskError::Read)?;
        let response = strip_line_terminator(&line).ok_or(AskError::InputClosed)?;

        Ok(is_correct(response, question.answer()))
    }

    /// Ask every question of the session in order, recording each result.
    ///
    /// # Errors
    ///
    /// Stops at the first `AskError`; answers recorded before it stay recorded.
    pub fn ask_all(&mut self, session: &QuizSession) -> Result<(), AskError> {
        for question in session.questions() {
            let correct = self.ask(question)?;
            session.record_answer(correct)?;
        }
        Ok(())
    }

    /// Give back the input and output streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
