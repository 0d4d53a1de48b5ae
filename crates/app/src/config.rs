use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Timed quiz over question/answer pairs read from a CSV file.
#[derive(Parser, Debug)]
#[command(name = "quiz", version, long_about = None)]
pub struct Cli {
    /// CSV file with one `question,answer` pair per line.
    #[arg(short = 'f', long = "file", default_value = "problems.csv")]
    pub file: PathBuf,

    /// Time limit for the whole quiz, in seconds.
    #[arg(
        short = 't',
        long = "time-limit",
        default_value = "30",
        allow_negative_numbers = true
    )]
    pub time_limit: String,

    /// Ask the questions in random order.
    #[arg(short = 'r', long = "randomize")]
    pub randomize: bool,

    /// Seed for the random order; defaults to the current time.
    #[arg(short = 's', long = "seed", requires = "randomize")]
    pub seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTimeLimit { raw: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeLimit { raw } => {
                write!(f, "invalid --time-limit value: {raw} (expected whole seconds)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub quiz_file: PathBuf,
    pub time_limit: Duration,
    pub randomize: bool,
    pub seed: Option<u64>,
}

impl Config {
    /// Validate raw command line options.
    ///
    /// A negative time limit is clamped to zero, so the quiz times out at once.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeLimit` if the limit is not an integer.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let secs: i64 = cli
            .time_limit
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidTimeLimit {
                raw: cli.time_limit.clone(),
            })?;

        Ok(Self {
            quiz_file: cli.file,
            time_limit: Duration::from_secs(secs.max(0).unsigned_abs()),
            randomize: cli.randomize,
            seed: cli.seed,
        })
    }
}
