use std::io::{self, BufRead, BufReader, Write};

use clap::Parser;
use services::{Asker, Clock, QuizLoopService, RaceOutcome};
use storage::Storage;
use tracing_subscriber::EnvFilter;

mod config;

use config::{Cli, Config};

fn init_tracing() {
    // Logs go to stderr so they never interleave with the quiz prompts.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_cli(Cli::parse())?;
    tracing::debug!(?config, "starting quiz");

    let storage = Storage::csv(&config.quiz_file);
    let quiz = QuizLoopService::new(Clock::default_clock(), storage.questions, config.time_limit)
        .with_shuffle(config.randomize)
        .with_seed(config.seed);
    let session = quiz.prepare_session().await?;

    // One reader for the whole run; the asker inherits whatever the start prompt left buffered.
    let mut input = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    write!(stdout, "Let's take a quiz! Hit enter when you're ready to start ")?;
    stdout.flush()?;
    input.read_line(&mut String::new())?;

    println!("You have {} seconds", config.time_limit.as_secs());
    let report = quiz.run(session, Asker::new(input, io::stdout())).await?;

    if report.outcome == RaceOutcome::TimedOut {
        // The abandoned prompt is still waiting on its line.
        println!();
    }
    println!("{}", report.outcome.message());
    println!("{report}");
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
