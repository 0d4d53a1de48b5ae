use std::io::{self, Cursor};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use quiz_core::Question;
use quiz_core::time::fixed_clock;
use services::{Asker, QuizError, QuizLoopService, RaceOutcome};
use storage::{InMemoryRepository, LoadError, QuestionRepository, parse_questions};

fn service_for(csv: &str, limit: Duration) -> QuizLoopService {
    let questions = parse_questions(csv.as_bytes()).expect("parse quiz");
    QuizLoopService::new(
        fixed_clock(),
        Arc::new(InMemoryRepository::new(questions)),
        limit,
    )
}

fn typed(input: &str) -> Asker<Cursor<Vec<u8>>, io::Sink> {
    Asker::new(Cursor::new(input.as_bytes().to_vec()), io::sink())
}

#[tokio::test]
async fn all_correct_answers_complete_the_quiz() {
    let svc = service_for("2+2,4\n3+3,6\n", Duration::from_secs(30));
    let session = svc.prepare_session().await.unwrap();

    let report = svc.run(session, typed("4\n6\n")).await.unwrap();

    assert_eq!(report.outcome, RaceOutcome::Completed);
    assert_eq!(report.snapshot.correct, 2);
    assert_eq!(report.snapshot.total, 2);
    assert_eq!(
        report.to_string(),
        "The quiz is complete, you answered 2 out of 2 problems correctly"
    );
}

#[tokio::test]
async fn zero_second_limit_times_out() {
    let svc = service_for("2+2,4\n3+3,6\n", Duration::ZERO);
    let session = svc.prepare_session().await.unwrap();

    let report = svc.run(session, typed("4\n6\n")).await.unwrap();

    assert_eq!(report.outcome, RaceOutcome::TimedOut);
    assert_eq!(report.snapshot.total, 2);
    assert!(report.snapshot.correct <= 2);
}

#[tokio::test]
async fn empty_answer_scores_zero() {
    let svc = service_for("5*5,25\n", Duration::from_secs(30));
    let session = svc.prepare_session().await.unwrap();

    let report = svc.run(session, typed("\n")).await.unwrap();

    assert_eq!(report.outcome, RaceOutcome::Completed);
    assert_eq!(
        report.to_string(),
        "The quiz is complete, you answered 0 out of 1 problems correctly"
    );
}

#[tokio::test]
async fn empty_expected_answer_still_needs_input() {
    let svc = QuizLoopService::new(
        fixed_clock(),
        Arc::new(InMemoryRepository::new(vec![Question::new("nothing", "")])),
        Duration::from_secs(30),
    );
    let session = svc.prepare_session().await.unwrap();

    let report = svc.run(session, typed("\n")).await.unwrap();
    assert_eq!(report.snapshot.correct, 0);
}

#[tokio::test]
async fn shuffled_run_scores_against_new_order() {
    let svc = service_for("1+1,2\n2+2,4\n3+3,6\n4+4,8\n", Duration::from_secs(30))
        .with_shuffle(true)
        .with_seed(Some(11));
    let session = svc.prepare_session().await.unwrap();
    let answers: String = session
        .questions()
        .iter()
        .map(|q| format!("{}\n", q.answer()))
        .collect();

    let report = svc.run(session, typed(&answers)).await.unwrap();
    assert_eq!(report.snapshot.correct, 4);
}

#[tokio::test]
async fn closed_input_is_fatal() {
    let svc = service_for("2+2,4\n3+3,6\n", Duration::from_secs(30));
    let session = svc.prepare_session().await.unwrap();

    let err = svc.run(session, typed("4\n")).await.unwrap_err();
    assert!(matches!(err, QuizError::Ask(_)));
}

struct UnreadableRepository;

#[async_trait]
impl QuestionRepository for UnreadableRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, LoadError> {
        Err(LoadError::FieldCount {
            record: 1,
            found: 3,
        })
    }
}

#[tokio::test]
async fn load_failure_stops_before_any_question() {
    let svc = QuizLoopService::new(
        fixed_clock(),
        Arc::new(UnreadableRepository),
        Duration::from_secs(30),
    );

    let err = svc.prepare_session().await.unwrap_err();
    assert!(matches!(err, QuizError::Load(LoadError::FieldCount { .. })));
}
