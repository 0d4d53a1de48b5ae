use std::io::Write;

use quiz_core::Question;
use storage::{CsvQuestionFile, LoadError, QuestionRepository, Storage};

fn write_quiz(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write quiz");
    file.flush().expect("flush quiz");
    file
}

#[tokio::test]
async fn csv_file_loads_every_record_in_order() {
    let file = write_quiz("2+2,4\n3+3,6\n10-7,3\n");
    let repo = CsvQuestionFile::new(file.path());

    let questions = repo.load_questions().await.expect("load");
    assert_eq!(
        questions,
        vec![
            Question::new("2+2", "4"),
            Question::new("3+3", "6"),
            Question::new("10-7", "3"),
        ]
    );
}

#[tokio::test]
async fn storage_csv_reads_through_trait_object() {
    let file = write_quiz("5*5,25\n");
    let storage = Storage::csv(file.path());

    let questions = storage.questions.load_questions().await.expect("load");
    assert_eq!(questions, vec![Question::new("5*5", "25")]);
}

#[tokio::test]
async fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("problems.csv");
    let repo = CsvQuestionFile::new(&path);

    let err = repo.load_questions().await.unwrap_err();
    match err {
        LoadError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_row_aborts_without_partial_result() {
    let file = write_quiz("2+2,4\nbroken\n3+3,6\n");
    let repo = CsvQuestionFile::new(file.path());

    let err = repo.load_questions().await.unwrap_err();
    assert!(matches!(err, LoadError::FieldCount { record: 2, found: 1 }));
}
