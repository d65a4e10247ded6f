use quizgame::error::QuizError;
use quizgame::runner;
use quizgame::store::{default_questions, load_questions, JsonFileStore, LoadSource};
use quizgame::{Console, QuizState, Session};

async fn play_scripted(session: &mut Session, script: &str) -> (Result<u32, QuizError>, String) {
    let mut console = Console::new(script.as_bytes(), Vec::new());
    let result = runner::run(session, &mut console).await;
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output)
}

#[tokio::test]
async fn perfect_run_is_excellent() {
    let mut session = Session::new(default_questions());
    let script = "2\n2\n3,1\nDebugging\nHYPERTEXT TRANSFER PROTOCOL\nno\n";

    let (result, output) = play_scripted(&mut session, script).await;

    assert_eq!(result.unwrap(), 1);
    assert_eq!(session.score(), 7);
    assert_eq!(session.state(), QuizState::Terminated);
    assert_eq!(output.matches("✅ Correct!").count(), 5);
    assert!(output.contains("Your score: 7/7"));
    assert!(output.contains("Percentage: 100.0%"));
    assert!(output.contains("Excellent performance! 🎉"));
    assert!(output.contains("Would you like to play again? (yes/no): "));
}

#[tokio::test]
async fn only_true_false_right_keeps_learning() {
    let mut session = Session::new(default_questions());
    let script = "1\n2\n2\nfixing\nhot text\nn\n";

    let (result, output) = play_scripted(&mut session, script).await;

    assert!(result.is_ok());
    assert_eq!(session.score(), 1);
    assert!(output.contains("Your score: 1/7"));
    assert!(output.contains("Percentage: 14.3%"));
    assert!(output.contains("Keep learning! You'll do better next time."));

    assert!(output.contains("The correct answer is: Paris"));
    assert!(output.contains("The correct answer is: Python, Java"));
    assert!(!output.contains("The correct answer is: debugging"));
    assert!(!output.contains("The correct answer is: HyperText"));
    assert_eq!(output.matches("❌ Incorrect!").count(), 4);
}

#[tokio::test]
async fn invalid_input_is_retried_in_place() {
    let mut session = Session::new(default_questions());
    let script = "Paris\n9\n2\ntrue\n2\n1,x\n1,7\n,\n1,3\ndebugging\nhypertext transfer protocol\nno\n";

    let (result, output) = play_scripted(&mut session, script).await;

    assert!(result.is_ok());
    assert_eq!(session.score(), 7);
    assert!(output.contains("Please enter a valid number."));
    assert!(output.contains("Please enter a number between 1 and 4"));
    assert!(output.contains("Please enter valid numbers separated by commas."));
    assert!(output.contains("Please enter numbers between 1 and 4 separated by commas"));
    assert!(output.contains("Please select at least one option."));
    assert!(output.contains("Question 5/5"));
}

#[tokio::test]
async fn replay_resets_progress_but_not_questions() {
    let mut session = Session::new(default_questions());
    let script = concat!(
        "2\n2\n1,3\ndebugging\nhypertext transfer protocol\n",
        "YES\n",
        "1\n1\n2\nnope\nnope\n",
        "no\n"
    );

    let (result, output) = play_scripted(&mut session, script).await;

    assert_eq!(result.unwrap(), 2);
    assert_eq!(session.questions(), default_questions().as_slice());
    assert_eq!(session.score(), 0);
    assert!(output.contains("Your score: 7/7"));
    assert!(output.contains("Your score: 0/7"));
    assert_eq!(output.matches("Question 1/5").count(), 2);
}

#[tokio::test]
async fn closed_input_mid_quiz_is_an_error() {
    let mut session = Session::new(default_questions());

    let (result, output) = play_scripted(&mut session, "2\n").await;

    assert!(matches!(result, Err(QuizError::InputClosed)));
    assert_eq!(session.score(), 1);
    assert!(output.contains("Question 2/5"));
}

#[tokio::test]
async fn empty_question_set_reports_zero_percent() {
    let mut session = Session::new(vec![]);

    let (result, output) = play_scripted(&mut session, "").await;

    assert_eq!(result.unwrap(), 1);
    assert!(output.contains("Your score: 0/0"));
    assert!(output.contains("Percentage: 0.0%"));
}

#[tokio::test]
async fn questions_from_file_drive_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(
        &path,
        r#"[
            {"type": "multi_select", "question": "Pick the primes", "options": ["2", "4", "5", "9"], "answer": ["2", "5"], "points": 3},
            {"type": "short_answer", "question": "Who wrote The Rust Programming Language?", "answer": "Steve Klabnik and Carol Nichols", "accept": ["Klabnik and Nichols"], "points": 2}
        ]"#,
    )
    .unwrap();

    let loaded = load_questions(&JsonFileStore::new(&path)).await;
    assert!(matches!(loaded.source, LoadSource::File));

    let mut session = Session::new(loaded.questions);
    let (result, output) = play_scripted(&mut session, "3,1,1\nklabnik AND nichols\n\n").await;

    assert!(result.is_ok());
    assert_eq!(session.score(), 5);
    assert!(output.contains("Question 2/2"));
    assert!(output.contains("Percentage: 100.0%"));
}

#[tokio::test]
async fn first_run_seeds_the_question_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("questions.json"));

    let first = load_questions(&store).await;
    assert!(matches!(first.source, LoadSource::DefaultsPersisted));

    let second = load_questions(&store).await;
    assert!(matches!(second.source, LoadSource::File));
    assert_eq!(second.questions, first.questions);
}
