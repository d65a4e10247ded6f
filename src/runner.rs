use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::instrument;

use crate::console::Console;
use crate::error::QuizError;
use crate::prompt::{self, REPLAY_PROMPT};
use crate::reader::{self, UserAnswer};
use crate::report;
use crate::scorer::Verdict;
use crate::state::{QuizState, Session};

/// Plays the session until the player declines a replay.
///
/// Returns the number of completed passes.
#[instrument(level = "info", skip_all, fields(questions = session.questions().len()))]
pub async fn run<R, W>(session: &mut Session, console: &mut Console<R, W>) -> Result<u32, QuizError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut pending: Option<UserAnswer> = None;
    let mut passes = 0;

    loop {
        match session.state() {
            QuizState::AwaitingQuestion | QuizState::Complete => {}
            QuizState::Presenting => {
                if let Some(question) = session.current_question() {
                    let text = prompt::render(question, session.current_index(), session.questions().len());
                    console.prompt(&text).await?;
                }
            }
            QuizState::AwaitingAnswer => {
                if let Some(question) = session.current_question() {
                    pending = Some(reader::read_answer(console, question).await?);
                }
            }
            QuizState::Scoring => {
                if let Some(answer) = pending.take() {
                    let index = session.current_index();
                    if let Some(verdict) = session.answer_current(&answer) {
                        tracing::info!(
                            "Question #{} answered {:?}. Correctness: {}",
                            index + 1,
                            answer,
                            verdict.correct
                        );
                        announce(console, &verdict).await?;
                    }
                }
            }
            QuizState::Reporting => {
                let summary = report::summarize(session);
                tracing::info!(
                    "Completed quiz with {}/{} ({:.1}%)",
                    summary.score,
                    summary.max_score,
                    summary.percentage
                );
                console.say(&summary.to_string()).await?;
                passes += 1;
            }
            QuizState::AwaitingReplay => {
                let replay = ask_replay(console).await?;
                if replay {
                    tracing::info!("Player starts another round");
                    session.reset();
                }
                session.advance(replay);
                continue;
            }
            QuizState::Terminated => return Ok(passes),
        }
        session.advance(false);
    }
}

async fn announce<R, W>(console: &mut Console<R, W>, verdict: &Verdict) -> Result<(), QuizError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if verdict.correct {
        return console.say("✅ Correct!").await;
    }
    console.say("❌ Incorrect!").await?;
    if let Some(reveal) = &verdict.reveal {
        console.say(&format!("The correct answer is: {reveal}")).await?;
    }
    Ok(())
}

/// Asks whether to play again. End of input counts as a no.
pub async fn ask_replay<R, W>(console: &mut Console<R, W>) -> Result<bool, QuizError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.prompt(REPLAY_PROMPT).await?;
    Ok(console.read_line().await?.is_some_and(|line| wants_replay(&line)))
}

pub fn wants_replay(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "yes" | "y")
}
