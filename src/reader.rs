use std::collections::BTreeSet;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::instrument;

use crate::console::Console;
use crate::error::{InputError, QuizError};
use crate::prompt::ANSWER_PROMPT;
use crate::store::{Question, QuestionKind};

/// A structurally valid answer, resolved from what the player typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAnswer {
    Choice(String),
    Bool(bool),
    Selection(Vec<String>),
    Text(String),
}

/// Parses one line of input against `question`.
///
/// Numbers are 1-based positions in the question's option list. Free text is
/// trimmed and lowercased; an empty line is a valid (if unlikely) answer.
pub fn parse_answer(question: &Question, line: &str) -> Result<UserAnswer, InputError> {
    let line = line.trim();

    match question.kind() {
        QuestionKind::MultipleChoice { options, .. } => {
            let choice = parse_index(line, options.len())?;
            Ok(UserAnswer::Choice(options[choice].clone()))
        }
        QuestionKind::TrueFalse { .. } => {
            let choice = parse_index(line, 2)?;
            Ok(UserAnswer::Bool(choice == 0))
        }
        QuestionKind::MultiSelect { options, .. } => {
            let choices = parse_selection(line, options.len())?;
            Ok(UserAnswer::Selection(
                choices.into_iter().map(|i| options[i].clone()).collect(),
            ))
        }
        QuestionKind::FillBlank { .. } | QuestionKind::ShortAnswer { .. } => {
            Ok(UserAnswer::Text(line.to_lowercase()))
        }
    }
}

/// Prompts until the player types something `question` can take.
///
/// Invalid input gets the corrective hint and another prompt. Running out of
/// input is the only way out without an answer.
#[instrument(level = "debug", skip_all, fields(kind = question.kind().type_name()))]
pub async fn read_answer<R, W>(
    console: &mut Console<R, W>,
    question: &Question,
) -> Result<UserAnswer, QuizError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        console.prompt(ANSWER_PROMPT).await?;
        let line = console.read_line().await?.ok_or(QuizError::InputClosed)?;
        match parse_answer(question, &line) {
            Ok(answer) => return Ok(answer),
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line, e);
                console.say(&e.to_string()).await?;
            }
        }
    }
}

/// What a single typed token means against a 1-based list of `max` options.
enum Token {
    Index(usize),
    OutOfRange,
    NotANumber,
}

fn classify(token: &str, max: usize) -> Token {
    if let Ok(n) = token.parse::<i64>() {
        return match usize::try_from(n) {
            Ok(n) if (1..=max).contains(&n) => Token::Index(n - 1),
            _ => Token::OutOfRange,
        };
    }
    // Integers too long for i64 are still integers.
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Token::OutOfRange
    } else {
        Token::NotANumber
    }
}

fn parse_index(token: &str, max: usize) -> Result<usize, InputError> {
    match classify(token, max) {
        Token::Index(i) => Ok(i),
        Token::OutOfRange => Err(InputError::OutOfRange { min: 1, max }),
        Token::NotANumber => Err(InputError::NotANumber),
    }
}

fn parse_selection(line: &str, max: usize) -> Result<BTreeSet<usize>, InputError> {
    let mut choices = BTreeSet::new();
    let mut out_of_range = false;

    for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match classify(token, max) {
            Token::Index(i) => {
                choices.insert(i);
            }
            Token::OutOfRange => out_of_range = true,
            Token::NotANumber => return Err(InputError::NotNumbers),
        }
    }

    if out_of_range {
        return Err(InputError::SelectionOutOfRange { min: 1, max });
    }
    if choices.is_empty() {
        return Err(InputError::NoSelection);
    }
    Ok(choices)
}
