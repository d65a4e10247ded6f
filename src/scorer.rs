use std::collections::HashSet;

use crate::reader::UserAnswer;
use crate::store::{Question, QuestionKind};

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    /// Canonical answer to show after a miss. Free-text kinds keep theirs hidden.
    pub reveal: Option<String>,
}

pub fn evaluate(question: &Question, answer: &UserAnswer) -> Verdict {
    let (correct, reveal) = match (question.kind(), answer) {
        (QuestionKind::MultipleChoice { answer: expected, .. }, UserAnswer::Choice(given)) => {
            (same_text(given, expected), Some(expected.clone()))
        }
        (QuestionKind::MultipleChoice { answer: expected, .. }, _) => (false, Some(expected.clone())),

        (QuestionKind::TrueFalse { answer: expected }, UserAnswer::Bool(given)) => {
            (given == expected, Some(bool_label(*expected).to_string()))
        }
        (QuestionKind::TrueFalse { answer: expected }, _) => {
            (false, Some(bool_label(*expected).to_string()))
        }

        (QuestionKind::MultiSelect { answer: expected, .. }, UserAnswer::Selection(given)) => {
            let given: HashSet<&str> = given.iter().map(String::as_str).collect();
            let wanted: HashSet<&str> = expected.iter().map(String::as_str).collect();
            (given == wanted, Some(expected.join(", ")))
        }
        (QuestionKind::MultiSelect { answer: expected, .. }, _) => (false, Some(expected.join(", "))),

        (QuestionKind::FillBlank { answer: expected }, UserAnswer::Text(given)) => {
            (same_text(given, expected), None)
        }
        (QuestionKind::ShortAnswer { answer: expected, accept }, UserAnswer::Text(given)) => {
            let correct = same_text(given, expected) || accept.iter().any(|alt| same_text(given, alt));
            (correct, None)
        }
        (QuestionKind::FillBlank { .. } | QuestionKind::ShortAnswer { .. }, _) => (false, None),
    };

    Verdict { correct, reveal }
}

fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
