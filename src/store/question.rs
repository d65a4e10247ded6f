use std::fmt;

use serde::{Deserialize, Serialize};

/// One quiz item as stored in the question file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    question: String,
    points: u32,
    #[serde(flatten)]
    kind: QuestionKind,
}

/// Type-specific part of a question, tagged by the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        answer: String,
    },
    TrueFalse {
        answer: bool,
    },
    MultiSelect {
        options: Vec<String>,
        answer: Vec<String>,
    },
    FillBlank {
        answer: String,
    },
    ShortAnswer {
        answer: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        accept: Vec<String>,
    },
}

impl Question {
    pub fn new(text: impl Into<String>, points: u32, kind: QuestionKind) -> Self {
        Self {
            question: text.into(),
            points,
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.question
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Numbered choices shown to the player. Free-text kinds have none.
    pub fn options(&self) -> Vec<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. }
            | QuestionKind::MultiSelect { options, .. } => {
                options.iter().map(String::as_str).collect()
            }
            QuestionKind::TrueFalse { .. } => vec!["True", "False"],
            QuestionKind::FillBlank { .. } | QuestionKind::ShortAnswer { .. } => vec![],
        }
    }

    /// Checks that every answer can actually be picked from the options.
    pub fn validate(&self) -> Result<(), String> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, answer } => {
                if options.is_empty() {
                    return Err("multiple_choice question has no options".into());
                }
                if !options.contains(answer) {
                    return Err(format!("answer '{answer}' is not one of the options"));
                }
            }
            QuestionKind::MultiSelect { options, answer } => {
                if options.is_empty() {
                    return Err("multi_select question has no options".into());
                }
                if answer.is_empty() {
                    return Err("multi_select question has no correct options".into());
                }
                if let Some(missing) = answer.iter().find(|a| !options.contains(a)) {
                    return Err(format!("answer '{missing}' is not one of the options"));
                }
            }
            QuestionKind::TrueFalse { .. }
            | QuestionKind::FillBlank { .. }
            | QuestionKind::ShortAnswer { .. } => {}
        }
        Ok(())
    }
}

impl QuestionKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple_choice",
            QuestionKind::TrueFalse { .. } => "true_false",
            QuestionKind::MultiSelect { .. } => "multi_select",
            QuestionKind::FillBlank { .. } => "fill_blank",
            QuestionKind::ShortAnswer { .. } => "short_answer",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({} pts)", self.kind.type_name(), self.question, self.points)
    }
}

/// The built-in question set, used when no question file is available.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            1,
            QuestionKind::MultipleChoice {
                options: strings(&["London", "Paris", "Berlin", "Madrid"]),
                answer: "Paris".into(),
            },
        ),
        Question::new("The Earth is flat.", 1, QuestionKind::TrueFalse { answer: false }),
        Question::new(
            "Which of these are programming languages?",
            2,
            QuestionKind::MultiSelect {
                options: strings(&["Python", "HTML", "Java", "CSS"]),
                answer: strings(&["Python", "Java"]),
            },
        ),
        Question::new(
            "The process of finding and fixing errors in code is called ______.",
            1,
            QuestionKind::FillBlank {
                answer: "debugging".into(),
            },
        ),
        Question::new(
            "What does 'HTTP' stand for?",
            2,
            QuestionKind::ShortAnswer {
                answer: "HyperText Transfer Protocol".into(),
                accept: strings(&["hypertext transfer protocol"]),
            },
        ),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_kind() {
        let questions = default_questions();
        let kinds: Vec<_> = questions.iter().map(|q| q.kind().type_name()).collect();
        assert_eq!(
            kinds,
            ["multiple_choice", "true_false", "multi_select", "fill_blank", "short_answer"]
        );
        let points: Vec<_> = questions.iter().map(Question::points).collect();
        assert_eq!(points, [1, 1, 2, 1, 2]);
        assert!(questions.iter().all(|q| q.validate().is_ok()));
    }

    #[test]
    fn parses_tagged_json() {
        let raw = r#"[
            {"type": "multiple_choice", "question": "2+2?", "options": ["3", "4"], "answer": "4", "points": 1},
            {"type": "true_false", "question": "Sky is blue.", "answer": true, "points": 1},
            {"type": "short_answer", "question": "CPU?", "answer": "Central Processing Unit", "points": 3}
        ]"#;
        let questions: Vec<Question> = serde_json::from_str(raw).unwrap();

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].options(), ["3", "4"]);
        assert_eq!(questions[1].kind(), &QuestionKind::TrueFalse { answer: true });
        assert_eq!(
            questions[2].kind(),
            &QuestionKind::ShortAnswer {
                answer: "Central Processing Unit".into(),
                accept: vec![],
            }
        );
    }

    #[test]
    fn serializes_type_key_and_skips_empty_accept() {
        let question = Question::new(
            "Name?",
            1,
            QuestionKind::ShortAnswer {
                answer: "x".into(),
                accept: vec![],
            },
        );
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["type"], "short_answer");
        assert_eq!(value["points"], 1);
        assert!(value.get("accept").is_none());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let raw = r#"{"type": "essay", "question": "Why?", "answer": "because", "points": 1}"#;
        assert!(serde_json::from_str::<Question>(raw).is_err());
    }

    #[test]
    fn negative_points_are_rejected() {
        let raw = r#"{"type": "fill_blank", "question": "_", "answer": "a", "points": -1}"#;
        assert!(serde_json::from_str::<Question>(raw).is_err());
    }

    #[test]
    fn validate_catches_answers_outside_options() {
        let bad_choice = Question::new(
            "Pick",
            1,
            QuestionKind::MultipleChoice {
                options: strings(&["a", "b"]),
                answer: "c".into(),
            },
        );
        assert!(bad_choice.validate().is_err());

        let bad_select = Question::new(
            "Pick many",
            1,
            QuestionKind::MultiSelect {
                options: strings(&["a", "b"]),
                answer: strings(&["a", "z"]),
            },
        );
        assert!(bad_select.validate().is_err());

        let no_options = Question::new(
            "Pick",
            1,
            QuestionKind::MultipleChoice {
                options: vec![],
                answer: "a".into(),
            },
        );
        assert!(no_options.validate().is_err());

        let nothing_correct = Question::new(
            "Pick none",
            1,
            QuestionKind::MultiSelect {
                options: strings(&["a", "b"]),
                answer: vec![],
            },
        );
        assert!(nothing_correct.validate().is_err());
    }
}
