use crate::reader::UserAnswer;
use crate::scorer::{self, Verdict};
use crate::store::Question;

/// Steps of one quiz run, in the order the runner walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizState {
    #[default]
    AwaitingQuestion,
    Presenting,
    AwaitingAnswer,
    Scoring,
    Complete,
    Reporting,
    AwaitingReplay,
    Terminated,
}

impl QuizState {
    /// Follows the only legal edge out of `self`.
    ///
    /// `has_more` matters when leaving `AwaitingQuestion`/`Scoring`, `replay`
    /// when leaving `AwaitingReplay`. `Terminated` is absorbing.
    pub fn next(self, has_more: bool, replay: bool) -> Self {
        match self {
            QuizState::AwaitingQuestion if has_more => QuizState::Presenting,
            QuizState::AwaitingQuestion => QuizState::Complete,
            QuizState::Presenting => QuizState::AwaitingAnswer,
            QuizState::AwaitingAnswer => QuizState::Scoring,
            QuizState::Scoring => QuizState::AwaitingQuestion,
            QuizState::Complete => QuizState::Reporting,
            QuizState::Reporting => QuizState::AwaitingReplay,
            QuizState::AwaitingReplay if replay => QuizState::AwaitingQuestion,
            QuizState::AwaitingReplay | QuizState::Terminated => QuizState::Terminated,
        }
    }
}

/// A loaded question set plus the progress through it.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    current: usize,
    score: u64,
    state: QuizState,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            state: QuizState::default(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn max_score(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.points())).sum()
    }

    /// Moves to the next state and returns it.
    pub fn advance(&mut self, replay: bool) -> QuizState {
        let next = self.state.next(!self.is_complete(), replay);
        tracing::debug!("State {:?} -> {:?}", self.state, next);
        self.state = next;
        next
    }

    /// Scores `answer` against the current question and moves past it.
    ///
    /// Returns `None` once every question has been answered.
    pub fn answer_current(&mut self, answer: &UserAnswer) -> Option<Verdict> {
        let question = self.questions.get(self.current)?;
        let verdict = scorer::evaluate(question, answer);
        if verdict.correct {
            self.score += u64::from(question.points());
        }
        self.current += 1;
        Some(verdict)
    }

    /// Clears progress for another pass over the same questions.
    ///
    /// The state is left alone; the runner moves out of `AwaitingReplay`
    /// through `advance(true)`.
    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
    }
}
