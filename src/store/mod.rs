pub mod file;
pub mod question;

pub use file::{load_questions, JsonFileStore, LoadSource, LoadedQuestions, PersistQuestions, RetrieveQuestions};
pub use question::{default_questions, Question, QuestionKind};
