use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::instrument;

use super::question::{default_questions, Question};
use crate::error::StoreError;

#[allow(async_fn_in_trait)]
pub trait RetrieveQuestions {
    /// `Ok(None)` means there is no stored question set yet.
    async fn retrieve_questions(&self) -> Result<Option<Vec<Question>>, StoreError>;
}

#[allow(async_fn_in_trait)]
pub trait PersistQuestions {
    async fn persist_questions(&self, questions: &[Question]) -> Result<(), StoreError>;
}

/// Question set kept as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RetrieveQuestions for JsonFileStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    async fn retrieve_questions(&self) -> Result<Option<Vec<Question>>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let questions = parse_questions(&raw)?;
        for question in &questions {
            tracing::debug!("Read {}", question);
        }
        Ok(Some(questions))
    }
}

impl PersistQuestions for JsonFileStore {
    #[instrument(level = "debug", skip(self, questions), fields(path = %self.path.display()))]
    async fn persist_questions(&self, questions: &[Question]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        questions.serialize(&mut ser)?;
        tokio::fs::write(&self.path, buf).await?;
        Ok(())
    }
}

/// Parses and validates a question file's contents.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, StoreError> {
    let questions: Vec<Question> = serde_json::from_str(raw)?;
    if questions.is_empty() {
        return Err(StoreError::Empty);
    }
    for (i, question) in questions.iter().enumerate() {
        question
            .validate()
            .map_err(|reason| StoreError::Invalid { index: i + 1, reason })?;
    }
    Ok(questions)
}

/// Where the session's questions came from.
#[derive(Debug)]
pub enum LoadSource {
    File,
    /// No file existed; defaults were written for next time.
    DefaultsPersisted,
    /// No file existed and writing the defaults failed.
    DefaultsUnsaved(StoreError),
    /// The file exists but could not be used.
    Fallback(StoreError),
}

#[derive(Debug)]
pub struct LoadedQuestions {
    pub questions: Vec<Question>,
    pub source: LoadSource,
}

/// Loads the question set, falling back to the built-in defaults.
///
/// Never fails: a broken store only costs the custom questions, and a missing
/// one is seeded with the defaults on a best-effort basis.
#[instrument(level = "info", skip(store))]
pub async fn load_questions<S>(store: &S) -> LoadedQuestions
where
    S: RetrieveQuestions + PersistQuestions,
{
    match store.retrieve_questions().await {
        Ok(Some(questions)) => {
            tracing::info!("Loaded {} questions from store", questions.len());
            LoadedQuestions {
                questions,
                source: LoadSource::File,
            }
        }
        Ok(None) => {
            let questions = default_questions();
            let source = match store.persist_questions(&questions).await {
                Ok(()) => {
                    tracing::info!("No question file found, wrote defaults");
                    LoadSource::DefaultsPersisted
                }
                Err(e) => {
                    tracing::warn!("Failed to save default questions: {}", e);
                    LoadSource::DefaultsUnsaved(e)
                }
            };
            LoadedQuestions { questions, source }
        }
        Err(e) => {
            tracing::error!("Error loading questions: {}", e);
            LoadedQuestions {
                questions: default_questions(),
                source: LoadSource::Fallback(e),
            }
        }
    }
}
