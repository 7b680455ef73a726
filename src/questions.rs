use crate::config::QuestionSource;
use crate::error::LoadError;
use crate::models::{AppEvent, Question};
use tokio::sync::mpsc::UnboundedSender;

/// Loading progress of the question sequence. Leaves `Loading` exactly once.
#[derive(Debug, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub async fn load(source: &QuestionSource) -> Result<Vec<Question>, LoadError> {
    let bytes = match source {
        QuestionSource::File(path) => {
            tokio::fs::read(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        QuestionSource::Url(url) => {
            let response = reqwest::get(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status.as_u16()));
            }
            response.bytes().await?.to_vec()
        }
    };

    parse_questions(&bytes)
}

pub fn parse_questions(bytes: &[u8]) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_slice(bytes)?;
    for question in &questions {
        check_shape(question)?;
    }
    Ok(questions)
}

fn check_shape(question: &Question) -> Result<(), LoadError> {
    if question.answers.is_empty() {
        return Err(LoadError::InvalidQuestion {
            id: question.id,
            reason: "no answer options".to_string(),
        });
    }
    if question.correct >= question.answers.len() {
        return Err(LoadError::InvalidQuestion {
            id: question.id,
            reason: format!(
                "correct index {} out of range for {} options",
                question.correct,
                question.answers.len()
            ),
        });
    }
    Ok(())
}

/// Load in the background and report the outcome as a single event.
pub fn spawn_load(source: QuestionSource, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let result = load(&source).await;
        match &result {
            Ok(questions) => {
                tracing::info!(count = questions.len(), %source, "questions loaded")
            }
            Err(e) => tracing::error!(%source, "error fetching questions: {}", e),
        }
        let _ = tx.send(AppEvent::QuestionsLoaded(result));
    });
}
