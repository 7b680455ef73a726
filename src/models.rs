use crate::ai::HintToken;
use crate::error::{HintRequestError, LoadError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub answers: Vec<String>,
    pub correct: usize,
    #[serde(rename = "imageId", default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u32>,
}

impl Question {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}

/// Visual state of one answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMark {
    Unmarked,
    Correct,
    Wrong,
}

/// Per-option marks for `question` given the locked-in selection.
pub fn answer_marks(question: &Question, selected: Option<usize>) -> Vec<AnswerMark> {
    (0..question.answers.len())
        .map(|index| match selected {
            None => AnswerMark::Unmarked,
            Some(_) if index == question.correct => AnswerMark::Correct,
            Some(chosen) if index == chosen => AnswerMark::Wrong,
            Some(_) => AnswerMark::Unmarked,
        })
        .collect()
}

/// At most one overlay is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Lightbox,
    AiHint,
    About,
}

#[derive(Debug)]
pub struct HintRequest {
    pub token: HintToken,
    pub question_id: u32,
    pub question: String,
    pub answers: Vec<String>,
}

/// Completions of background work, delivered to the UI task.
#[derive(Debug)]
pub enum AppEvent {
    QuestionsLoaded(Result<Vec<Question>, LoadError>),
    Hint {
        token: HintToken,
        result: Result<String, HintRequestError>,
    },
}
