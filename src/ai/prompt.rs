use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

const SYSTEM_PROMPT: &str = "You are a friendly tutor for the German Einbürgerungstest. \
Explain clearly in short in English \
Translate the question, then give a brief explanation of the topic and the key ideas. \
Do NOT say directly which answer option is correct. \
Instead, give hints that help the learner think and recognise the right answer on their own.";

/// System + user message pair for one hint request.
pub fn build_messages(question: &str, answers: &[String]) -> Vec<ChatMessage> {
    let user = format!(
        "Here is a multiple-choice question from the German Einbürgerungstest.\n\
Question: \"{}\"\n\
Options: {}\n\n\
Explain what the question is about, translate it, and describe the important background in a neutral way. \
Give subtle hints but do not name the correct option explicitly.",
        question,
        answers.join(" | ")
    );

    vec![
        ChatMessage::new("system", SYSTEM_PROMPT),
        ChatMessage::new("user", user),
    ]
}
