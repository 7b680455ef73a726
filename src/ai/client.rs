use crate::ai::prompt::{ChatMessage, build_messages};
use crate::error::HintRequestError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const NO_ANSWER_TEXT: &str = "Sorry, no answer was returned.";

/// Transport for a single hint exchange.
#[async_trait]
pub trait HintBackend: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, HintRequestError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<Reply>,
}

#[derive(Debug, Deserialize)]
struct Reply {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the reply text; a missing or empty reply yields the fallback text.
pub fn parse_reply(body: &[u8]) -> Result<String, HintRequestError> {
    let response: ChatResponse = serde_json::from_slice(body)?;
    let content = response
        .reply
        .and_then(|reply| reply.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| NO_ANSWER_TEXT.to_string());
    Ok(content)
}

#[derive(Debug, Clone)]
pub struct HttpHintClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpHintClient {
    pub fn new(endpoint: &str) -> Result<Self, HintRequestError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl HintBackend for HttpHintClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, HintRequestError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HintRequestError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_reply(&body)
    }
}

/// Ask `backend` about one question. Exactly one attempt, no timeout.
pub async fn request_hint(
    backend: &dyn HintBackend,
    question: &str,
    answers: &[String],
) -> Result<String, HintRequestError> {
    backend.complete(build_messages(question, answers)).await
}
