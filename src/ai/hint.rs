use crate::error::HintRequestError;

pub const HINT_UNAVAILABLE_TEXT: &str =
    "Sorry, the AI explanation is not available right now. Please try again.";

/// Identifies one hint request. Issued in strictly increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HintToken(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HintState {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failure(String),
}

/// Hint lifecycle for the question on screen.
///
/// Only the most recently issued token may complete; anything older, or a
/// request whose overlay was dismissed, is dropped on arrival.
#[derive(Debug, Default)]
pub struct HintTracker {
    state: HintState,
    last_issued: u64,
    outstanding: Option<HintToken>,
    question_id: Option<u32>,
}

impl HintTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HintState {
        &self.state
    }

    pub fn question_id(&self) -> Option<u32> {
        self.question_id
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, HintState::Pending)
    }

    /// Start a new request for `question_id`, superseding any in flight.
    pub fn begin(&mut self, question_id: u32) -> HintToken {
        self.last_issued += 1;
        let token = HintToken(self.last_issued);
        if let Some(previous) = self.outstanding.replace(token) {
            tracing::debug!(?previous, ?token, "superseding in-flight hint request");
        }
        self.question_id = Some(question_id);
        self.state = HintState::Pending;
        token
    }

    /// Apply a completion. Returns false when the result was stale and ignored.
    pub fn complete(&mut self, token: HintToken, result: Result<String, HintRequestError>) -> bool {
        if self.outstanding != Some(token) {
            tracing::debug!(?token, "ignoring stale hint response");
            return false;
        }
        self.outstanding = None;

        self.state = match result {
            Ok(text) => HintState::Success(text),
            Err(e) => {
                tracing::warn!("AI request failed: {}", e);
                HintState::Failure(HINT_UNAVAILABLE_TEXT.to_string())
            }
        };
        true
    }

    /// The overlay was closed: forget the outstanding request.
    pub fn abandon(&mut self) {
        if let Some(token) = self.outstanding.take() {
            tracing::debug!(?token, "hint request abandoned");
        }
        self.state = HintState::Idle;
        self.question_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::{HintBackend, NO_ANSWER_TEXT, request_hint};
    use crate::ai::prompt::ChatMessage;
    use async_trait::async_trait;

    struct FailingBackend;

    #[async_trait]
    impl HintBackend for FailingBackend {
        async fn complete(&self, _messages: Vec<ChatMessage>) -> Result<String, HintRequestError> {
            Err(HintRequestError::Status(500))
        }
    }

    struct FixedBackend(&'static str);

    #[async_trait]
    impl HintBackend for FixedBackend {
        async fn complete(&self, _messages: Vec<ChatMessage>) -> Result<String, HintRequestError> {
            crate::ai::parse_reply(self.0.as_bytes())
        }
    }

    #[test]
    fn test_begin_moves_to_pending() {
        let mut tracker = HintTracker::new();
        assert_eq!(tracker.state(), &HintState::Idle);
        tracker.begin(1);
        assert!(tracker.is_pending());
        assert_eq!(tracker.question_id(), Some(1));
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let mut tracker = HintTracker::new();
        let token = tracker.begin(1);
        tracker.complete(token, Ok("old".to_string()));
        tracker.begin(2);
        assert_eq!(tracker.state(), &HintState::Pending);
    }

    #[test]
    fn test_tokens_increase() {
        let mut tracker = HintTracker::new();
        let first = tracker.begin(1);
        let second = tracker.begin(1);
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_failing_backend_yields_apology() {
        let mut tracker = HintTracker::new();
        let token = tracker.begin(1);
        let result = request_hint(&FailingBackend, "Q?", &["A".to_string()]).await;
        assert!(tracker.complete(token, result));
        assert_eq!(
            tracker.state(),
            &HintState::Failure(HINT_UNAVAILABLE_TEXT.to_string())
        );
    }

    #[tokio::test]
    async fn test_success_reply_is_shown_verbatim() {
        let mut tracker = HintTracker::new();
        let token = tracker.begin(1);
        let backend = FixedBackend(r#"{"reply": {"content": "X"}}"#);
        let result = request_hint(&backend, "Q?", &["A".to_string()]).await;
        tracker.complete(token, result);
        assert_eq!(tracker.state(), &HintState::Success("X".to_string()));
    }

    #[tokio::test]
    async fn test_empty_reply_uses_fallback() {
        let mut tracker = HintTracker::new();
        let token = tracker.begin(1);
        let backend = FixedBackend(r#"{"reply": {}}"#);
        let result = request_hint(&backend, "Q?", &["A".to_string()]).await;
        tracker.complete(token, result);
        assert_eq!(
            tracker.state(),
            &HintState::Success(NO_ANSWER_TEXT.to_string())
        );
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut tracker = HintTracker::new();
        let first = tracker.begin(1);
        let second = tracker.begin(2);

        assert!(!tracker.complete(first, Ok("late".to_string())));
        assert_eq!(tracker.state(), &HintState::Pending);

        assert!(tracker.complete(second, Ok("fresh".to_string())));
        assert_eq!(tracker.state(), &HintState::Success("fresh".to_string()));
    }

    #[test]
    fn test_abandoned_response_is_ignored() {
        let mut tracker = HintTracker::new();
        let token = tracker.begin(1);
        tracker.abandon();
        assert!(!tracker.complete(token, Ok("late".to_string())));
        assert_eq!(tracker.state(), &HintState::Idle);
    }

    #[test]
    fn test_completion_applies_once() {
        let mut tracker = HintTracker::new();
        let token = tracker.begin(1);
        assert!(tracker.complete(token, Ok("a".to_string())));
        assert!(!tracker.complete(token, Err(HintRequestError::Status(500))));
        assert_eq!(tracker.state(), &HintState::Success("a".to_string()));
    }
}
