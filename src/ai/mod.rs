pub mod client;
pub mod hint;
pub mod prompt;

// Public API exports
pub use client::{HintBackend, HttpHintClient, NO_ANSWER_TEXT, parse_reply, request_hint};
pub use hint::{HINT_UNAVAILABLE_TEXT, HintState, HintToken, HintTracker};
pub use prompt::{ChatMessage, build_messages};
