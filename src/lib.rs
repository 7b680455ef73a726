pub mod ai;
pub mod ai_worker;
pub mod analytics;
pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod navigation;
pub mod questions;
pub mod session;
pub mod streak;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use ai::{HintBackend, HintState, HintTracker, HttpHintClient};
pub use analytics::Analytics;
pub use app::{App, Command, Screen};
pub use config::{Config, QuestionSource};
pub use error::{AnalyticsUnsupported, HintRequestError, LoadError};
pub use models::{AnswerMark, AppEvent, Overlay, Question};
pub use navigation::NavigationController;
pub use questions::LoadStatus;
pub use session::{handle_mouse, handle_quiz_input};
pub use streak::StreakTracker;
pub use ui::draw;
