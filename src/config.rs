use std::path::PathBuf;

pub const DEFAULT_QUESTIONS: &str = "data/questions.json";
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_HINT_URL: &str = "https://einbuergerung-ai-api.onrender.com/chat";

/// Where the question sequence comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    File(PathBuf),
    Url(String),
}

impl QuestionSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            QuestionSource::Url(raw.to_string())
        } else {
            QuestionSource::File(PathBuf::from(raw))
        }
    }
}

impl std::fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionSource::File(path) => write!(f, "{}", path.display()),
            QuestionSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub questions: QuestionSource,
    pub images_dir: PathBuf,
    pub hint_url: String,
    pub analytics_url: Option<String>,
    pub analytics_disabled: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            questions: QuestionSource::parse(
                &get("FRAGEN_QUESTIONS").unwrap_or_else(|| DEFAULT_QUESTIONS.to_string()),
            ),
            images_dir: get("FRAGEN_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
            hint_url: get("FRAGEN_HINT_URL").unwrap_or_else(|| DEFAULT_HINT_URL.to_string()),
            analytics_url: get("FRAGEN_ANALYTICS_URL"),
            analytics_disabled: get("FRAGEN_ANALYTICS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "off" | "0" | "false"))
                .unwrap_or(false),
            log_file: get("FRAGEN_LOG").map(PathBuf::from),
        }
    }
}
