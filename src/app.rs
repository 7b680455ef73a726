use crate::ai::HintTracker;
use crate::error::LoadError;
use crate::models::{AppEvent, HintRequest, Overlay, Question};
use crate::navigation::NavigationController;
use crate::questions::LoadStatus;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Side effects the event loop must carry out on behalf of the [`App`].
#[derive(Debug)]
pub enum Command {
    RequestHint(HintRequest),
}

/// Which top-level view the shell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Empty,
    Quiz,
}

#[derive(Debug)]
pub struct App {
    pub status: LoadStatus,
    pub nav: NavigationController,
    pub hint: HintTracker,
    pub overlay: Overlay,
    /// Answer row under the keyboard cursor.
    pub highlighted: usize,
    pub ticks: u64,
    pub should_quit: bool,
    images_dir: PathBuf,
}

impl App {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            status: LoadStatus::Loading,
            nav: NavigationController::default(),
            hint: HintTracker::new(),
            overlay: Overlay::None,
            highlighted: 0,
            ticks: 0,
            should_quit: false,
            images_dir: images_dir.into(),
        }
    }

    pub fn screen(&self) -> Screen {
        if self.status.is_loading() {
            Screen::Loading
        } else if self.nav.is_empty() {
            Screen::Empty
        } else {
            Screen::Quiz
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::QuestionsLoaded(result) => self.questions_loaded(result),
            AppEvent::Hint { token, result } => {
                self.hint.complete(token, result);
            }
        }
    }

    pub fn questions_loaded(&mut self, result: Result<Vec<Question>, LoadError>) {
        if !self.status.is_loading() {
            tracing::warn!("questions already loaded, ignoring second result");
            return;
        }
        match result {
            Ok(questions) => {
                self.nav = NavigationController::new(questions);
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                self.nav = NavigationController::default();
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.nav.current_question()
    }

    pub fn select_answer(&mut self, index: usize, now: Instant) -> Option<bool> {
        let outcome = self.nav.select_answer(index, now);
        if outcome.is_some() {
            self.highlighted = index;
        }
        outcome
    }

    pub fn select_highlighted(&mut self, now: Instant) -> Option<bool> {
        self.select_answer(self.highlighted, now)
    }

    pub fn move_highlight(&mut self, down: bool) {
        let Some(count) = self.current_question().map(|q| q.answers.len()) else {
            return;
        };
        if self.nav.selected_answer().is_some() || count == 0 {
            return;
        }
        self.highlighted = if down {
            (self.highlighted + 1).min(count - 1)
        } else {
            self.highlighted.saturating_sub(1)
        };
    }

    pub fn next(&mut self) {
        self.nav.next();
        self.highlighted = 0;
    }

    pub fn previous(&mut self) {
        self.nav.previous();
        self.highlighted = 0;
    }

    pub fn random(&mut self) {
        self.nav.random();
        self.highlighted = 0;
    }

    pub fn reset_streak(&mut self) {
        self.nav.reset_streak();
    }

    /// Open the hint overlay and start a request for the current question.
    pub fn request_hint(&mut self) -> Option<Command> {
        let question = self.nav.current_question()?;
        let request = HintRequest {
            token: self.hint.begin(question.id),
            question_id: question.id,
            question: question.question.clone(),
            answers: question.answers.clone(),
        };
        self.overlay = Overlay::AiHint;
        Some(Command::RequestHint(request))
    }

    pub fn image_path(&self) -> Option<PathBuf> {
        let image_id = self.current_question()?.image_id?;
        Some(image_path(&self.images_dir, image_id))
    }

    pub fn open_lightbox(&mut self) -> bool {
        if self.image_path().is_none() {
            return false;
        }
        self.close_overlay();
        self.overlay = Overlay::Lightbox;
        true
    }

    pub fn open_about(&mut self) {
        self.close_overlay();
        self.overlay = Overlay::About;
    }

    pub fn close_overlay(&mut self) {
        if self.overlay == Overlay::AiHint {
            self.hint.abandon();
        }
        self.overlay = Overlay::None;
    }

    pub fn tick(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);
        self.nav.tick(now);
    }
}

pub fn image_path(images_dir: &Path, image_id: u32) -> PathBuf {
    images_dir.join(format!("{}.png", image_id))
}
