use crate::models::Question;
use crate::streak::StreakTracker;
use rand::Rng;
use std::time::Instant;

/// Current question, locked-in answer and the streak they feed.
#[derive(Debug, Default)]
pub struct NavigationController {
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<usize>,
    streak: StreakTracker,
}

impl NavigationController {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn streak(&self) -> &StreakTracker {
        &self.streak
    }

    /// Lock in `index` and feed the streak in the same step.
    /// Returns whether the answer was correct, or `None` when nothing changed.
    pub fn select_answer(&mut self, index: usize, now: Instant) -> Option<bool> {
        if self.selected_answer.is_some() {
            return None;
        }
        let question = self.questions.get(self.current_index)?;
        if index >= question.answers.len() {
            return None;
        }

        let is_correct = question.is_correct(index);
        tracing::debug!(
            question_id = question.id,
            index,
            is_correct,
            "answer selected"
        );
        self.selected_answer = Some(index);
        self.streak.report_answer(is_correct, now);
        Some(is_correct)
    }

    pub fn next(&mut self) {
        self.selected_answer = None;
        let len = self.questions.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
    }

    pub fn previous(&mut self) {
        self.selected_answer = None;
        let len = self.questions.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
    }

    pub fn random(&mut self) {
        self.random_with(&mut rand::thread_rng());
    }

    pub fn random_with<R: Rng>(&mut self, rng: &mut R) {
        self.selected_answer = None;
        let len = self.questions.len();
        if len == 0 {
            return;
        }
        self.current_index = rng.gen_range(0..len);
    }

    pub fn reset_streak(&mut self) {
        self.streak.reset_streak();
    }

    pub fn tick(&mut self, now: Instant) {
        self.streak.tick(now);
    }
}
