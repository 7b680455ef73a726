use std::time::{Duration, Instant};

/// Streak length that triggers the celebration.
pub const STREAK_GOAL: u32 = 17;
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(3);

/// Single-shot deadline. Scheduling again replaces the pending deadline.
#[derive(Debug, Default, Clone, Copy)]
pub struct CelebrationTimer {
    deadline: Option<Instant>,
}

impl CelebrationTimer {
    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true once, when the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct StreakTracker {
    streak: u32,
    celebrating: bool,
    timer: CelebrationTimer,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    /// When the running celebration ends, if one is running.
    pub fn celebration_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn report_answer(&mut self, is_correct: bool, now: Instant) {
        if !is_correct {
            // The celebration, if any, runs out on its own timer.
            self.streak = 0;
            return;
        }

        self.streak = self.streak.saturating_add(1);
        if self.streak == STREAK_GOAL {
            tracing::info!(streak = self.streak, "streak goal reached");
            self.celebrating = true;
            self.timer.cancel();
            self.timer.schedule(now, CELEBRATION_DURATION);
        }
    }

    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }

    /// Advance time; clears the celebration once its window is over.
    pub fn tick(&mut self, now: Instant) {
        if self.timer.fire_if_due(now) {
            self.celebrating = false;
        }
    }
}

/// Completes once `deadline` has passed; never completes without one.
pub async fn celebration_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_correct(tracker: &mut StreakTracker, times: u32, now: Instant) {
        for _ in 0..times {
            tracker.report_answer(true, now);
        }
    }

    #[test]
    fn test_correct_answers_increment() {
        let mut tracker = StreakTracker::new();
        let now = Instant::now();
        answer_correct(&mut tracker, 3, now);
        assert_eq!(tracker.streak(), 3);
        assert!(!tracker.is_celebrating());
    }

    #[test]
    fn test_wrong_answer_resets_from_any_value() {
        let now = Instant::now();
        for start in [0, 1, 5, 16, 40] {
            let mut tracker = StreakTracker::new();
            answer_correct(&mut tracker, start, now);
            tracker.report_answer(false, now);
            assert_eq!(tracker.streak(), 0);
        }
    }

    #[test]
    fn test_goal_triggers_celebration() {
        let mut tracker = StreakTracker::new();
        let now = Instant::now();
        answer_correct(&mut tracker, STREAK_GOAL - 1, now);
        assert!(!tracker.is_celebrating());
        tracker.report_answer(true, now);
        assert_eq!(tracker.streak(), 17);
        assert!(tracker.is_celebrating());
    }

    #[test]
    fn test_celebration_clears_after_window() {
        let mut tracker = StreakTracker::new();
        let start = Instant::now();
        answer_correct(&mut tracker, STREAK_GOAL, start);

        tracker.tick(start + Duration::from_millis(2900));
        assert!(tracker.is_celebrating());

        tracker.tick(start + CELEBRATION_DURATION);
        assert!(!tracker.is_celebrating());
    }

    #[test]
    fn test_wrong_answer_keeps_celebration_running() {
        let mut tracker = StreakTracker::new();
        let start = Instant::now();
        answer_correct(&mut tracker, STREAK_GOAL, start);
        tracker.report_answer(false, start + Duration::from_secs(1));

        assert_eq!(tracker.streak(), 0);
        assert!(tracker.is_celebrating());

        tracker.tick(start + Duration::from_secs(3));
        assert!(!tracker.is_celebrating());
    }

    #[test]
    fn test_streak_past_goal_does_not_retrigger() {
        let mut tracker = StreakTracker::new();
        let start = Instant::now();
        answer_correct(&mut tracker, STREAK_GOAL, start);
        tracker.tick(start + CELEBRATION_DURATION);

        answer_correct(&mut tracker, 5, start + Duration::from_secs(4));
        assert_eq!(tracker.streak(), 22);
        assert!(!tracker.is_celebrating());
    }

    #[test]
    fn test_retrigger_reschedules_window() {
        let mut tracker = StreakTracker::new();
        let start = Instant::now();
        answer_correct(&mut tracker, STREAK_GOAL, start);

        tracker.reset_streak();
        let second = start + Duration::from_secs(2);
        answer_correct(&mut tracker, STREAK_GOAL, second);

        tracker.tick(start + CELEBRATION_DURATION);
        assert!(tracker.is_celebrating());
        tracker.tick(second + CELEBRATION_DURATION);
        assert!(!tracker.is_celebrating());
    }

    #[test]
    fn test_manual_reset() {
        let mut tracker = StreakTracker::new();
        answer_correct(&mut tracker, 9, Instant::now());
        tracker.reset_streak();
        assert_eq!(tracker.streak(), 0);
    }

    #[test]
    fn test_timer_fires_once() {
        let mut timer = CelebrationTimer::default();
        let now = Instant::now();
        timer.schedule(now, Duration::from_secs(1));
        assert!(timer.is_pending());
        assert!(!timer.fire_if_due(now));
        assert!(timer.fire_if_due(now + Duration::from_secs(1)));
        assert!(!timer.fire_if_due(now + Duration::from_secs(2)));

        timer.schedule(now, Duration::from_secs(1));
        timer.cancel();
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_celebration_deadline_is_three_seconds_out() {
        let mut tracker = StreakTracker::new();
        let now = Instant::now();
        assert_eq!(tracker.celebration_deadline(), None);

        answer_correct(&mut tracker, STREAK_GOAL, now);
        assert_eq!(tracker.celebration_deadline(), Some(now + CELEBRATION_DURATION));

        tracker.tick(now + CELEBRATION_DURATION);
        assert_eq!(tracker.celebration_deadline(), None);
    }

    #[tokio::test]
    async fn test_celebration_elapsed_wakes_at_deadline() {
        let mut tracker = StreakTracker::new();
        let started = Instant::now();
        answer_correct(&mut tracker, STREAK_GOAL, started);

        // Shorter than the three second window, so the deadline has not passed yet.
        let early = tokio::time::timeout(
            Duration::from_millis(20),
            celebration_elapsed(tracker.celebration_deadline()),
        )
        .await;
        assert!(early.is_err());
        assert!(tracker.is_celebrating());

        let overdue = started - CELEBRATION_DURATION;
        let mut tracker = StreakTracker::new();
        answer_correct(&mut tracker, STREAK_GOAL, overdue);
        let woke = tokio::time::timeout(
            Duration::from_secs(1),
            celebration_elapsed(tracker.celebration_deadline()),
        )
        .await;
        assert!(woke.is_ok());

        tracker.tick(Instant::now());
        assert!(!tracker.is_celebrating());
    }

    #[tokio::test]
    async fn test_celebration_elapsed_pends_without_deadline() {
        let waited =
            tokio::time::timeout(Duration::from_millis(20), celebration_elapsed(None)).await;
        assert!(waited.is_err());
    }
}
