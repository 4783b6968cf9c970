// src/state/feedback.rs
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Window the success toast stays visible after a cart/favorites action.
pub const SUCCESS_TOAST_MS: i64 = 3000;
/// Window an item pulses as "recently liked" after a like.
pub const RECENTLY_LIKED_MS: i64 = 2000;

/// Transient presentation flags, stored as expiry instants rather than
/// fire-and-forget timers so tests can advance time explicitly. Triggering a
/// flag that is already up restarts its window.
#[derive(Debug, Default)]
pub struct Feedback {
    success_until: Option<DateTime<Utc>>,
    recently_liked: HashMap<String, DateTime<Utc>>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash_success(&mut self, now: DateTime<Utc>) {
        self.success_until = Some(now + Duration::milliseconds(SUCCESS_TOAST_MS));
    }

    pub fn success_visible(&self, now: DateTime<Utc>) -> bool {
        self.success_until.map(|until| now < until).unwrap_or(false)
    }

    pub fn mark_recently_liked(&mut self, item_id: &str, now: DateTime<Utc>) {
        self.recently_liked.insert(
            item_id.to_string(),
            now + Duration::milliseconds(RECENTLY_LIKED_MS),
        );
    }

    pub fn recently_liked(&self, item_id: &str, now: DateTime<Utc>) -> bool {
        self.recently_liked
            .get(item_id)
            .map(|until| now < *until)
            .unwrap_or(false)
    }

    /// Drops flags whose window has passed; call opportunistically so the
    /// recently-liked map does not grow for the whole session.
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        if self.success_until.is_some_and(|until| now >= until) {
            self.success_until = None;
        }
        self.recently_liked.retain(|_, until| now < *until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_its_window() {
        let mut feedback = Feedback::new();
        let start = Utc::now();
        feedback.flash_success(start);

        assert!(feedback.success_visible(start));
        assert!(feedback.success_visible(start + Duration::milliseconds(SUCCESS_TOAST_MS - 1)));
        assert!(!feedback.success_visible(start + Duration::milliseconds(SUCCESS_TOAST_MS)));
    }

    #[test]
    fn retrigger_restarts_the_liked_window() {
        let mut feedback = Feedback::new();
        let start = Utc::now();
        feedback.mark_recently_liked("a", start);

        let later = start + Duration::milliseconds(1500);
        feedback.mark_recently_liked("a", later);

        // Past the first window, still inside the restarted one.
        assert!(feedback.recently_liked("a", start + Duration::milliseconds(2500)));
        assert!(!feedback.recently_liked("a", later + Duration::milliseconds(2000)));
    }

    #[test]
    fn sweep_drops_expired_flags_only() {
        let mut feedback = Feedback::new();
        let start = Utc::now();
        feedback.mark_recently_liked("old", start);
        feedback.mark_recently_liked("fresh", start + Duration::milliseconds(1900));
        feedback.flash_success(start);

        feedback.sweep(start + Duration::milliseconds(3000));

        assert!(!feedback.recently_liked("old", start + Duration::milliseconds(3000)));
        assert!(feedback.recently_liked("fresh", start + Duration::milliseconds(3000)));
        assert!(!feedback.success_visible(start + Duration::milliseconds(3000)));
    }
}
