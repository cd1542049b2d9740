//! Duplicate-submission guard.
//!
//! Long-running form submissions (imports, exports, transfers) disable their
//! button for a fixed delay once pressed. There is no cancellation: the button
//! comes back on its own when the delay runs out.

use std::time::{Duration, Instant};

pub const PENDING_LABEL: &str = "En cours de traitement…";
pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SubmitGuard {
    label: String,
    delay: Duration,
    disabled_until: Option<Instant>,
}

impl SubmitGuard {
    pub fn new(label: impl Into<String>, delay: Duration) -> Self {
        Self {
            label: label.into(),
            delay,
            disabled_until: None,
        }
    }

    /// Press the button at `now`. Returns `false` if it is still disabled.
    pub fn press(&mut self, now: Instant) -> bool {
        if self.is_disabled(now) {
            return false;
        }
        self.disabled_until = Some(now + self.delay);
        true
    }

    pub fn is_disabled(&self, now: Instant) -> bool {
        self.disabled_until.is_some_and(|until| now < until)
    }

    /// What the button shows at `now`.
    pub fn label(&self, now: Instant) -> &str {
        if self.is_disabled(now) {
            PENDING_LABEL
        } else {
            &self.label
        }
    }
}
