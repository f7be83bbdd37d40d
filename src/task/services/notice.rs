//! User-visible failure notices.

use chrono::{DateTime, TimeDelta, Utc};

/// Short-lived message describing the last failed store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    raised_at: DateTime<Utc>,
}

impl Notice {
    /// Creates a notice raised at `raised_at`.
    #[must_use]
    pub fn new(message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            raised_at,
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when the notice was raised.
    #[must_use]
    pub const fn raised_at(&self) -> DateTime<Utc> {
        self.raised_at
    }

    /// Returns `true` while the notice is younger than `ttl` at `now`.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.raised_at) < ttl
    }
}
