use std::time::{Duration, Instant};

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    shown_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self::new_at(text, Instant::now())
    }

    pub fn new_at(text: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            text: text.into(),
            shown_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTICE_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires() {
        let start = Instant::now();
        let notice = Notice::new_at("hi", start);
        assert!(!notice.is_expired(start + Duration::from_secs(1)));
        assert!(notice.is_expired(start + NOTICE_DURATION));
    }
}
