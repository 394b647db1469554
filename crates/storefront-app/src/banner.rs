//! Transient error banner.

use std::time::Duration;

use tokio::time::Instant;

/// Default time a message stays on screen.
pub const DEFAULT_BANNER_TTL: Duration = Duration::from_millis(3500);

/// A single error message that expires on its own.
///
/// Expiry is evaluated lazily against the tokio clock, so a message is
/// visible for exactly `ttl` after `show` and paused-clock tests can step
/// across the boundary. A newer message replaces the old one and restarts
/// the countdown.
#[derive(Debug, Clone)]
pub struct ErrorBanner {
    ttl: Duration,
    current: Option<(String, Instant)>,
}

impl ErrorBanner {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Show `message` for one TTL.
    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, ttl_ms = self.ttl.as_millis() as u64, "showing error banner");
        self.current = Some((message, Instant::now() + self.ttl));
    }

    /// The message, while it has not expired.
    pub fn message(&self) -> Option<&str> {
        match &self.current {
            Some((message, expires_at)) if Instant::now() < *expires_at => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.message().is_some()
    }

    /// When the current message disappears, if one is active.
    pub fn expires_at(&self) -> Option<Instant> {
        self.current
            .as_ref()
            .map(|(_, expires_at)| *expires_at)
            .filter(|expires_at| Instant::now() < *expires_at)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for ErrorBanner {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_message_expires_after_ttl() {
        let mut banner = ErrorBanner::default();
        assert_eq!(banner.message(), None);

        banner.show("Товары не найдены");
        assert_eq!(banner.message(), Some("Товары не найдены"));

        tokio::time::advance(Duration::from_millis(3499)).await;
        assert!(banner.is_active());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!banner.is_active());
        assert_eq!(banner.expires_at(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_restarts_countdown() {
        let mut banner = ErrorBanner::new(Duration::from_secs(1));
        banner.show("first");
        tokio::time::advance(Duration::from_millis(800)).await;
        banner.show("second");
        tokio::time::advance(Duration::from_millis(800)).await;

        assert_eq!(banner.message(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear() {
        let mut banner = ErrorBanner::default();
        banner.show("oops");
        banner.clear();
        assert_eq!(banner.message(), None);
    }
}
