#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Admission limits for one endpoint category
#[derive(Clone, Copy, Debug)]
pub struct WindowConfig {
    pub max_requests: usize,
    pub window: Duration,
}

/// Sliding-window request counter keyed by caller identifier
///
/// Entries for one identifier are only ever touched under that identifier's
/// map guard, so concurrent checks cannot lose arrivals; different
/// identifiers proceed independently.
pub struct SlidingWindow {
    config: WindowConfig,
    arrivals: DashMap<String, Vec<Instant>>,
}

impl SlidingWindow {
    #[must_use]
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            arrivals: DashMap::new(),
        }
    }

    /// Admit or reject a request arriving at `now`
    ///
    /// Arrivals older than the window are pruned first, and a rejected
    /// request is not recorded.
    pub fn allow(&self, identifier: &str, now: Instant) -> bool {
        let mut entry = self.arrivals.entry(identifier.to_owned()).or_default();

        entry.retain(|&arrival| now.saturating_duration_since(arrival) < self.config.window);

        if entry.len() >= self.config.max_requests {
            debug!(identifier, in_window = entry.len(), "rate limit exceeded");
            return false;
        }

        entry.push(now);
        true
    }

    #[must_use]
    pub fn config(&self) -> WindowConfig {
        self.config
    }
}

#[cfg(test)]
mod test {
    use crate::{SlidingWindow, WindowConfig};
    use std::time::{Duration, Instant};

    const WINDOW: Duration = Duration::from_millis(60_000);

    fn limiter(max_requests: usize) -> SlidingWindow {
        SlidingWindow::new(WindowConfig {
            max_requests,
            window: WINDOW,
        })
    }

    #[test]
    fn admits_up_to_capacity_within_window() {
        let limiter = limiter(60);
        let base = Instant::now();

        for offset_ms in 0..60 {
            assert!(limiter.allow("a", base + Duration::from_millis(offset_ms)));
        }

        // 61st inside the same span
        assert!(!limiter.allow("a", base + Duration::from_millis(59_999)));

        // one past the window since the 1st arrival
        assert!(limiter.allow("a", base + Duration::from_millis(60_001)));
    }

    #[test]
    fn prunes_expired_arrivals() {
        let limiter = limiter(60);
        let base = Instant::now();

        for _ in 0..60 {
            assert!(limiter.allow("a", base));
        }
        assert!(!limiter.allow("a", base));

        // Everything from `base` has aged out; the follow-up boundary check
        // proves the old arrivals are gone rather than merely outvoted
        let later = base + WINDOW + Duration::from_millis(1);
        for _ in 0..60 {
            assert!(limiter.allow("a", later));
        }
        assert!(!limiter.allow("a", later));
    }

    #[test]
    fn rejections_are_not_recorded() {
        let limiter = limiter(1);
        let base = Instant::now();

        assert!(limiter.allow("a", base));
        for offset_ms in 1..100 {
            assert!(!limiter.allow("a", base + Duration::from_millis(offset_ms)));
        }

        // Rejected hammering must not have extended the window
        assert!(limiter.allow("a", base + WINDOW + Duration::from_millis(1)));
    }

    #[test]
    fn identifiers_are_independent() {
        let limiter = limiter(2);
        let base = Instant::now();

        assert!(limiter.allow("a", base));
        assert!(limiter.allow("a", base));
        assert!(!limiter.allow("a", base));

        assert!(limiter.allow("b", base));
        assert!(limiter.allow("b", base));
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let limiter = limiter(0);

        assert!(!limiter.allow("a", Instant::now()));
    }
}
