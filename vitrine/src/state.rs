use crate::service::Service;
use axum::extract::FromRef;
use fenster::{SlidingWindow, WindowConfig};
use std::{sync::Arc, time::Duration};
use vitrine_config::{Configuration, rate_limit};

/// One limiter instance per guarded endpoint
///
/// Endpoints sharing a parameter set still get separate keyspaces, so a
/// burst against one route never drains the quota of another.
#[derive(Clone)]
pub struct RateLimiters {
    pub analytics: Arc<SlidingWindow>,
    pub contact: Arc<SlidingWindow>,
    pub chat: Arc<SlidingWindow>,
    pub analyze_job: Arc<SlidingWindow>,
}

impl RateLimiters {
    #[must_use]
    pub fn new(config: &rate_limit::Configuration) -> Self {
        Self {
            analytics: Arc::new(SlidingWindow::new(window_config(config.analytics))),
            contact: Arc::new(SlidingWindow::new(window_config(config.analytics))),
            chat: Arc::new(SlidingWindow::new(window_config(config.llm))),
            analyze_job: Arc::new(SlidingWindow::new(window_config(config.llm))),
        }
    }
}

fn window_config(config: rate_limit::WindowConfiguration) -> WindowConfig {
    WindowConfig {
        max_requests: config.max_requests,
        window: Duration::from_secs(config.window_secs),
    }
}

/// Application state
///
/// Named "Zustand" to avoid a name collision with `axum::extract::State`
#[derive(Clone, FromRef)]
pub struct Zustand {
    pub config: Configuration,
    pub limiters: RateLimiters,
    pub service: Service,
}
