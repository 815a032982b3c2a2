use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WindowConfiguration {
    pub max_requests: usize,
    pub window_secs: u64,
}

/// One window per endpoint category: a tight one for high-frequency
/// low-value traffic, a loose one for the expensive LLM-backed routes
#[derive(Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    pub analytics: WindowConfiguration,
    pub llm: WindowConfiguration,
}
