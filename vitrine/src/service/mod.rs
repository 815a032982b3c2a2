pub use self::{
    analytics::AnalyticsSink,
    llm::LlmService,
};

pub mod analytics;
pub mod llm;
pub mod resume;

/// Service collection
#[derive(Clone)]
pub struct Service {
    pub analytics: AnalyticsSink,
    pub llm: LlmService,
}
