#[macro_use]
extern crate tracing;

pub mod consts;
pub mod http;
pub mod observability;
pub mod service;
pub mod signal;
pub mod state;

use self::{
    service::{AnalyticsSink, LlmService, Service},
    state::{RateLimiters, Zustand},
};
use eyre::Context;
use vitrine_config::Configuration;

pub fn initialise_state(config: &Configuration, anthropic_api_key: String) -> eyre::Result<Zustand> {
    let llm = LlmService::new(config.llm.clone(), anthropic_api_key)
        .wrap_err("Failed to construct the LLM client")?;

    Ok(Zustand {
        config: config.clone(),
        limiters: RateLimiters::new(&config.rate_limit),
        service: Service {
            analytics: AnalyticsSink::default(),
            llm,
        },
    })
}
