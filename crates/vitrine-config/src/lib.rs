pub mod llm;
pub mod rate_limit;
pub mod server;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    pub server: server::Configuration,
    pub rate_limit: rate_limit::Configuration,
    pub llm: llm::Configuration,
}

impl Configuration {
    pub async fn load<P>(path: P) -> eyre::Result<Self>
    where
        P: AsRef<Path>,
    {
        let content = fs::read_to_string(path).await?;
        toml::from_str(&content).map_err(eyre::Report::from)
    }
}

#[cfg(test)]
mod test {
    use crate::Configuration;

    #[test]
    fn parses_example_configuration() {
        let example = include_str!("../../../vitrine.example.toml");
        let config: Configuration = toml::from_str(example).unwrap();

        assert_eq!(config.rate_limit.analytics.max_requests, 60);
        assert_eq!(config.rate_limit.analytics.window_secs, 60);
        assert_eq!(config.rate_limit.llm.max_requests, 100);
        assert_eq!(config.rate_limit.llm.window_secs, 3600);
        assert!(config.server.secure_cookies);
    }
}
