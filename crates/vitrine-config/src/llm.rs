use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MAX_TOKENS: u32 = 2048;

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    #[serde(default = "default_base_url")]
    pub base_url: SmolStr,
    pub model: SmolStr,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_base_url() -> SmolStr {
    SmolStr::new_static(DEFAULT_BASE_URL)
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}
