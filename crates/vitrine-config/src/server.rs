use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    pub frontend_dir: SmolStr,
    pub port: u16,
    pub request_timeout_secs: u64,
    /// Off only for plain-HTTP development servers; controls the `Secure`
    /// cookie attribute and the `__Host-` cookie name prefix
    pub secure_cookies: bool,
}
