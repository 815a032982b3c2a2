use const_format::concatcp;

pub const PROJECT_IDENTIFIER: &str = "vitrine";
pub const USER_AGENT: &str = concatcp!(PROJECT_IDENTIFIER, "/", VERSION);
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
