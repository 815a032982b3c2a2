#![doc = include_str!("../README.md")]

pub use self::{
    future::ResponseFuture, layer::CsrfLayer, newtypes::*, service::CsrfService, token::generate,
    verify::verify,
};

mod cookie;
mod future;
mod layer;
mod service;
mod token;
mod verify;

/// Name of the cookie the verifier trusts. Marked `httpOnly`.
pub const AUTHORITATIVE_COOKIE: &str = "csrf-token";

/// `__Host-` variant of [`AUTHORITATIVE_COOKIE`], usable only over HTTPS
pub const AUTHORITATIVE_COOKIE_HOST: &str = "__Host-csrf-token";

/// Name of the script-readable cookie mirroring the token
pub const CLIENT_COOKIE: &str = "csrf-token-client";

/// Request header clients echo the token through
pub const CSRF_HEADER: &str = "x-csrf-token";

const TOKEN_RAW_LEN: usize = 32;
const MAX_AGE_SECS: i64 = 24 * 60 * 60;

mod newtypes {
    /// Lowercase hex CSRF token, 64 characters
    #[aliri_braid::braid]
    pub struct Token;
}

/// Authoritative cookie name for the given transport security
#[must_use]
pub fn authoritative_cookie_name(secure: bool) -> &'static str {
    if secure {
        AUTHORITATIVE_COOKIE_HOST
    } else {
        AUTHORITATIVE_COOKIE
    }
}
