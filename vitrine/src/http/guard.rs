//! Admission checks shared by every mutating API route
//!
//! Order matters: the rate limiter runs first so abusive traffic is shed
//! before any cookie comparison work, and the payload is never touched
//! until both checks pass.

use crate::state::Zustand;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use doppel::TokenRef;
use fenster::SlidingWindow;
use http::HeaderMap;
use std::time::Instant;
use vitrine_error::{ErrorType, Result, bail};

pub const FORWARDED_FOR: &str = "x-forwarded-for";
pub const REAL_IP: &str = "x-real-ip";
pub const SESSION_ID: &str = "x-session-id";

const UNKNOWN_CLIENT: &str = "unknown";

pub async fn analytics(
    State(state): State<Zustand>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let identifier = client_addr(req.headers());
    run(&state.limiters.analytics, &identifier, &state, &jar, req, next).await
}

pub async fn analyze_job(
    State(state): State<Zustand>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let identifier = client_addr(req.headers());
    run(&state.limiters.analyze_job, &identifier, &state, &jar, req, next).await
}

pub async fn chat(
    State(state): State<Zustand>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let identifier = session_scoped_addr(req.headers());
    run(&state.limiters.chat, &identifier, &state, &jar, req, next).await
}

pub async fn contact(
    State(state): State<Zustand>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let identifier = client_addr(req.headers());
    run(&state.limiters.contact, &identifier, &state, &jar, req, next).await
}

async fn run(
    limiter: &SlidingWindow,
    identifier: &str,
    state: &Zustand,
    jar: &CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let verdict = check(
        limiter,
        identifier,
        req.headers(),
        jar,
        state.config.server.secure_cookies,
    );

    match verdict {
        Ok(()) => next.run(req).await,
        Err(error) => error.into_response(),
    }
}

fn check(
    limiter: &SlidingWindow,
    identifier: &str,
    headers: &HeaderMap,
    jar: &CookieJar,
    secure_cookies: bool,
) -> Result<()> {
    if !limiter.allow(identifier, Instant::now()) {
        bail!(
            type = ErrorType::TooManyRequests(Some("Rate limit exceeded".into())),
            format!("rate limit exceeded for {identifier}")
        );
    }

    let presented = headers
        .get(doppel::CSRF_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(TokenRef::from_str);

    let authoritative = jar
        .get(doppel::authoritative_cookie_name(secure_cookies))
        .map(|cookie| TokenRef::from_str(cookie.value()));

    if !doppel::verify(presented, authoritative) {
        bail!(
            type = ErrorType::Forbidden(Some("Invalid or missing CSRF token".into())),
            "request failed the double-submit check"
        );
    }

    Ok(())
}

/// Best-effort client address
///
/// First forwarded hop, then the reverse proxy's direct-connection header,
/// then a shared placeholder which collapses all unattributable traffic
/// into one quota instead of failing the request.
fn client_addr(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first_hop) = forwarded.split(',').next() {
            let first_hop = first_hop.trim();
            if !first_hop.is_empty() {
                return first_hop.to_owned();
            }
        }
    }

    if let Some(real_ip) = headers.get(REAL_IP).and_then(|value| value.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_owned();
        }
    }

    UNKNOWN_CLIENT.to_owned()
}

/// `address:sessionId` when the caller sent a session id, so conversations
/// behind one NAT address get independent quotas
fn session_scoped_addr(headers: &HeaderMap) -> String {
    let addr = client_addr(headers);

    match headers.get(SESSION_ID).and_then(|value| value.to_str().ok()) {
        Some(session_id) if !session_id.is_empty() => format!("{addr}:{session_id}"),
        _ => addr,
    }
}

#[cfg(test)]
mod test {
    use super::{client_addr, session_scoped_addr};
    use http::HeaderMap;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, value.parse().unwrap());
        }
        headers
    }

    #[test]
    fn prefers_first_forwarded_hop() {
        let headers = headers(&[
            ("x-forwarded-for", "198.51.100.7, 10.0.0.1"),
            ("x-real-ip", "192.0.2.1"),
        ]);

        assert_eq!(client_addr(&headers), "198.51.100.7");
    }

    #[test]
    fn falls_back_to_real_ip_then_placeholder() {
        assert_eq!(
            client_addr(&headers(&[("x-real-ip", "192.0.2.1")])),
            "192.0.2.1"
        );
        assert_eq!(client_addr(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn composes_session_scoped_identifier() {
        let headers = headers(&[
            ("x-forwarded-for", "198.51.100.7"),
            ("x-session-id", "session_1234"),
        ]);

        assert_eq!(session_scoped_addr(&headers), "198.51.100.7:session_1234");
        assert_eq!(session_scoped_addr(&HeaderMap::new()), "unknown");
    }
}
