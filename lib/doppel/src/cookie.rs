use crate::{CLIENT_COOKIE, MAX_AGE_SECS, Token, TokenRef, authoritative_cookie_name};
use cookie::{Cookie, SameSite, time::Duration};
use http::{HeaderMap, header};

/// Token pair as read off a request's `Cookie` headers
pub(crate) struct ReadPair {
    pub(crate) authoritative: Option<Token>,
    pub(crate) client: Option<Token>,
}

impl ReadPair {
    /// A half-present pair must be treated like an absent one
    pub(crate) fn is_complete(&self) -> bool {
        self.authoritative.is_some() && self.client.is_some()
    }
}

pub(crate) fn read_pair(headers: &HeaderMap, secure: bool) -> ReadPair {
    let authoritative_name = authoritative_cookie_name(secure);
    let mut pair = ReadPair {
        authoritative: None,
        client: None,
    };

    for header in headers.get_all(header::COOKIE) {
        let Ok(value_str) = header.to_str() else {
            continue;
        };

        for cookie in Cookie::split_parse_encoded(value_str) {
            let Ok(cookie) = cookie else {
                continue;
            };

            if cookie.name() == authoritative_name {
                pair.authoritative = Some(cookie.value_trimmed().into());
            } else if cookie.name() == CLIENT_COOKIE {
                pair.client = Some(cookie.value_trimmed().into());
            }
        }
    }

    pair
}

/// Build the `Set-Cookie` pair carrying `token` in both slots
///
/// Attributes follow the double-submit contract: scoped to the whole site,
/// strict same-site, 24 hour lifetime, `Secure` (and the `__Host-` name
/// prefix) when serving HTTPS. Only the authoritative slot is `httpOnly`;
/// page scripts have to read the client slot to fill the request header.
pub(crate) fn pair_cookies(token: &TokenRef, secure: bool) -> [Cookie<'static>; 2] {
    let build = |name: &'static str| {
        Cookie::build((name, token.as_str().to_owned()))
            .max_age(Duration::seconds(MAX_AGE_SECS))
            .path("/")
            .same_site(SameSite::Strict)
            .secure(secure)
    };

    [
        build(authoritative_cookie_name(secure))
            .http_only(true)
            .build(),
        build(CLIENT_COOKIE).build(),
    ]
}
