#![cfg(not(feature = "dangerous-disable-verification"))]

use cookie::{Cookie, SameSite};
use doppel::{AUTHORITATIVE_COOKIE, CLIENT_COOKIE, CsrfLayer, TokenRef};
use futures::{executor, future};
use http::{Request, Response, header};
use std::convert::Infallible;
use tower::{Layer, Service, ServiceExt, service_fn};

fn common() -> impl Service<Request<()>, Response = Response<()>, Error = Infallible> {
    let service = service_fn(|_req: Request<()>| future::ok::<_, Infallible>(Response::new(())));

    CsrfLayer::new(false).layer(service)
}

fn call<S>(service: &mut S, req: Request<()>) -> Response<()>
where
    S: Service<Request<()>, Response = Response<()>, Error = Infallible>,
{
    executor::block_on(async { service.ready().await.unwrap().call(req).await.unwrap() })
}

fn issued_pair(response: &Response<()>) -> (Cookie<'static>, Cookie<'static>) {
    let mut authoritative = None;
    let mut client = None;

    for value in response.headers().get_all(header::SET_COOKIE) {
        let cookie = Cookie::parse_encoded(value.to_str().unwrap().to_owned()).unwrap();
        match cookie.name() {
            AUTHORITATIVE_COOKIE => authoritative = Some(cookie),
            CLIENT_COOKIE => client = Some(cookie),
            name => panic!("unexpected cookie: {name}"),
        }
    }

    (
        authoritative.expect("authoritative cookie missing"),
        client.expect("client cookie missing"),
    )
}

fn echo_cookies(response: &Response<()>) -> Request<()> {
    let mut builder = Request::builder();
    for value in response.headers().get_all(header::SET_COOKIE) {
        builder = builder.header(header::COOKIE, value.clone());
    }

    builder.body(()).unwrap()
}

#[test]
fn issues_matching_pair_with_attributes() {
    let mut service = common();
    let response = call(&mut service, Request::default());

    let (authoritative, client) = issued_pair(&response);

    assert_eq!(authoritative.value_trimmed(), client.value_trimmed());
    assert_eq!(authoritative.value_trimmed().len(), 64);
    assert!(
        authoritative
            .value_trimmed()
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    );

    for cookie in [&authoritative, &client] {
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(cookie::time::Duration::days(1)));
        assert_ne!(cookie.secure(), Some(true));
    }

    assert_eq!(authoritative.http_only(), Some(true));
    assert_ne!(client.http_only(), Some(true));
}

#[test]
fn issuance_is_idempotent() {
    let mut service = common();

    let response = call(&mut service, Request::default());
    let second_response = call(&mut service, echo_cookies(&response));

    assert_eq!(
        second_response.headers().get_all(header::SET_COOKIE).iter().count(),
        0,
        "a complete pair must pass through untouched",
    );
}

#[test]
fn half_pair_triggers_full_reissue() {
    let mut service = common();

    let response = call(&mut service, Request::default());
    let (old_authoritative, old_client) = issued_pair(&response);

    for half in [
        format!("{AUTHORITATIVE_COOKIE}={}", old_authoritative.value_trimmed()),
        format!("{CLIENT_COOKIE}={}", old_client.value_trimmed()),
    ] {
        let req = Request::builder()
            .header(header::COOKIE, half)
            .body(())
            .unwrap();
        let response = call(&mut service, req);

        let (authoritative, client) = issued_pair(&response);
        assert_eq!(authoritative.value_trimmed(), client.value_trimmed());
        assert_ne!(
            authoritative.value_trimmed(),
            old_authoritative.value_trimmed(),
            "a half-present pair must never be reused",
        );
    }
}

#[test]
fn verify_equality() {
    let token = doppel::generate();
    let tampered = format!("{token}x");

    assert!(doppel::verify(Some(&token), Some(&token)));
    assert!(!doppel::verify(
        Some(TokenRef::from_str(&tampered)),
        Some(&token)
    ));
    assert!(!doppel::verify(None, Some(&token)));
    assert!(!doppel::verify(Some(&token), None));
    assert!(!doppel::verify(None, None));
}
