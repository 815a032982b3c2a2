use crate::{ResponseFuture, cookie, token};
use http::{Request, Response};
use std::task::{self, Poll};
use tower::Service;

/// Issues the cookie pair on responses to requests that arrived without one
///
/// Issuance never blocks the request; the middleware only ever attaches
/// cookies on the response path.
#[derive(Clone)]
pub struct CsrfService<S> {
    inner: S,
    secure: bool,
}

impl<S> CsrfService<S> {
    pub fn new(inner: S, secure: bool) -> Self {
        Self { inner, secure }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CsrfService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let pair = cookie::read_pair(req.headers(), self.secure);

        // Both slots are rewritten with one fresh value unless both are
        // already populated
        let reissue = (!pair.is_complete()).then(token::generate);

        ResponseFuture {
            inner: self.inner.call(req),
            reissue,
            secure: self.secure,
        }
    }
}
