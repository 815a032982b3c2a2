use crate::{Token, cookie};
use http::{HeaderValue, Response, header};
use pin_project_lite::pin_project;
use std::{
    future::Future,
    pin::Pin,
    task::{self, Poll, ready},
};

pin_project! {
    pub struct ResponseFuture<F> {
        #[pin]
        pub(crate) inner: F,
        pub(crate) reissue: Option<Token>,
        pub(crate) secure: bool,
    }
}

impl<F, E, ResBody> Future for ResponseFuture<F>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
{
    type Output = Result<Response<ResBody>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let mut response = ready!(this.inner.poll(cx))?;

        if let Some(ref token) = this.reissue {
            for cookie in cookie::pair_cookies(token, *this.secure) {
                let encoded_cookie = cookie.encoded().to_string();
                let header_value = HeaderValue::from_str(&encoded_cookie).unwrap();

                response
                    .headers_mut()
                    .append(header::SET_COOKIE, header_value);
            }
        }

        Poll::Ready(Ok(response))
    }
}
