use crate::CsrfService;
use tower::Layer;

/// Layer applying [`CsrfService`] to the wrapped service
#[derive(Clone, Copy)]
pub struct CsrfLayer {
    secure: bool,
}

impl CsrfLayer {
    /// `secure` controls the `Secure` cookie attribute and the `__Host-`
    /// name prefix. Pass `false` only for plain-HTTP development servers.
    #[must_use]
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }
}

impl<S> Layer<S> for CsrfLayer {
    type Service = CsrfService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CsrfService::new(inner, self.secure)
    }
}
