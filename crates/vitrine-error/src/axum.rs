use crate::{Error, ErrorType};
use axum_core::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::{StatusCode, header};

#[inline]
fn to_response(status_code: StatusCode, maybe_message: Option<String>) -> Response {
    let Some(message) = maybe_message else {
        return status_code.into_response();
    };

    let body = serde_json::json!({ "error": message }).to_string();

    http::Response::builder()
        .status(status_code)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        debug!(error = ?self.inner);

        match self.ty {
            ErrorType::BadRequest(maybe_message) => {
                to_response(StatusCode::BAD_REQUEST, maybe_message)
            }
            ErrorType::Forbidden(maybe_message) => {
                to_response(StatusCode::FORBIDDEN, maybe_message)
            }
            ErrorType::NotFound => StatusCode::NOT_FOUND.into_response(),
            ErrorType::TooManyRequests(maybe_message) => {
                to_response(StatusCode::TOO_MANY_REQUESTS, maybe_message)
            }
            ErrorType::BadGateway(maybe_message) => {
                to_response(StatusCode::BAD_GATEWAY, maybe_message)
            }
            ErrorType::Other(maybe_message) => {
                to_response(StatusCode::INTERNAL_SERVER_ERROR, maybe_message)
            }
        }
    }
}
