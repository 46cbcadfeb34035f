//! Domain errors as HTTP responses.
//!
//! Every failure leaves the API in the same JSON envelope: the serialised
//! domain [`Error`]. Status codes follow [`ErrorCode`]. Server-side failures
//! are logged in full and answered with [`REDACTED_MESSAGE`]. Bodies and
//! query strings that Actix cannot decode are folded into the envelope by
//! the handlers installed through [`json_config`] and [`query_config`].

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Handler result; the error side renders through [`ResponseError`].
pub type ApiResult<T> = Result<T, Error>;

/// Message sent to clients in place of internal error text.
pub const REDACTED_MESSAGE: &str = "Internal server error";

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = if status.is_server_error() {
            error!(message = self.message(), trace_id = self.trace_id(), "request failed");
            public_view(self)
        } else {
            debug!(
                status = status.as_u16(),
                message = self.message(),
                trace_id = self.trace_id(),
                "request rejected"
            );
            self.clone()
        };

        let mut response = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(body)
    }
}

/// Client-safe copy of an internal error: only the code and trace id survive.
fn public_view(error: &Error) -> Error {
    let redacted = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

fn malformed(what: &'static str, reason: impl std::fmt::Display) -> actix_web::Error {
    Error::invalid_request(format!("malformed {what}: {reason}"))
        .with_details(json!({ "code": format!("malformed_{what}") }))
        .into()
}

fn malformed_body(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    malformed("body", err)
}

fn malformed_query(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    malformed("query", err)
}

/// JSON extractor settings answering undecodable bodies with `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(malformed_body)
}

/// Query extractor settings answering undecodable queries with `invalid_request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(malformed_query)
}
