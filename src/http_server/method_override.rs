//! Method Override
//!
//! HTML forms can only send GET and POST. A POST may ask to be treated as
//! PUT, PATCH or DELETE through, in priority order:
//!
//! 1. the `X-HTTP-Method-Override` header
//! 2. a `_method` query parameter (`/fruits/<id>?_method=PUT`)
//! 3. a `_method` field in a urlencoded form body
//!
//! The rewrite has to happen before routing, so [`method_override`] wraps
//! the whole router rather than individual routes. Any other method, or an
//! override to a verb not listed above, passes through untouched.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{FromRequest, Query, Request},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use super::errors::AppError;

/// Header carrying the intended method
pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// Query parameter and form field carrying the intended method
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Largest form body buffered while looking for a `_method` field
pub const MAX_FORM_BYTES: usize = 64 * 1024;

#[derive(Debug, Default, Deserialize)]
struct OverrideField {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Rewrite an overridden POST to its intended method, then continue
pub async fn method_override(request: Request, next: Next) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();

    let mut requested =
        header_override(&parts.headers).or_else(|| query_override(&parts.uri));

    let body = if requested.is_none() && is_form(&parts.headers) {
        let bytes = match to_bytes(body, MAX_FORM_BYTES).await {
            Ok(bytes) => bytes,
            Err(e) => {
                return AppError::Rejected {
                    status: StatusCode::PAYLOAD_TOO_LARGE,
                    reason: e.to_string(),
                }
                .into_response();
            }
        };
        requested = form_override(bytes.clone()).await;
        Body::from(bytes)
    } else {
        body
    };

    if let Some(method) = requested.as_deref().and_then(parse_override) {
        tracing::debug!(path = %parts.uri.path(), to = %method, "method override");
        parts.method = method;
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Map an override value to a method, ignoring case
///
/// Only PUT, PATCH and DELETE may be requested.
pub fn parse_override(raw: &str) -> Option<Method> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

fn header_override(headers: &HeaderMap) -> Option<String> {
    headers
        .get(METHOD_OVERRIDE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn query_override(uri: &axum::http::Uri) -> Option<String> {
    Query::<OverrideField>::try_from_uri(uri)
        .ok()
        .and_then(|Query(field)| field.method)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

async fn form_override(bytes: Bytes) -> Option<String> {
    let probe = Request::builder()
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(bytes))
        .ok()?;

    Form::<OverrideField>::from_request(probe, &())
        .await
        .ok()
        .and_then(|Form(field)| field.method)
}
