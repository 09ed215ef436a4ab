//! Correlation id header normalization.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

use super::{extractor::usable_correlation_id, CORRELATION_ID_HEADER};

/// Trims a usable `X-Correlation-ID` and drops a blank or undecodable one.
///
/// Runs ahead of `SetRequestIdLayer`, which then only generates an id when
/// the header is absent. The header, the `RequestId` extension and the
/// response echo therefore all hold the same value.
pub async fn normalize_correlation_id(mut request: Request, next: Next) -> Response {
    let usable = usable_correlation_id(request.headers())
        .and_then(|id| HeaderValue::from_str(id).ok());

    match usable {
        Some(value) => {
            request.headers_mut().insert(CORRELATION_ID_HEADER, value);
        }
        None => {
            request.headers_mut().remove(CORRELATION_ID_HEADER);
        }
    }

    next.run(request).await
}
