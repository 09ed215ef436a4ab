//! Axum extractor for RequestContext.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use tower_http::request_id::RequestId;

use super::{
    types::{CorrelationId, RequestContext},
    CORRELATION_ID_HEADER,
};

/// The trimmed correlation id header, if it is present, non-blank and
/// visible ASCII.
pub(crate) fn usable_correlation_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Reads the correlation id header, generating a fresh id when it is not usable.
pub(crate) fn extract_correlation_id(headers: &HeaderMap) -> CorrelationId {
    usable_correlation_id(headers)
        .map(CorrelationId::from_header)
        .unwrap_or_default()
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Prefer the id the request-id layer settled on, so handler logs match
        // the trace span and the echoed header.
        let correlation_id = parts
            .extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .map(CorrelationId::from_header)
            .unwrap_or_else(|| extract_correlation_id(&parts.headers));

        Ok(RequestContext { correlation_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_extract_correlation_id_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, "order-sync-42".parse().unwrap());

        let correlation_id = extract_correlation_id(&headers);
        assert_eq!(correlation_id.as_str(), "order-sync-42");
    }

    #[test]
    fn test_extract_correlation_id_generates_when_missing() {
        let headers = HeaderMap::new();
        let correlation_id = extract_correlation_id(&headers);

        Uuid::parse_str(correlation_id.as_str()).expect("Should be valid UUID");
    }

    #[test]
    fn test_usable_correlation_id_trims() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, "  order-sync-42 ".parse().unwrap());

        assert_eq!(usable_correlation_id(&headers), Some("order-sync-42"));
    }

    #[test]
    fn test_usable_correlation_id_rejects_non_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CORRELATION_ID_HEADER,
            axum::http::HeaderValue::from_bytes(b"caf\xe9").unwrap(),
        );

        assert_eq!(usable_correlation_id(&headers), None);
    }

    #[tokio::test]
    async fn test_request_context_prefers_request_id_extension() {
        let request = axum::http::Request::builder()
            .header(CORRELATION_ID_HEADER, "   ")
            .extension(RequestId::new("from-layer".parse().unwrap()))
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(ctx.correlation_id.as_str(), "from-layer");
    }

    #[test]
    fn test_extract_correlation_id_generates_when_blank() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, "   ".parse().unwrap());

        let correlation_id = extract_correlation_id(&headers);

        Uuid::parse_str(correlation_id.as_str()).expect("Should be valid UUID");
    }
}
