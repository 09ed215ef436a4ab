//! Request-scoped context module.
//!
//! Provides `RequestContext` extractor that bundles request-scoped state
//! to complement application-scoped `AppState`.

mod extractor;
mod middleware;
mod types;

pub use middleware::normalize_correlation_id;
pub use types::RequestContext;

/// Header carrying the correlation id, read from the request and echoed on the response.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";
