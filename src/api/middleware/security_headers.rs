//! Security response headers applied to every route.

use axum::http::{HeaderName, HeaderValue, header};
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::set_header::SetResponseHeaderLayer;

type HeaderLayer = SetResponseHeaderLayer<HeaderValue>;

/// Layer stack setting the response hardening headers.
pub type SecurityHeadersLayer = Stack<HeaderLayer, Stack<HeaderLayer, Stack<HeaderLayer, Identity>>>;

/// Headers set on every response.
pub const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::REFERRER_POLICY, "origin-when-cross-origin"),
];

/// Creates the response header layers.
///
/// Values override anything a handler has set.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", get(page_handler))
///     .layer(security_headers::layer());
/// ```
pub fn layer() -> ServiceBuilder<SecurityHeadersLayer> {
    let [frame, content_type, referrer] = SECURITY_HEADERS.map(|(name, value)| {
        SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
    });

    ServiceBuilder::new()
        .layer(frame)
        .layer(content_type)
        .layer(referrer)
}
