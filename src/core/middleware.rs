use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// MakeSpan that tags every request span with its X-Request-Id, so log
/// lines for one complaint submission can be correlated end to end.
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// CORS layer from the configured origin list. A literal `*` anywhere in
/// the list makes the layer fully permissive.
pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

/// Basic-auth guard for the Swagger UI. The expected value is the
/// configured `username:password` pair; anything else gets a 401 with a
/// `WWW-Authenticate` challenge.
pub async fn swagger_basic_auth(
    State(expected): State<Arc<String>>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Basic "))
        .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
        .and_then(|decoded| String::from_utf8(decoded).ok());

    if presented.as_deref() == Some(expected.as_str()) {
        return Ok(next.run(req).await);
    }

    Err((
        StatusCode::UNAUTHORIZED,
        [(
            header::WWW_AUTHENTICATE,
            "Basic realm=\"RailSathi API docs\"",
        )],
        "Unauthorized",
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    use super::*;

    fn guarded_server() -> TestServer {
        let router = Router::new()
            .route("/docs", get(|| async { "docs" }))
            .layer(axum::middleware::from_fn_with_state(
                Arc::new("docs:secret".to_string()),
                swagger_basic_auth,
            ));
        TestServer::new(router).expect("test server")
    }

    fn basic_header(credentials: &str) -> HeaderValue {
        let token = BASE64_STANDARD.encode(credentials);
        HeaderValue::from_str(&format!("Basic {}", token)).expect("header value")
    }

    #[tokio::test]
    async fn test_missing_credentials_are_unauthorized() {
        let server = guarded_server();

        let response = server.get("/docs").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert!(response
            .headers()
            .contains_key(header::WWW_AUTHENTICATE.as_str()));
    }

    #[tokio::test]
    async fn test_wrong_credentials_are_unauthorized() {
        let server = guarded_server();

        let response = server
            .get("/docs")
            .add_header(header::AUTHORIZATION, basic_header("docs:wrong"))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_credentials_pass_through() {
        let server = guarded_server();

        let response = server
            .get("/docs")
            .add_header(header::AUTHORIZATION, basic_header("docs:secret"))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "docs");
    }
}
