use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor that rejects malformed payloads with the standard
/// response envelope instead of axum's plain-text rejection.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(reject)?;
        Ok(Self(value))
    }
}

/// A body of the wrong shape is a validation failure; anything earlier in
/// the pipeline (syntax, content type, body read) is a plain bad request.
fn reject(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => AppError::Validation(format!("Invalid JSON data: {}", e)),
        JsonRejection::JsonSyntaxError(e) => {
            AppError::BadRequest(format!("Invalid JSON syntax: {}", e))
        }
        JsonRejection::MissingJsonContentType(e) => {
            AppError::BadRequest(format!("Missing JSON content type: {}", e))
        }
        _ => AppError::BadRequest("Failed to parse JSON body".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::{routing::post, Router};
    use axum_test::TestServer;
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        value: i32,
    }

    async fn probe(AppJson(_body): AppJson<Probe>) -> &'static str {
        "ok"
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/probe", post(probe))).expect("test server")
    }

    #[tokio::test]
    async fn test_wrong_shape_is_rejected_with_envelope() {
        let server = server();

        let response = server
            .post("/probe")
            .json(&serde_json::json!({ "value": "not-a-number" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.contains("Invalid JSON data")));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let server = server();

        let response = server
            .post("/probe")
            .bytes("{not valid json".into())
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let server = server();

        let response = server.post("/probe").bytes("{\"value\": 1}".into()).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let server = server();

        let response = server
            .post("/probe")
            .json(&serde_json::json!({ "value": 7 }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "ok");
    }
}
