use kernel::model::envelope::ApiResponse;
use reqwest::{multipart::Form, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, de::IgnoredAny, Serialize};
use shared::{
    config::GatewayConfig,
    error::{AppError, AppResult},
};

pub mod model;
#[cfg(test)]
pub(crate) mod testing;

use model::envelope::EnvelopeBody;

/// The one HTTP client every repository talks through.
///
/// Built once from [`GatewayConfig`]; clones share the connection pool and,
/// when credentials are enabled, the cookie jar that carries the admin
/// session. No request ever calls `error_for_status`: a non-2xx answer is
/// read like any other response.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
    legacy_base_url: String,
}

impl GatewayClient {
    pub fn new(cfg: &GatewayConfig) -> AppResult<Self> {
        let http = Client::builder()
            .cookie_store(cfg.with_credentials)
            .build()?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            legacy_base_url: cfg.legacy_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn inner_ref(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn legacy_url(&self, path: &str) -> String {
        format!("{}{}", self.legacy_base_url, path)
    }

    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(method = "GET", path, "gateway request");
        let sent = self.http.get(self.url(path)).query(query).send().await;
        read_envelope(path, sent).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(method = "POST", path, "gateway request");
        let sent = self.http.post(self.url(path)).json(body).send().await;
        read_envelope(path, sent).await
    }

    /// POST for endpoints whose `data` carries nothing the caller needs.
    pub async fn post_json_unit<B>(&self, path: &str, body: &B) -> ApiResponse<()>
    where
        B: Serialize + ?Sized,
    {
        self.post_json::<B, IgnoredAny>(path, body)
            .await
            .map(|_| ())
    }

    pub async fn post_form<T>(&self, path: &str, form: Form) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(method = "POST", path, multipart = true, "gateway request");
        let sent = self.http.post(self.url(path)).multipart(form).send().await;
        read_envelope(path, sent).await
    }

    /// Tolerant call to a service that does not use the envelope.
    pub async fn fetch_plain<T>(&self, url: &str) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(method = "GET", url, "external request");
        let response = match self.http.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url, error = %e, "external request failed");
                return ApiResponse::failure(e.to_string());
            }
        };
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, %status, "external service answered with error status");
            return ApiResponse::failure(status.to_string());
        }
        match response.json::<T>().await {
            Ok(data) => ApiResponse::ok(data),
            Err(e) => {
                tracing::warn!(url, error = %e, "external service returned malformed body");
                ApiResponse::failure(format!("malformed response from {url}: {e}"))
            }
        }
    }

    /// Local-catch call used by the PHP endpoints: whatever body comes back,
    /// error status or not, is decoded as the endpoint's payload.
    pub async fn send_legacy<T>(&self, path: &str, request: RequestBuilder) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(path, "legacy request");
        let response = request.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "legacy request got no response");
            AppError::from(e)
        })?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, %status, "legacy endpoint failed, passing its body through");
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

async fn read_envelope<T>(path: &str, sent: reqwest::Result<Response>) -> ApiResponse<T>
where
    T: DeserializeOwned,
{
    let response = match sent {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(path, error = %e, "request failed");
            return ApiResponse::failure(e.to_string());
        }
    };
    let status = response.status();
    let bytes = match response.bytes().await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(path, %status, error = %e, "response body could not be read");
            return ApiResponse::failure(e.to_string());
        }
    };

    match serde_json::from_slice::<EnvelopeBody<T>>(&bytes) {
        Ok(body) if status.is_success() => {
            if !body.success {
                tracing::warn!(path, %status, message = ?body.message, "backend reported failure");
            }
            body.into()
        }
        // an error status is a failure whatever the body claims
        Ok(body) => {
            tracing::warn!(path, %status, message = ?body.message, "error status with envelope");
            ApiResponse::failure(body.message.unwrap_or_else(|| status.to_string()))
        }
        Err(e) => {
            // failures often carry a `data` that does not fit T (`[]`, field errors)
            if let Ok(body) = serde_json::from_slice::<EnvelopeBody<IgnoredAny>>(&bytes) {
                if !body.success || !status.is_success() {
                    tracing::warn!(path, %status, message = ?body.message, "backend reported failure");
                    return ApiResponse::failure(
                        body.message.unwrap_or_else(|| status.to_string()),
                    );
                }
            }
            if status.is_success() {
                tracing::warn!(path, %status, error = %e, "malformed envelope");
                return ApiResponse::failure(format!("malformed response from {path}: {e}"));
            }
            let text = String::from_utf8_lossy(&bytes);
            let text = text.trim();
            tracing::warn!(path, %status, "error status without envelope");
            if text.is_empty() {
                ApiResponse::failure(status.to_string())
            } else {
                ApiResponse::failure(format!("{status}: {text}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use reqwest::multipart::Form;
    use serde::Deserialize;
    use serde_json::{json, Value};

    use super::testing::{client_for, unreachable_client};
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[allow(dead_code)]
        id: i64,
    }

    fn router() -> Router {
        Router::new()
            .route(
                "/ok",
                get(|| async { Json(json!({"success": true, "data": 7, "message": null})) }),
            )
            .route(
                "/refused",
                get(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"success": false, "message": "room closed"})),
                    )
                }),
            )
            .route(
                "/crash",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
            )
            .route("/empty-error", get(|| async { StatusCode::BAD_GATEWAY }))
            .route("/garbage", get(|| async { "<html>not json</html>" }))
            .route(
                "/unit",
                post(|| async { Json(json!({"success": true, "data": {"anything": [1, 2]}})) }),
            )
            .route("/no-data", get(|| async { Json(json!({"success": true})) }))
            .route(
                "/declined",
                get(|| async { Json(json!({"success": false, "message": "slot taken"})) }),
            )
            .route(
                "/error-claims-success",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"success": true, "data": 1})),
                    )
                }),
            )
            .route(
                "/error-claims-success-quietly",
                get(|| async {
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        Json(json!({"success": true, "data": "not a number"})),
                    )
                }),
            )
            .route(
                "/not-found-empty-array",
                get(|| async {
                    Json(json!({
                        "success": false, "data": [], "message": "reservation not found"
                    }))
                }),
            )
            .route(
                "/validation",
                get(|| async {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({
                            "success": false,
                            "data": {"field": "email"},
                            "message": "Validation failed"
                        })),
                    )
                }),
            )
            .route(
                "/form",
                post(|| async {
                    (
                        StatusCode::PAYLOAD_TOO_LARGE,
                        Json(json!({"success": false, "message": "file too large"})),
                    )
                }),
            )
            .route(
                "/json-crash",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
    }

    #[tokio::test]
    async fn envelope_is_returned_as_is() {
        let client = client_for(router()).await;
        let res: ApiResponse<i64> = client.get("/ok", &[]).await;
        assert!(res.success);
        assert_eq!(res.data, Some(7));
    }

    #[tokio::test]
    async fn envelope_without_data_key_reads_as_none() {
        let client = client_for(router()).await;
        let res: ApiResponse<Row> = client.get("/no-data", &[]).await;
        assert!(res.success);
        assert!(res.data.is_none());
        assert!(res.message.is_none());
    }

    #[tokio::test]
    async fn success_status_with_failed_envelope_keeps_message() {
        let client = client_for(router()).await;
        let res: ApiResponse<i64> = client.get("/declined", &[]).await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("slot taken"));
    }

    #[tokio::test]
    async fn error_status_with_envelope_keeps_backend_message() {
        let client = client_for(router()).await;
        let res: ApiResponse<i64> = client.get("/refused", &[]).await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("room closed"));
    }

    #[tokio::test]
    async fn error_status_is_a_failure_even_when_body_says_success() {
        let client = client_for(router()).await;
        let res: ApiResponse<i64> = client.get("/error-claims-success", &[]).await;
        assert!(!res.success);
        assert!(res.data.is_none());
        assert_eq!(res.message.as_deref(), Some("500 Internal Server Error"));

        let res: ApiResponse<i64> = client.get("/error-claims-success-quietly", &[]).await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("503 Service Unavailable"));
    }

    #[tokio::test]
    async fn failure_message_survives_mismatched_data() {
        let client = client_for(router()).await;
        let res: ApiResponse<Row> = client.get("/not-found-empty-array", &[]).await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("reservation not found"));

        let res: ApiResponse<Vec<Row>> = client.get("/validation", &[]).await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("Validation failed"));
    }

    #[tokio::test]
    async fn error_status_without_envelope_never_raises() {
        let client = client_for(router()).await;
        let res: ApiResponse<i64> = client.get("/crash", &[]).await;
        assert!(!res.success);
        assert_eq!(
            res.message.as_deref(),
            Some("500 Internal Server Error: upstream exploded")
        );

        let res: ApiResponse<i64> = client.get("/empty-error", &[]).await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("502 Bad Gateway"));

        let res: ApiResponse<i64> = client.get("/does-not-exist", &[]).await;
        assert!(!res.success);
    }

    #[tokio::test]
    async fn success_status_with_garbage_is_a_failure() {
        let client = client_for(router()).await;
        let res: ApiResponse<i64> = client.get("/garbage", &[]).await;
        assert!(!res.success);
        assert!(res.message.unwrap().starts_with("malformed response from /garbage"));
    }

    #[tokio::test]
    async fn unit_calls_ignore_payload_shape() {
        let client = client_for(router()).await;
        let res = client.post_json_unit("/unit", &json!({"id": 1})).await;
        assert!(res.success);
    }

    #[tokio::test]
    async fn posts_never_raise_on_error_status() {
        let client = client_for(router()).await;

        let res: ApiResponse<i64> = client
            .post_form("/form", Form::new().text("location", "gym"))
            .await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("file too large"));

        let res: ApiResponse<i64> = client.post_json("/json-crash", &json!({})).await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("500 Internal Server Error: boom"));
    }

    #[tokio::test]
    async fn lost_connection_is_a_failure_not_a_panic() {
        let client = unreachable_client();

        let res: ApiResponse<Value> = client.get("/ok", &[]).await;
        assert!(!res.success);
        assert!(res.message.is_some());

        let res: ApiResponse<Value> = client.post_json("/unit", &json!({})).await;
        assert!(!res.success);
        assert!(res.message.is_some());

        let res: ApiResponse<Value> = client
            .post_form("/form", Form::new().text("k", "v"))
            .await;
        assert!(!res.success);
        assert!(res.message.is_some());
    }
}
