//! HTTP client for integration testing.
//!
//! Drives the axum router directly via tower's oneshot - no sockets, no
//! serve loop. Always sends an X-Forwarded-For header so the rate limiter
//! and the admin gate have a client key to work with.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

/// Default client IP for tests that don't care about per-IP behavior.
pub const DEFAULT_TEST_IP: &str = "203.0.113.7";

pub struct TestClient {
    app: Router,
    client_ip: String,
}

/// Response decoded into a status code and (best-effort) JSON body.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// Gets a value at the given JSON path.
    pub fn get(&self, path: &str) -> Value {
        let mut current = &self.body;
        for key in path.split('.') {
            current = match key.parse::<usize>() {
                Ok(index) => &current[index],
                Err(_) => &current[key],
            };
        }
        current.clone()
    }
}

impl TestClient {
    pub fn new(app: Router) -> Self {
        Self {
            app,
            client_ip: DEFAULT_TEST_IP.to_string(),
        }
    }

    /// Use a specific client IP (admin-gate tests key lockout on this).
    pub fn with_ip(mut self, ip: &str) -> Self {
        self.client_ip = ip.to_string();
        self
    }

    async fn execute(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    fn builder(&self, method: Method, uri: &str) -> axum::http::request::Builder {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", &self.client_ip)
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = self
            .builder(Method::GET, uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.execute(request).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = self
            .builder(Method::DELETE, uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.execute(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        let request = self
            .builder(Method::POST, uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.execute(request).await
    }

    /// POST with an empty body (trigger-style endpoints).
    pub async fn post_empty(&self, uri: &str) -> TestResponse {
        let request = self
            .builder(Method::POST, uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.execute(request).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        let request = self
            .builder(Method::PUT, uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.execute(request).await
    }

    /// POST a raw body with an explicit content type.
    pub async fn post_raw(&self, uri: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        let request = self
            .builder(Method::POST, uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .expect("Failed to build request");
        self.execute(request).await
    }

    /// POST a single-file multipart form (field name "file").
    pub async fn post_file(
        &self,
        uri: &str,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> TestResponse {
        const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        let request = self
            .builder(Method::POST, uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .expect("Failed to build request");
        self.execute(request).await
    }
}
