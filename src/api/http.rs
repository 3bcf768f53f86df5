//! Same-origin JSON transport and the response normalisation shared by every
//! API operation.

use crate::api::error::ApiError;
use dioxus::logger::tracing::{debug, warn};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;

#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    // The account session lives in a cookie.
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(method: Method, path: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received (offline, DNS, CORS, aborted fetch...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

/// Sends one request and hands back the raw status and body text.
pub trait Transport {
    fn send(&self, request: HttpRequest)
        -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>>;
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserTransport {
    base: String,
}

#[cfg(target_arch = "wasm32")]
impl BrowserTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl Transport for BrowserTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        let url = format!("{}{}", self.base, request.path);
        Box::pin(async move {
            let builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Put => gloo_net::http::Request::put(&url),
                Method::Delete => gloo_net::http::Request::delete(&url),
            }
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .header("Accept", "application/json");

            let sent = match request.body {
                Some(body) => builder
                    .json(&body)
                    .map_err(|e| TransportError(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let response = sent.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct NativeTransport {
    base: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for NativeTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        let url = format!("{}{}", self.base, request.path);
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };
            let mut builder = HTTP_CLIENT
                .request(method, &url)
                .header("Accept", "application/json");
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        })
    }
}

pub fn default_transport(api_base: &str) -> Rc<dyn Transport> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserTransport::new(api_base))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(NativeTransport::new(api_base))
    }
}

/// Empty, malformed, or literal `null` bodies all read as "no payload".
pub fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

fn json_pick_message(value: &Value, keys: &[&str]) -> Option<String> {
    let object = value.as_object()?;
    keys.iter().find_map(|key| match object.get(*key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    })
}

pub fn error_message(payload: Option<&Value>, status: u16) -> String {
    payload
        .and_then(|value| json_pick_message(value, &["detail", "message"]))
        .unwrap_or_else(|| ApiError::fallback_message(status))
}

pub async fn request_json(
    transport: &dyn Transport,
    request: HttpRequest,
) -> Result<Option<Value>, ApiError> {
    let method = request.method;
    let path = request.path.clone();
    debug!("{} {}", method.as_str(), path);

    let response = transport.send(request).await.map_err(|err| {
        warn!("{} {} failed before a response: {}", method.as_str(), path, err.0);
        ApiError::network()
    })?;

    let payload = parse_body(&response.body);
    if !response.is_success() {
        let message = error_message(payload.as_ref(), response.status);
        debug!("{} {} -> {}: {}", method.as_str(), path, response.status, message);
        return Err(ApiError::new(response.status, message));
    }

    Ok(payload)
}

#[cfg(test)]
pub mod testing {
    //! Scripted transport for tests.

    use super::*;
    use std::cell::RefCell;

    type Reply = Result<HttpResponse, TransportError>;

    #[derive(Default)]
    pub struct MockTransport {
        routes: RefCell<Vec<(Method, String, Reply)>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        /// Replies to `method path` (query string ignored). Later routes win.
        pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
            self.routes.borrow_mut().push((
                method,
                path.to_string(),
                Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
            ));
        }

        pub fn fail(&self, method: Method, path: &str) {
            self.routes.borrow_mut().push((
                method,
                path.to_string(),
                Err(TransportError("connection refused".to_string())),
            ));
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        /// `"GET /api/me"` style lines for every request seen so far.
        pub fn calls(&self) -> Vec<String> {
            self.requests
                .borrow()
                .iter()
                .map(|request| format!("{} {}", request.method.as_str(), request.path))
                .collect()
        }

        fn reply_for(&self, request: &HttpRequest) -> Reply {
            let route = request.path.split('?').next().unwrap_or_default();
            self.routes
                .borrow()
                .iter()
                .rev()
                .find(|(method, path, _)| *method == request.method && path == route)
                .map(|(_, _, reply)| reply.clone())
                .unwrap_or_else(|| {
                    Ok(HttpResponse {
                        status: 404,
                        body: r#"{"detail":"Not Found"}"#.to_string(),
                    })
                })
        }
    }

    impl Transport for MockTransport {
        fn send(
            &self,
            request: HttpRequest,
        ) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
            let reply = self.reply_for(&request);
            self.requests.borrow_mut().push(request);
            Box::pin(async move { reply })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MockTransport;
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_body_tolerates_empty_and_invalid_text() {
        assert_eq!(parse_body(""), None);
        assert_eq!(parse_body("   "), None);
        assert_eq!(parse_body("<html>oops</html>"), None);
        assert_eq!(parse_body("null"), None);
        assert_eq!(parse_body(r#"{"a":1}"#), Some(json!({"a": 1})));
    }

    #[test]
    fn error_message_prefers_detail_then_message() {
        let both = json!({"detail": "Not authorized", "message": "ignored"});
        assert_eq!(error_message(Some(&both), 401), "Not authorized");

        let message_only = json!({"detail": "", "message": "Playlist not found"});
        assert_eq!(error_message(Some(&message_only), 404), "Playlist not found");

        let neither = json!({"detail": ["not", "a", "string"]});
        assert_eq!(
            error_message(Some(&neither), 422),
            "Request failed with status 422"
        );
        assert_eq!(error_message(None, 500), "Request failed with status 500");
    }

    #[tokio::test]
    async fn success_with_empty_body_is_none() {
        let transport = MockTransport::new();
        transport.respond(Method::Get, "/api/auth/logout", 204, "");

        let payload = request_json(transport.as_ref(), HttpRequest::get("/api/auth/logout"))
            .await
            .unwrap();
        assert_eq!(payload, None);
    }

    #[tokio::test]
    async fn non_success_status_carries_server_detail() {
        let transport = MockTransport::new();
        transport.respond(Method::Get, "/api/me", 401, r#"{"detail":"Not authorized"}"#);

        let err = request_json(transport.as_ref(), HttpRequest::get("/api/me"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::new(401, "Not authorized"));
    }

    #[tokio::test]
    async fn non_success_with_garbage_body_uses_fallback() {
        let transport = MockTransport::new();
        transport.respond(Method::Get, "/api/me", 502, "Bad Gateway");

        let err = request_json(transport.as_ref(), HttpRequest::get("/api/me"))
            .await
            .unwrap_err();
        assert_eq!(err.status, 502);
        assert_eq!(err.message, "Request failed with status 502");
    }

    #[tokio::test]
    async fn transport_failure_maps_to_status_zero() {
        let transport = MockTransport::new();
        transport.fail(Method::Get, "/api/me");

        let err = request_json(transport.as_ref(), HttpRequest::get("/api/me"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::network());
        assert_eq!(err.message, "Network request failed");
    }
}
