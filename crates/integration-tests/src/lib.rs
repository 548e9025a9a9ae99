//! Integration tests for the NORDIC storefront.
//!
//! The storefront has no external backend, so tests drive the fully
//! composed router in-process via `tower::ServiceExt::oneshot`. The
//! [`TestApp`] harness keeps the session cookie between requests the way a
//! browser would, which is what carries the cart across calls.
//!
//! # Test Categories
//!
//! - `storefront_pages` - Home page and category filter
//! - `storefront_cart` - Cart add/update/remove over the session
//! - `storefront_checkout` - Checkout and contact form flows

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use tower::ServiceExt;

use nordic_storefront::config::StorefrontConfig;
use nordic_storefront::state::AppState;
use nordic_storefront::{middleware, routes};

/// Build the storefront router the way `main` does, minus the listener.
#[must_use]
pub fn build_app() -> Router {
    let state = AppState::new(StorefrontConfig::default());
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}

/// A response captured by the test harness.
pub struct TestResponse {
    pub status: axum::http::StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of a response header, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// In-process storefront client that remembers its session cookie.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    /// Create a fresh app with its own session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: build_app(),
            cookie: None,
        }
    }

    /// GET a path.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self
            .request_builder("GET", path)
            .body(Body::empty())
            .expect("build request");
        self.send(request).await
    }

    /// POST a urlencoded form to a path.
    pub async fn post_form(&mut self, path: &str, form: &str) -> TestResponse {
        let request = self
            .request_builder("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("build request");
        self.send(request).await
    }

    fn request_builder(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router never fails");

        self.remember_cookie(&response);

        let status = response.status();
        let headers = response.headers().clone();
        let body = read_body(response).await;

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Keep the session cookie like a browser's cookie jar would.
    fn remember_cookie(&mut self, response: &Response<Body>) {
        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(pair) = set_cookie.split(';').next() {
                self.cookie = Some(pair.to_string());
            }
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_body(response: Response<Body>) -> String {
    use http_body_util::BodyExt;

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}
