// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// A mock HTTP service that returns predefined responses based on request paths
/// and records every request URI it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<http::Uri>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service, keeping a handle for inspection
    pub fn into_client(self) -> (Client, MockService) {
        (Client::new(self.clone(), "default"), self)
    }

    /// URIs of all requests received so far
    pub fn requests(&self) -> Vec<http::Uri> {
        self.requests.lock().unwrap().clone()
    }

    /// Value of a query parameter on the last request, if any
    pub fn last_query_param(&self, name: &str) -> Option<String> {
        let uri = self.requests().pop()?;
        let query = uri.query()?.to_string();
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        self.requests.lock().unwrap().push(req.uri().clone());

        let response = if req.method() == http::Method::GET {
            self.responses.lock().unwrap().get(req.uri().path()).cloned()
        } else {
            None
        };

        Box::pin(async move {
            let (status, body) =
                response.unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock list response wrapping the given items
pub fn list_json(kind: &str, items: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": format!("{}List", kind),
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a mock object with the given kind, name and optional namespace
pub fn object_json(kind: &str, name: &str, namespace: Option<&str>) -> serde_json::Value {
    let mut metadata = serde_json::json!({ "name": name, "uid": format!("uid-{}", name) });
    if let Some(ns) = namespace {
        metadata["namespace"] = serde_json::Value::from(ns);
    }
    serde_json::json!({
        "apiVersion": "v1",
        "kind": kind,
        "metadata": metadata
    })
}

/// Create a Status failure response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Log sink collecting formatted tracing output in memory
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Capture debug-level logs on the current thread until the guard is dropped
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(capture.clone())
        .finish();

    (capture, tracing::subscriber::set_default(subscriber))
}
