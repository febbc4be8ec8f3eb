// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Loopback stand-in for the `/api/*` server: canned responses per route,
//! every request recorded.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub uri: String,
    pub body: Vec<u8>,
}

#[derive(Clone, Default)]
pub struct StubServer {
    routes: Arc<Mutex<HashMap<(String, String), (u16, Vec<u8>)>>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StubServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with `status` for `method` on `uri` (path plus query)
    pub fn route(self, method: &str, uri: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.lock().unwrap().insert(
            (method.to_string(), uri.to_string()),
            (status, body.into()),
        );
        self
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    /// Bind to an ephemeral port and return the base URL
    pub async fn start(&self) -> String {
        let app = Router::new().fallback(respond).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server failed");
        });

        format!("http://{}", addr)
    }
}

async fn respond(
    State(stub): State<StubServer>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let uri = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    stub.seen.lock().unwrap().push(SeenRequest {
        method: method.as_str().to_string(),
        uri: uri.clone(),
        body: body.to_vec(),
    });

    let canned = stub
        .routes
        .lock()
        .unwrap()
        .get(&(method.as_str().to_string(), uri))
        .cloned();

    match canned {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, r#"{"detail":"Not Found"}"#).into_response(),
    }
}
