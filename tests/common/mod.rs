//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use pay_bridge::{BridgeConfig, HttpServer, Shutdown};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Drive one GET through the full router without a socket.
pub async fn get(config: BridgeConfig, uri: &str) -> Response {
    HttpServer::new(config)
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Pull the URL out of the meta refresh tag.
pub fn meta_refresh_url(body: &str) -> &str {
    let start = body.find("content=\"0;url=").expect("no meta refresh") + "content=\"0;url=".len();
    let end = body[start..].find('"').expect("unterminated meta refresh") + start;
    &body[start..end]
}

/// Bind on an ephemeral port and serve until the returned handle triggers.
pub async fn spawn_server(config: BridgeConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}
