//! Shared helpers for client tests: an axum stub backend on an ephemeral port.

use axum::Router;

/// Serve `router` on an ephemeral localhost port and return the base URL.
pub(crate) async fn stub_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server failed");
    });
    format!("http://{addr}")
}
