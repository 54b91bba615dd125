//! A real HTTP peer for tests of the client and the proxy.

use axum::Router;
use tokio::net::TcpListener;

/// Serves `app` on a free local port and returns its origin.
pub(crate) async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
