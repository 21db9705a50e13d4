#![allow(dead_code)]

use std::sync::Once;

use axum::Router;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("hello_agent=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the full application and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    spawn_router(hello_agent::app()).await
}

/// Spawns an arbitrary router on a random local port and waits until it
/// answers.
pub async fn spawn_router(router: Router) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        hello_agent::serve_with_shutdown(listener, router, std::future::pending())
            .await
            .unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client.get(format!("{address}/health")).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}
