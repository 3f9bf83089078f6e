#![allow(dead_code)]

pub mod capture;
pub mod fixtures;

use std::time::Duration;

use roadwatch_api_client::AnalysisClient;
use roadwatch_core::ClientConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Client pointed at `base_url` with an optional short deadline.
pub fn client_for(base_url: &str, timeout: Option<Duration>) -> AnalysisClient {
    roadwatch_core::telemetry::init_test_tracing();

    let mut config = ClientConfig::new(base_url);
    if let Some(timeout) = timeout {
        config = config.with_request_timeout(timeout);
    }
    AnalysisClient::new(config).expect("valid test config")
}

/// Backend that answers `/health` with 200 and then accepts the analysis
/// request without ever replying.
pub async fn spawn_stalling_backend() -> String {
    spawn_raw_backend(None).await
}

/// Backend that answers `/health` with 200 and every other request with the
/// given raw HTTP bytes, closing the connection afterwards. With `None` the
/// other requests are accepted but never answered.
pub async fn spawn_raw_backend(reply: Option<&'static [u8]>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = vec![0u8; 64 * 1024];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]);
                if head.starts_with("GET /health") {
                    let _ = socket
                        .write_all(
                            b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                        )
                        .await;
                } else if let Some(reply) = reply {
                    let _ = socket.write_all(reply).await;
                    let _ = socket.shutdown().await;
                } else {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                }
            });
        }
    });

    format!("http://{}", addr)
}

/// Address nothing is listening on.
pub async fn unreachable_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
