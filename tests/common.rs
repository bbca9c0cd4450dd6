#![allow(dead_code)]

use std::time::Duration;

use btce_market_rs::{BtcE, ClientConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Local HTTP/1.1 endpoint that answers every request with the same canned response
/// and records each request line (`GET /api/3/... HTTP/1.1`).
pub struct MockServer {
    pub host: String,
    requests: mpsc::UnboundedReceiver<String>,
}

impl MockServer {
    pub async fn start(status: u16, body: &str) -> Self {
        Self::spawn(Some((status, body.to_string()))).await
    }

    /// Accepts connections and reads the request but never answers.
    pub async fn start_silent() -> Self {
        Self::spawn(None).await
    }

    async fn spawn(reply: Option<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                let tx = tx.clone();
                let reply = reply.clone();
                tokio::spawn(async move {
                    handle_connection(socket, tx, reply).await;
                });
            }
        });

        Self {
            host: format!("http://{}", addr),
            requests: rx,
        }
    }

    pub async fn next_request_line(&mut self) -> String {
        self.requests.recv().await.expect("no request received")
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    tx: mpsc::UnboundedSender<String>,
    reply: Option<(u16, String)>,
) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    let head = String::from_utf8_lossy(&head);
    let _ = tx.send(head.lines().next().unwrap_or_default().to_string());

    match reply {
        Some((status, body)) => {
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason_phrase(status),
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
        None => tokio::time::sleep(Duration::from_secs(30)).await,
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

pub fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .unwrap()
}

pub fn client_for(server: &MockServer) -> BtcE {
    client_with_config(server, ClientConfig::new())
}

pub fn client_with_config(server: &MockServer, config: ClientConfig) -> BtcE {
    let config = config.with_host(server.host.as_str());
    let http = http_client(config.timeout);
    BtcE::with_client(config, http).unwrap()
}
