//! In-process mock backend built on `tiny_http`.
//!
//! Serves a fixed script of replies in order and records every request it
//! receives so tests can assert on method, path, headers, and body.

#![allow(dead_code)]

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sketch_config::GatewayConfig;
use sketch_gateway::HttpGateway;

#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

pub struct Reply {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(body: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: "application/zip",
            body: body.to_vec(),
        }
    }
}

pub struct MockBackend {
    pub base_url: String,
    requests: mpsc::Receiver<Captured>,
}

impl MockBackend {
    pub fn start(replies: Vec<Reply>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend");
        let port = server.server_addr().to_ip().expect("ip address").port();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for reply in replies {
                let Ok(mut request) = server.recv() else {
                    return;
                };
                let mut body = Vec::new();
                let _ = request.as_reader().read_to_end(&mut body);
                let header = |name: &'static str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv(name))
                        .map(|h| h.value.to_string())
                };
                let captured = Captured {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    authorization: header("Authorization"),
                    content_type: header("Content-Type"),
                    body,
                };
                let _ = tx.send(captured);

                let response = tiny_http::Response::from_data(reply.body)
                    .with_status_code(reply.status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", reply.content_type)
                            .expect("header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests: rx,
        }
    }

    pub fn gateway(&self) -> HttpGateway {
        let config = GatewayConfig {
            base_url: self.base_url.clone(),
            timeout_secs: Some(5),
            ..Default::default()
        };
        HttpGateway::new(&config).expect("gateway builds")
    }

    pub fn next_request(&self) -> Captured {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("mock backend should have received a request")
    }
}
