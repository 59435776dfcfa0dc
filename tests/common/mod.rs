//! Shared integration test helpers for chefbot.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{CannedServer, runtime, simulated_config};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use chefbot::config::{Config, ReplyStrategy};
use chefbot::controller::ChatController;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// A multi-threaded runtime small enough for tests.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
}

/// Simulated strategy with the given delay and no greeting.
pub fn simulated_config(delay_ms: u64) -> Config {
    let mut config = Config::new().with_simulated_delay_ms(delay_ms);
    config.greeting = None;
    config
}

/// Remote strategy pointed at `endpoint`, no greeting.
pub fn remote_config(endpoint: &str) -> Config {
    let mut config = Config::new()
        .with_strategy(ReplyStrategy::Remote)
        .with_endpoint(endpoint);
    config.greeting = None;
    config
}

/// Poll the controller the way the event loop does until the reply lands.
pub fn poll_until_idle(controller: &mut ChatController, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    while controller.is_loading() {
        controller.poll();
        assert!(Instant::now() < deadline, "reply did not arrive in {timeout:?}");
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// One-shot HTTP server answering a single request with a canned response.
pub struct CannedServer {
    pub url: String,
    handle: JoinHandle<CapturedRequest>,
}

/// What the server received.
#[derive(Debug, Default)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl CannedServer {
    /// Serve `body` with the given status (e.g. `"200 OK"`) to the first
    /// connection on `/api/query`.
    pub fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().expect("Failed to accept connection");
            handle_connection(stream, &response)
        });
        Self {
            url: format!("http://{addr}/api/query"),
            handle,
        }
    }

    /// Wait for the request to be served and return what was received.
    pub fn request(self) -> CapturedRequest {
        self.handle.join().expect("Canned server thread panicked")
    }
}

fn handle_connection(stream: TcpStream, response: &str) -> CapturedRequest {
    let mut reader = BufReader::new(stream.try_clone().expect("Failed to clone stream"));
    let mut captured = CapturedRequest::default();

    reader
        .read_line(&mut captured.request_line)
        .expect("Failed to read request line");
    captured.request_line = captured.request_line.trim_end().to_string();

    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("Failed to read header");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            captured
                .headers
                .push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let length: usize = captured
        .header("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).expect("Failed to read body");
    captured.body = String::from_utf8(body).expect("Request body is not UTF-8");

    let mut stream = stream;
    stream
        .write_all(response.as_bytes())
        .expect("Failed to write response");
    let _ = stream.flush();
    captured
}

/// URL of a local port nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}/api/query")
}
