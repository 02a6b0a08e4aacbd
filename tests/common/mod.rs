use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use veriface::domain::ports::{HttpRequest, RawResponse, Transport};
use veriface::{TransportError, VeriFace, VerifaceConfig, telemetry};

pub const API_KEY: &str = "test-api-key";
pub const API_URL: &str = "https://stub.veriface.test";

/// Replays scripted outcomes in order and records every request it receives.
#[derive(Default)]
pub struct StubTransport {
    outcomes: Mutex<VecDeque<Result<RawResponse, String>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[allow(dead_code)]
impl StubTransport {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let stub = Arc::new(Self::default());
        stub.push(status, body);
        stub
    }

    pub fn failing(message: &str) -> Arc<Self> {
        let stub = Arc::new(Self::default());
        stub.outcomes
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        stub
    }

    pub fn push(&self, status: u16, body: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body.as_bytes().to_vec())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    /// Body of the last request, decoded as JSON.
    pub fn last_json_body(&self) -> serde_json::Value {
        let body = self.last_request().body.expect("request had no body");
        serde_json::from_slice(&body).expect("request body is not JSON")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::new(url, message)),
            None => Err(TransportError::new(url, "no scripted response left")),
        }
    }
}

#[allow(dead_code)]
pub fn config() -> VerifaceConfig {
    VerifaceConfig::new(API_KEY).with_api_url(API_URL)
}

#[allow(dead_code)]
pub fn client(stub: &Arc<StubTransport>) -> VeriFace<Arc<StubTransport>> {
    telemetry::init_tracing();
    VeriFace::with_transport(&config(), stub.clone())
}

/// Serves exactly one HTTP exchange on a random local port.
///
/// Returns the base URL and a handle resolving to the raw request text.
#[allow(dead_code)]
pub async fn spawn_http_stub(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.trim()
                        .eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
