use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

/// One recorded request: method and `Host` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub method: String,
    pub host: String,
}

/// HTTP/1.1 virtual-host stub. Every request gets `200 OK` plus the headers
/// configured for its `Host`.
pub struct HttpStub {
    addr: SocketAddr,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl HttpStub {
    pub async fn start(
        headers_by_host: HashMap<String, Vec<(String, String)>>,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let seen = Arc::new(Mutex::new(Vec::new()));
        let headers_by_host = Arc::new(headers_by_host);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let log = Arc::clone(&seen);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let log = Arc::clone(&log);
                        let headers_by_host = Arc::clone(&headers_by_host);
                        tokio::spawn(serve(stream, log, headers_by_host));
                    }
                }
            }
        });

        Ok(Self {
            addr,
            seen,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for HttpStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve(
    mut stream: TcpStream,
    log: Arc<Mutex<Vec<SeenRequest>>>,
    headers_by_host: Arc<HashMap<String, Vec<(String, String)>>>,
) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    let head = String::from_utf8_lossy(&head);

    let method = head.split_whitespace().next().unwrap_or_default().to_string();
    let host = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("host")
                .then(|| value.trim().to_string())
        })
        .unwrap_or_default();

    let mut response = String::from("HTTP/1.1 200 OK\r\n");
    for (name, value) in headers_by_host.get(&host).into_iter().flatten() {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str("Content-Length: 0\r\nConnection: close\r\n\r\n");

    log.lock().unwrap().push(SeenRequest { method, host });
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
