//! Integration tests for the product recommendation carousel.
//!
//! The tests under `tests/` run the controller against a real file store in
//! a temporary directory and a loopback HTTP server, so they need no
//! network access or external services.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p carousel-integration-tests
//! ```

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use carousel::{FetchError, ProductSource, RawProduct};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use url::Url;

/// Loopback HTTP server answering every request with one fixed response.
pub struct DocumentServer {
    url: Url,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl DocumentServer {
    /// Serve `body` with `status` on an ephemeral port.
    ///
    /// # Errors
    ///
    /// Returns an error if no loopback port can be bound.
    pub async fn start(status: u16, body: impl Into<String>) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let url = Url::parse(&format!("http://{addr}/products.json"))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let response: Arc<str> = http_response(status, &body.into()).into();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let handle = tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let response = Arc::clone(&response);
                tokio::spawn(async move {
                    let _ = respond(socket, &response).await;
                });
            }
        });

        Ok(Self { url, hits, handle })
    }

    /// Document URL on this server.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Connections accepted so far.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for DocumentServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn http_response(status: u16, body: &str) -> String {
    let reason = if status == 200 { "OK" } else { "Error" };
    format!(
        "HTTP/1.1 {status} {reason}\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    )
}

async fn respond(mut socket: TcpStream, response: &str) -> io::Result<()> {
    let mut request: Vec<u8> = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        request.extend(buf.iter().take(n));
    }
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

/// In-process source returning a fixed product list.
#[derive(Debug, Default)]
pub struct FixedSource {
    products: Vec<RawProduct>,
    calls: AtomicUsize,
}

impl FixedSource {
    #[must_use]
    pub const fn new(products: Vec<RawProduct>) -> Self {
        Self {
            products,
            calls: AtomicUsize::new(0),
        }
    }

    /// `count` products with numeric ids starting at 1.
    #[must_use]
    pub fn numbered(count: i64) -> Self {
        Self::new((1..=count).map(|id| RawProduct::new(id.into())).collect())
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProductSource for FixedSource {
    async fn fetch(&self) -> Result<Vec<RawProduct>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }
}

impl ProductSource for &FixedSource {
    async fn fetch(&self) -> Result<Vec<RawProduct>, FetchError> {
        (**self).fetch().await
    }
}
