//! HTTP product source over `reqwest`.

use tracing::{debug, instrument};
use url::Url;

use super::{ProductSource, RawProduct, parse_document};
use crate::error::FetchError;

/// Fetches the product document with a single GET.
///
/// No retry and no timeout: the first failure ends the load cycle.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpProductSource {
    /// Create a source for the document at `url`.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Document URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl ProductSource for HttpProductSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<RawProduct>, FetchError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();

        // Body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Product source returned non-success status"
            );
            return Err(FetchError::Status(status));
        }

        let products = parse_document(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse product document"
            );
            FetchError::Parse(e)
        })?;

        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_kept() {
        let url = Url::parse("https://feeds.example/products.json").unwrap();
        let source = HttpProductSource::new(url.clone());
        assert_eq!(source.url(), &url);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_http_error() {
        // Reserve a free port, then release it so nothing is listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{port}/products.json")).unwrap();
        let source = HttpProductSource::new(url);

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }
}
