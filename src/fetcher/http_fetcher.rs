use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::fetcher::Fetcher;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct HttpFetcher {
    client: Client,
    access_token: Option<String>,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_options(None, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_options(access_token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("space-traveling/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            access_token: access_token.filter(|t| !t.is_empty()),
        })
    }

    /// Request URL for a cursor, with the access token attached when one is
    /// configured and the cursor does not already carry it.
    pub fn request_url(&self, cursor: &str) -> Result<Url> {
        let mut url = Url::parse(cursor)?;

        if let Some(token) = &self.access_token {
            let has_token = url.query_pairs().any(|(k, _)| k == "access_token");
            if !has_token {
                url.query_pairs_mut().append_pair("access_token", token);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, cursor: &str) -> Result<Vec<u8>> {
        let url = self.request_url(cursor)?;
        tracing::debug!("GET {}", cursor);

        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?.to_vec();
        tracing::debug!("Fetched {} bytes", body.len());

        Ok(body)
    }
}
