use crate::crawlers::fetcher::{FetchError, Fetcher};
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use url::Url;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Plain HTTP GET fetcher.
///
/// Uses reqwest's default redirect policy (follow up to 10 hops, judge the
/// final status). No custom headers are sent and no cookies are kept.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher whose requests are abandoned after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    /// Wrap a preconfigured client; `timeout` should match the one it was built with
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let target = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let response = self.client.get(target).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(describe(&err))
        }
    }
}

/// Flattens an error and its sources into one line
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
