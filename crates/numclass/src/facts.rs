use crate::prelude::*;
use std::time::Duration;

pub const DEFAULT_FACT_URL: &str = "http://numbersapi.com";

/// Client for the trivia service that provides the `fun_fact` field.
///
/// Each lookup is a single `GET {base_url}/{number}`. There are no retries and
/// no fallback text: a failed lookup is reported to the caller.
#[derive(Debug, Clone)]
pub struct FactFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl FactFetcher {
    /// Build a fetcher for `base_url`. A `timeout` of `None` never gives up on
    /// a slow upstream.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, number: i64) -> String {
        format!("{}/{number}", self.base_url)
    }

    /// Fetch the fun fact for `number`, returning the response body as text.
    pub async fn fetch(&self, number: i64) -> std::result::Result<String, Error> {
        let url = self.url_for(number);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::UpstreamFetch(format!("Failed to request {url}: {e}")))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::UpstreamFetch(format!("Failed to read body from {url}: {e}")))?;

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Seconds from the command line to an optional timeout, where 0 means none.
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
