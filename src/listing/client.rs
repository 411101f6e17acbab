// src/listing/client.rs
use std::time::Duration;

use reqwest::header;

use crate::utils::error::FetchError;

const LISTING_USER_AGENT: &str = concat!("scholarship_scraper/", env!("CARGO_PKG_VERSION"));
// Be polite to the listing site: small fixed delay before each request.
const REQUEST_DELAY_MS: u64 = 250;

/// HTTP client for the paginated scholarship listing.
pub struct ListingClient {
    http: reqwest::Client,
    base_url: String,
}

impl ListingClient {
    /// Builds a client with a descriptive User-Agent and a bounded
    /// per-request timeout. A timeout surfaces as that page's fetch failure.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(LISTING_USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('?').to_string(),
        })
    }

    /// URL for a given 1-based page number. The first page has a different
    /// URL structure; later pages use the `fwp_paged` query parameter.
    pub fn page_url(&self, page: u32) -> String {
        if page <= 1 {
            self.base_url.clone()
        } else {
            format!("{}?fwp_paged={}", self.base_url, page)
        }
    }

    /// Fetches the raw markup for one listing page.
    pub async fn fetch_page(&self, page: u32) -> Result<String, FetchError> {
        let url = self.page_url(page);
        tracing::debug!("Fetching listing page from: {}", url);

        tokio::time::sleep(Duration::from_millis(REQUEST_DELAY_MS)).await;

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*")
            .send()
            .await?; // Propagates reqwest::Error as FetchError::Network

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for URL: {}", status, url);
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(FetchError::PageNotFound(url));
            }
            return Err(FetchError::Http(status));
        }

        let body = response.text().await?;
        tracing::debug!("Downloaded {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
