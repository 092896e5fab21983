//! Paginated fetcher for the Trading 212 history endpoints.
//!
//! All failure modes degrade to "return what was accumulated so far": a
//! partial sync is preferred over no output. Nothing in this module raises
//! to the caller.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::time::sleep;

use crate::constants::{
    CASH_TRANSACTIONS_ENDPOINT, DIVIDENDS_ENDPOINT, ORDERS_ENDPOINT, PAGE_SIZE,
    RATE_LIMIT_DELAY_MS, REQUEST_TIMEOUT_SECS,
};
use crate::errors::Error;
use crate::secrets::Credentials;

use super::trading212_models::{
    Page, Trading212CashTransaction, Trading212Dividend, Trading212Order,
};

/// Why a pagination loop ended early.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::InvalidResponse(e.to_string())
    }
}

/// Items accumulated from one endpoint, plus the failure that cut the
/// pagination short, if any.
#[derive(Debug)]
pub struct PagedFetch<T> {
    pub items: Vec<T>,
    pub failure: Option<FetchError>,
}

impl<T> PagedFetch<T> {
    /// True when every page of the listing was retrieved.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// One authenticated GET returning the raw response body.
#[async_trait]
pub(crate) trait PageSource: Send + Sync {
    async fn get_body(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP client for the Trading 212 REST API.
pub struct Trading212Client {
    http: Client,
    auth_header: String,
    base_url: String,
}

impl Trading212Client {
    pub fn new(base_url: &str, credentials: &Credentials) -> crate::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::ClientSetup(e.to_string()))?;

        let pair = format!("{}:{}", credentials.api_key, credentials.api_secret);
        let auth_header = format!("Basic {}", BASE64.encode(pair));

        Ok(Self {
            http,
            auth_header,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_orders(&self) -> PagedFetch<Trading212Order> {
        self.fetch_all(ORDERS_ENDPOINT).await
    }

    pub async fn fetch_dividends(&self) -> PagedFetch<Trading212Dividend> {
        self.fetch_all(DIVIDENDS_ENDPOINT).await
    }

    pub async fn fetch_cash_transactions(&self) -> PagedFetch<Trading212CashTransaction> {
        self.fetch_all(CASH_TRANSACTIONS_ENDPOINT).await
    }

    /// Retrieve every item of a paginated listing.
    pub async fn fetch_all<T: DeserializeOwned>(&self, endpoint: &str) -> PagedFetch<T> {
        collect_pages(self, &self.base_url, endpoint).await
    }
}

#[async_trait]
impl PageSource for Trading212Client {
    async fn get_body(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header("Authorization", &self.auth_header)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

/// Drain a paginated endpoint, following whichever continuation marker the
/// response carries, until exhaustion or the first failure.
///
/// An unconditional delay follows every request; the upstream rate limit is
/// undocumented and this is not adaptive backoff.
pub(crate) async fn collect_pages<T, S>(
    source: &S,
    base_url: &str,
    endpoint: &str,
) -> PagedFetch<T>
where
    T: DeserializeOwned,
    S: PageSource + ?Sized,
{
    let mut items: Vec<T> = Vec::new();
    let mut next = Some(first_page_url(base_url, endpoint));

    while let Some(url) = next {
        let body = match source.get_body(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("{}: stopping after {} items: {}", endpoint, items.len(), e);
                return PagedFetch {
                    items,
                    failure: Some(e),
                };
            }
        };

        let page: Page<T> = match serde_json::from_str(&body) {
            Ok(page) => page,
            Err(e) => {
                let failure = FetchError::from(e);
                warn!(
                    "{}: stopping after {} items: {}",
                    endpoint,
                    items.len(),
                    failure
                );
                return PagedFetch {
                    items,
                    failure: Some(failure),
                };
            }
        };

        debug!("{}: fetched {} items", endpoint, page.items.len());
        next = page.next_url(base_url, endpoint);
        items.extend(page.items);

        sleep(Duration::from_millis(RATE_LIMIT_DELAY_MS)).await;
    }

    PagedFetch {
        items,
        failure: None,
    }
}

fn first_page_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}?limit={}", base_url, endpoint, PAGE_SIZE)
}
