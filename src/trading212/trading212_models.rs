//! Raw record shapes returned by the Trading 212 history endpoints.
//!
//! Every field is optional: the API omits keys freely, and a record with
//! holes must still normalize instead of failing the page.

use serde::Deserialize;

use crate::constants::PAGE_SIZE;

/// Order status sentinel; anything else never becomes a transaction.
pub const ORDER_STATUS_FILLED: &str = "FILLED";

/// One page of a paginated listing.
///
/// The endpoints disagree on how the next page is addressed: some return a
/// complete `nextPagePath` override, others a `next` cursor token that is
/// re-sent as a query parameter. Both markers are optional and an empty
/// string counts as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_path: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Resolve the URL of the next page, or `None` when the listing is
    /// exhausted. `nextPagePath` wins over the cursor token when both are
    /// present.
    pub fn next_url(&self, base_url: &str, endpoint: &str) -> Option<String> {
        if let Some(path) = non_empty(self.next_page_path.as_deref()) {
            return Some(resolve_page_path(path, base_url, endpoint));
        }
        if let Some(cursor) = non_empty(self.next.as_deref()) {
            return Some(format!(
                "{}{}?limit={}&cursor={}",
                base_url,
                endpoint,
                PAGE_SIZE,
                urlencoding::encode(cursor)
            ));
        }
        None
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A `nextPagePath` can be an absolute URL, a bare query string, or a path
/// relative to the API host (it already carries the version prefix).
fn resolve_page_path(path: &str, base_url: &str, endpoint: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else if path.starts_with('?') {
        format!("{}{}{}", base_url, endpoint, path)
    } else {
        format!("{}{}", host_root(base_url), path)
    }
}

/// Scheme and host of the base URL, without the version prefix.
fn host_root(base_url: &str) -> &str {
    let scheme_end = base_url.find("://").map(|i| i + 3).unwrap_or(0);
    match base_url[scheme_end..].find('/') {
        Some(i) => &base_url[..scheme_end + i],
        None => base_url,
    }
}

/// An equity order from `/equity/history/orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trading212Order {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub filled_quantity: Option<f64>,
    #[serde(default)]
    pub fill_price: Option<f64>,
    #[serde(default)]
    pub date_created: Option<String>,
}

impl Trading212Order {
    pub fn is_filled(&self) -> bool {
        self.status.as_deref() == Some(ORDER_STATUS_FILLED)
    }
}

/// A dividend payment from `/history/dividends`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trading212Dividend {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub paid_on: Option<String>,
}

/// A cash movement from `/history/transactions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trading212CashTransaction {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

/// The three upstream record shapes behind one tag, so normalization is a
/// single dispatch instead of per-endpoint plumbing.
#[derive(Debug, Clone)]
pub enum RawRecord {
    Order(Trading212Order),
    Dividend(Trading212Dividend),
    Cash(Trading212CashTransaction),
}
