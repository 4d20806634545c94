// client.rs
use crate::listings::{ListingError, RawListingRecord};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Only the first page is ever read.
pub const PAGE_SIZE: u32 = 100;

/// Anything that can hand back the raw listing for an owner.
pub trait ListingSource: Send + Sync {
    fn fetch_listing(&self, owner: &str) -> Result<Vec<RawListingRecord>, ListingError>;
}

pub struct ListingClient {
    client: Client,
    endpoint: Url,
}

impl ListingClient {
    pub fn new(
        endpoint: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ListingError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ListingError::Unavailable(format!("bad endpoint {endpoint}: {e}")))?;

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ListingError::Unavailable(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// `<endpoint>/{owner}/repos?sort=updated&per_page=100`
    pub fn repos_url(&self, owner: &str) -> Result<Url, ListingError> {
        let owner = owner.trim();
        if owner.is_empty() {
            return Err(ListingError::InvalidOwner(owner.to_string()));
        }

        let mut url = self.endpoint.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ListingError::Unavailable(format!("endpoint cannot be a base: {}", self.endpoint))
            })?;
            segments.pop_if_empty().push(owner).push("repos");
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("sort", "updated")
            .append_pair("per_page", &PAGE_SIZE.to_string());

        Ok(url)
    }

    fn decode_records(body: Value) -> Result<Vec<RawListingRecord>, ListingError> {
        let items = match body {
            Value::Array(items) => items,
            other => {
                return Err(ListingError::Decode(format!(
                    "expected a JSON array, got {}",
                    kind_of(&other)
                )))
            }
        };

        let total = items.len();
        let records: Vec<RawListingRecord> = items
            .into_iter()
            .enumerate()
            .filter_map(|(idx, item)| match serde_json::from_value(item) {
                Ok(rec) => Some(rec),
                Err(e) => {
                    tracing::warn!(index = idx, error = %e, "dropping malformed listing record");
                    None
                }
            })
            .collect();

        tracing::debug!(total, kept = records.len(), "decoded listing page");
        Ok(records)
    }
}

impl ListingSource for ListingClient {
    fn fetch_listing(&self, owner: &str) -> Result<Vec<RawListingRecord>, ListingError> {
        let url = self.repos_url(owner)?;
        let start = std::time::Instant::now();

        tracing::info!(%url, "fetching project listing");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|e| ListingError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            return Err(ListingError::Unavailable(format!("HTTP {status}: {text}")));
        }

        let body: Value = resp
            .json()
            .map_err(|e| ListingError::Decode(e.to_string()))?;

        let records = Self::decode_records(body)?;
        tracing::info!(
            count = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "project listing fetched"
        );
        Ok(records)
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
