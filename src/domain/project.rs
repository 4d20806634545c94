// src/domain/project.rs

use crate::listings::RawListingRecord;

/// A repository as the site uses it: flattened, fork-free, with every
/// optional field resolved. Acts as the boundary between whatever the
/// listing API returns and the templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedItem {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: String,
    pub created_at: Option<String>,
    pub topics: Vec<String>,
}

impl NormalizedItem {
    /// Flattens one raw record. Identifier, name and link are required;
    /// everything else passes through as-is.
    pub fn from_raw(rec: &RawListingRecord) -> Result<Self, String> {
        let id = rec.id.ok_or("Missing identifier")?;

        let name = rec
            .name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or("Missing or empty name")?
            .to_string();

        let html_url = rec
            .html_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty html_url")?
            .to_string();

        Ok(Self {
            id,
            name,
            description: rec.description.clone(),
            html_url,
            homepage: rec.homepage.clone(),
            language: rec.language.clone(),
            stargazers_count: rec.stargazers_count.unwrap_or(0),
            forks_count: rec.forks_count.unwrap_or(0),
            updated_at: rec.updated_at.clone().unwrap_or_default(),
            created_at: rec.created_at.clone(),
            topics: rec.topics.clone().unwrap_or_default(),
        })
    }
}

impl From<NormalizedItem> for RawListingRecord {
    fn from(item: NormalizedItem) -> Self {
        RawListingRecord {
            id: Some(item.id),
            name: Some(item.name),
            description: item.description,
            html_url: Some(item.html_url),
            homepage: item.homepage,
            language: item.language,
            stargazers_count: Some(item.stargazers_count),
            forks_count: Some(item.forks_count),
            fork: false,
            created_at: item.created_at,
            updated_at: Some(item.updated_at),
            topics: Some(item.topics),
        }
    }
}

/// Drops forks and malformed records, keeps everything else in order.
/// A missing description is not a reason to drop a record.
pub fn normalize(records: &[RawListingRecord]) -> Vec<NormalizedItem> {
    records
        .iter()
        .filter(|rec| !rec.fork)
        .filter_map(|rec| match NormalizedItem::from_raw(rec) {
            Ok(item) => Some(item),
            Err(reason) => {
                tracing::warn!(id = ?rec.id, name = ?rec.name, %reason, "dropping malformed record");
                None
            }
        })
        .collect()
}
