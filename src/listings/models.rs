use serde::{Deserialize, Deserializer, Serialize};

// repo
//  ├── id
//  ├── name
//  ├── description
//  ├── html_url
//  ├── homepage
//  ├── language
//  ├── stargazers_count
//  ├── forks_count
//  ├── fork
//  ├── created_at
//  ├── updated_at
//  └── topics[]
//
// Everything is optional here. The listing API is not ours, and one odd
// record must not fail the whole page.

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawListingRecord {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,

    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,

    #[serde(default, deserialize_with = "null_as_false")]
    pub fork: bool,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub topics: Option<Vec<String>>,
}

// `"fork": null` shows up in some mirrors of the API; treat it as absent.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
