// Package registry search client

use crate::config::RegistryConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One normalized registry hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultRow {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Empty when the registry did not report one
    pub project_url: String,
    /// Empty when the registry did not report one
    pub icon_url: String,
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Registry request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Registry returned HTTP {status}")]
    Status { status: u16 },

    #[error("Registry response could not be parsed: {0}")]
    Decode(#[from] serde_json::Error),
}

// ── Registry wire format ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RegistryResponse {
    data: Vec<RegistryPackage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryPackage {
    id: String,
    version: String,
    description: String,
    #[serde(default)]
    project_url: Option<String>,
    #[serde(default)]
    icon_url: Option<String>,
}

impl From<RegistryPackage> for SearchResultRow {
    fn from(pkg: RegistryPackage) -> Self {
        Self {
            name: pkg.id,
            version: pkg.version,
            description: pkg.description,
            project_url: pkg.project_url.unwrap_or_default(),
            icon_url: pkg.icon_url.unwrap_or_default(),
        }
    }
}

/// Parse a registry `/query` response body into rows, preserving order
pub fn parse_response(body: &str) -> Result<Vec<SearchResultRow>, SearchError> {
    let response: RegistryResponse = serde_json::from_str(body)?;
    Ok(response.data.into_iter().map(SearchResultRow::from).collect())
}

/// Issues id-scoped queries against the package registry
#[derive(Debug, Clone)]
pub struct PackageSearchClient {
    http: reqwest::Client,
    base_url: String,
    include_prerelease: bool,
}

impl PackageSearchClient {
    pub fn new(config: &RegistryConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            include_prerelease: config.include_prerelease,
        })
    }

    /// Full request URL for `query_text`; the text is percent-encoded
    pub fn query_url(&self, query_text: &str) -> String {
        format!(
            "{}/query?q=id:{}&prerelease={}",
            self.base_url,
            urlencoding::encode(query_text),
            self.include_prerelease
        )
    }

    /// Run one search. Any transport, status or parse failure fails the whole call.
    pub async fn search(&self, query_text: &str) -> Result<Vec<SearchResultRow>, SearchError> {
        let url = self.query_url(query_text);
        log::debug!("Registry query: {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let rows = parse_response(&body)?;

        log::info!("Registry returned {} packages for '{}'", rows.len(), query_text);
        Ok(rows)
    }
}
