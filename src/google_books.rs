use std::time::Duration;

use serde::Deserialize;

/// Default Google Books volumes endpoint.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Result cap per search, hard-wired into the query string.
const MAX_RESULTS: u32 = 10;

const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(rename = "totalItems")]
    total_items: Option<u64>,
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub language: Option<String>,
    #[serde(rename = "industryIdentifiers")]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

/// Blocking client for the volumes search endpoint.
pub struct SearchClient {
    http: Option<reqwest::blocking::Client>,
    api_url: String,
}

impl SearchClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| tracing::warn!("failed to build HTTP client: {}", e))
            .ok();

        Self {
            http,
            api_url: api_url.into(),
        }
    }

    /// One GET per call, no retries. Transport failures, malformed
    /// bodies and a zero `totalItems` all collapse to an empty list;
    /// the caller cannot tell them apart and must not treat any of
    /// them as fatal.
    pub fn search(&self, query: &str) -> Vec<Volume> {
        let Some(http) = &self.http else {
            return Vec::new();
        };

        let url = format!(
            "{}?q={}&maxResults={}",
            self.api_url,
            urlencoding::encode(query),
            MAX_RESULTS
        );
        tracing::debug!("searching volumes: {}", url);

        let resp = match http.get(&url).send() {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("book search request failed: {}", e);
                return Vec::new();
            }
        };

        if !resp.status().is_success() {
            tracing::warn!("book search returned status {}", resp.status());
            return Vec::new();
        }

        let body = match resp.text() {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("failed to read search response body: {}", e);
                return Vec::new();
            }
        };

        let parsed: VolumesResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("failed to parse search response: {}", e);
                return Vec::new();
            }
        };

        if parsed.total_items.unwrap_or(0) == 0 {
            return Vec::new();
        }

        parsed.items.unwrap_or_default()
    }
}
