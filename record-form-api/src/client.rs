//! reqwest-backed [`RecordApi`] implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::RecordApi;
use crate::types::{Record, RecordPayload};

/// 默认的远端记录集合端点
pub const DEFAULT_BASE_URL: &str = "https://jornadaldb.netlify.app/.netlify/functions/api/";

/// Record API over HTTP/JSON
///
/// The base URL is the collection resource itself: list and create go to the
/// base, update and delete go to `{base}{id}`.
#[derive(Debug, Clone)]
pub struct HttpRecordApi {
    client: Client,
    base_url: Url,
}

impl HttpRecordApi {
    /// Create a client for `base_url` using the transport's default timeouts.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client for `base_url`, optionally bounding every request by `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;
        Self::with_client(base_url, client)
    }

    /// Create a client for `base_url` reusing an existing [`reqwest::Client`].
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Normalized collection URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 单条记录的 URL：`{base}{percent-encoded id}`
    fn record_url(&self, id: &str) -> Result<Url> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(ApiError::InvalidUrl {
                url: format!("{}{id}", self.base_url),
                detail: "record id is not a usable path segment".to_string(),
            });
        }
        self.base_url
            .join(&urlencoding::encode(id))
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{id}", self.base_url),
                detail: e.to_string(),
            })
    }
}

/// Parse `raw` and make sure the path ends with `/` so ids join as a child segment.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidUrl {
        url: raw.to_string(),
        detail: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl {
            url: raw.to_string(),
            detail: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl RecordApi for HttpRecordApi {
    async fn list(&self) -> Result<Vec<Record>> {
        let url = self.base_url.as_str();
        let (_, body) = HttpUtils::execute_request(self.client.get(url), "GET", url).await?;
        let items: Vec<serde_json::Value> = HttpUtils::parse_json(&body)?;
        let total = items.len();
        // 单条记录解析失败时跳过，不影响整个列表
        let records: Vec<Record> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Record>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Skipping malformed record: {e}");
                    None
                }
            })
            .collect();
        log::debug!("Fetched {} of {total} records", records.len());
        Ok(records)
    }

    async fn create(&self, payload: &RecordPayload) -> Result<Record> {
        let url = self.base_url.as_str();
        let (_, body) =
            HttpUtils::execute_request(self.client.post(url).json(payload), "POST", url).await?;
        let record: Record = HttpUtils::parse_json(&body)?;
        log::debug!("Created record {}", record.id);
        Ok(record)
    }

    async fn update(&self, id: &str, payload: &RecordPayload) -> Result<Record> {
        let url = self.record_url(id)?;
        let (_, body) = HttpUtils::execute_request(
            self.client.put(url.clone()).json(payload),
            "PUT",
            url.as_str(),
        )
        .await?;
        let record: Record = HttpUtils::parse_json(&body)?;
        if record.id != id {
            log::warn!("PUT {url} returned record {} instead of {id}", record.id);
        }
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.record_url(id)?;
        HttpUtils::execute_request(self.client.delete(url.clone()), "DELETE", url.as_str())
            .await?;
        Ok(())
    }
}
