//! Devfile registry index download

use crate::error::Result;
use crate::model::{DevfileFilter, DevfileType};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_REGISTRY: &str = "https://registry.devfile.io/";
const INDEX_PATH: &str = "v2index";

/// Source of catalog entries
pub trait CatalogClient: Send + Sync {
    fn download_devfile_types(&self, url: &str, filter: &DevfileFilter) -> Result<Vec<DevfileType>>;
}

/// Fetches `{registry}/v2index` over HTTP
pub struct RegistryClient {
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("stackmatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl CatalogClient for RegistryClient {
    fn download_devfile_types(&self, url: &str, filter: &DevfileFilter) -> Result<Vec<DevfileType>> {
        let index_url = url_with_versions(url, filter);
        info!(url = %index_url, "Downloading devfile index");

        let types: Vec<DevfileType> = self
            .client
            .get(&index_url)
            .send()?
            .error_for_status()?
            .json()?;

        debug!(entries = types.len(), "Devfile index downloaded");
        Ok(types)
    }
}

/// Index URL of `registry`, with schema bounds appended as query parameters
pub fn url_with_versions(registry: &str, filter: &DevfileFilter) -> String {
    let mut url = format!("{}/{}", registry.trim_end_matches('/'), INDEX_PATH);

    let params: Vec<String> = [
        ("minSchemaVersion", filter.min_schema_version.as_deref()),
        ("maxSchemaVersion", filter.max_schema_version.as_deref()),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value
            .filter(|v| !v.is_empty())
            .map(|v| format!("{}={}", key, v))
    })
    .collect();

    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}
