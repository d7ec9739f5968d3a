use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use rekt_domain::{RuntimeConfig, SourceConfig, Taxonomy};

use crate::config::validation::{validate_endpoint, validate_limits, validate_page_size};

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://public-api.defiyield.app/graphql/";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub graphql_endpoint: String,
    pub graphql_api_key: Option<String>,
    pub page_size: usize,
    pub default_limit: usize,
    pub max_limit: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    /// Inline category taxonomy; empty means the built-in list.
    pub taxonomy: Vec<String>,
    /// YAML file holding the taxonomy; wins over `taxonomy` when set.
    pub taxonomy_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            graphql_api_key: None,
            page_size: 50,
            default_limit: 100,
            max_limit: 1000,
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 30,
            taxonomy: Vec::new(),
            taxonomy_path: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("REKT_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            warn!("config.toml not found, using defaults");
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(api_key) = &self.graphql_api_key {
            if api_key.trim().is_empty() {
                self.graphql_api_key = None;
            }
        }
        if let Some(path) = &self.taxonomy_path {
            if path.trim().is_empty() {
                self.taxonomy_path = None;
            }
        }
        self.graphql_endpoint = self.graphql_endpoint.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(path) = &self.taxonomy_path {
            self.taxonomy_path = Some(resolve_path(base, path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_endpoint(&self.graphql_endpoint)?;
        if self.graphql_api_key.is_none() {
            return Err(anyhow!(
                "graphql_api_key must be set (config.toml or REKT_GRAPHQL_API_KEY)"
            ));
        }
        validate_page_size(self.page_size)?;
        validate_limits(self.default_limit, self.max_limit)?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn inline_taxonomy(&self) -> Taxonomy {
        Taxonomy::new(self.taxonomy.clone()).unwrap_or_default()
    }

    pub fn to_runtime_config(&self, taxonomy: Taxonomy) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            page_size: self.page_size,
            default_limit: self.default_limit,
            max_limit: self.max_limit,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            taxonomy,
        }
    }

    pub fn to_source_config(&self) -> SourceConfig {
        SourceConfig {
            graphql_endpoint: self.graphql_endpoint.clone(),
            graphql_api_key: self.graphql_api_key.clone().unwrap_or_default(),
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("REKT_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("REKT_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("REKT_GRAPHQL_ENDPOINT") {
            self.graphql_endpoint = value;
        }
        if let Ok(value) = env::var("REKT_GRAPHQL_API_KEY") {
            self.graphql_api_key = Some(value);
        }
        if let Ok(value) = env::var("REKT_PAGE_SIZE") {
            self.page_size = value.parse().unwrap_or(self.page_size);
        }
        if let Ok(value) = env::var("REKT_DEFAULT_LIMIT") {
            self.default_limit = value.parse().unwrap_or(self.default_limit);
        }
        if let Ok(value) = env::var("REKT_MAX_LIMIT") {
            self.max_limit = value.parse().unwrap_or(self.max_limit);
        }
        if let Ok(value) = env::var("REKT_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("REKT_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("REKT_TAXONOMY") {
            self.taxonomy = parse_env_list(&value);
        }
        if let Ok(value) = env::var("REKT_TAXONOMY_PATH") {
            self.taxonomy_path = Some(value);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

fn parse_env_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
