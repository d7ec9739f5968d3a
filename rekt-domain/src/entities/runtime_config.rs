use crate::value_objects::Taxonomy;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub page_size: usize,
    pub default_limit: usize,
    pub max_limit: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub taxonomy: Taxonomy,
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub graphql_endpoint: String,
    pub graphql_api_key: String,
    pub request_timeout_seconds: u64,
}
