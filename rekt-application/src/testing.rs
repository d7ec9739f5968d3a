use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rekt_domain::ports::{HealthCheckService, IncidentSource};
use rekt_domain::{Chain, RawIncident, RektError, RektResult, RuntimeConfig, Taxonomy};
use serde_json::json;

use crate::{AppState, Metrics};

pub struct FakeSource {
    pub records: Vec<RawIncident>,
    pub failure: Option<RektError>,
    pub calls: Mutex<Vec<(usize, usize)>>,
    pub search_calls: Mutex<Vec<(usize, usize)>>,
}

impl FakeSource {
    pub fn new(records: Vec<RawIncident>) -> Self {
        Self {
            records,
            failure: None,
            calls: Mutex::new(Vec::new()),
            search_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: RektError) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(err),
            calls: Mutex::new(Vec::new()),
            search_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl IncidentSource for FakeSource {
    async fn fetch_page(&self, page_number: usize, page_size: usize) -> RektResult<Vec<RawIncident>> {
        self.calls.lock().unwrap().push((page_number, page_size));
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self
            .records
            .iter()
            .skip((page_number - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect())
    }

    async fn search(&self, text: &str, page_number: usize, page_size: usize) -> RektResult<Vec<RawIncident>> {
        self.search_calls.lock().unwrap().push((page_number, page_size));
        let needle = text.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|raw| {
                raw.project_name
                    .as_deref()
                    .map(|name| name.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .skip((page_number - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect())
    }

    async fn list_chains(&self) -> RektResult<Vec<Chain>> {
        Ok(vec![serde_json::from_value(json!({
            "id": 1,
            "absoluteChainId": "1",
            "abbr": "ETH",
            "name": "Ethereum",
            "type": "evm"
        }))
        .unwrap()])
    }

    async fn ping(&self) -> RektResult<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

struct AlwaysHealthy;

#[async_trait]
impl HealthCheckService for AlwaysHealthy {
    async fn check_source(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub fn raw(id: u32, project: &str, date: &str, issue: &str, category: Option<&str>, lost: &str, returned: &str) -> RawIncident {
    serde_json::from_value(json!({
        "id": id,
        "projectName": project,
        "description": format!("<p>{project} was exploited</p>"),
        "date": date,
        "fundsLost": lost,
        "fundsReturned": returned,
        "category": category,
        "issueType": issue,
        "chainIds": [1],
        "token": { "name": "ETH" }
    }))
    .unwrap()
}

/// Four records: 2021, 2021, 2022, 2023 with issue types A, A, B, A.
pub fn scenario() -> Vec<RawIncident> {
    vec![
        raw(4, "Delta", "2023-04-01T00:00:00.000Z", "A", Some("Lending"), "200", "20"),
        raw(2, "Beta", "2021-09-01T00:00:00.000Z", "A", Some("Dexs"), "300", "0"),
        raw(3, "Gamma", "2022-02-01T00:00:00.000Z", "B", Some("lending"), "50", "50"),
        raw(1, "Alpha", "2021-03-01T00:00:00.000Z", "A", Some("Dexs"), "100", "10"),
    ]
}

pub fn config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: None,
        page_size: 2,
        default_limit: 100,
        max_limit: 1000,
        max_body_bytes: 1024,
        request_timeout_seconds: 5,
        taxonomy: Taxonomy::default(),
    }
}

pub fn state_with(source: FakeSource) -> (AppState, Arc<FakeSource>) {
    let source = Arc::new(source);
    let state = AppState {
        config: config(),
        source: source.clone(),
        health: Arc::new(AlwaysHealthy),
        metrics: Arc::new(Metrics::default()),
    };
    (state, source)
}
