use std::sync::Arc;

use async_trait::async_trait;
use rekt_domain::ports::{HealthCheckService, IncidentSource};

pub struct DefaultHealthService {
    source: Arc<dyn IncidentSource>,
}

impl DefaultHealthService {
    pub fn new(source: Arc<dyn IncidentSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_source(&self) -> anyhow::Result<bool> {
        self.source.ping().await.map(|_| true).map_err(Into::into)
    }
}
