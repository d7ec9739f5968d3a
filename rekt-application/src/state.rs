use std::sync::Arc;

use rekt_domain::ports::{HealthCheckService, IncidentSource};
use rekt_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub source: Arc<dyn IncidentSource>,
    pub health: Arc<dyn HealthCheckService>,
    pub metrics: Arc<Metrics>,
}
