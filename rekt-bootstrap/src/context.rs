use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use rekt_application::{AppState, Metrics};
use rekt_domain::ports::IncidentSource;
use rekt_domain::{ConfigRepository, Taxonomy};
use rekt_infrastructure::{AppConfig, ConfigFileRepository, DefaultHealthService, GraphqlIncidentSource};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let taxonomy = resolve_taxonomy(&config, &ConfigFileRepository::new()).await?;
        info!(entries = taxonomy.entries().len(), "category taxonomy ready");

        let runtime_config = config.to_runtime_config(taxonomy);
        let source: Arc<dyn IncidentSource> =
            Arc::new(GraphqlIncidentSource::new(&config.to_source_config())?);

        let state = AppState {
            config: runtime_config,
            health: Arc::new(DefaultHealthService::new(source.clone())),
            source,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}

async fn resolve_taxonomy(config: &AppConfig, repo: &dyn ConfigRepository) -> Result<Taxonomy> {
    match &config.taxonomy_path {
        Some(path) => repo
            .load_taxonomy(path)
            .await
            .with_context(|| format!("failed to load taxonomy from {}", path)),
        None => Ok(config.inline_taxonomy()),
    }
}

/// Writes the taxonomy the service would run with to `path` as YAML.
pub(crate) async fn export_taxonomy(
    config: &AppConfig,
    repo: &dyn ConfigRepository,
    path: &str,
) -> Result<Taxonomy> {
    let taxonomy = resolve_taxonomy(config, repo).await?;
    repo.save_taxonomy(path, &taxonomy)
        .await
        .with_context(|| format!("failed to write taxonomy to {}", path))?;
    info!(path, entries = taxonomy.entries().len(), "taxonomy written");
    Ok(taxonomy)
}
