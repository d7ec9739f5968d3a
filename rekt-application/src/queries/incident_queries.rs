use tracing::error;

use crate::AppError;
use crate::AppState;
use rekt_domain::{collect_all, summaries, Incident, IncidentSummary, LimitQuery, RektError, RuntimeConfig};

pub fn resolve_limit(config: &RuntimeConfig, requested: Option<usize>) -> Result<usize, AppError> {
    let limit = requested.unwrap_or(config.default_limit);
    if limit == 0 || limit > config.max_limit {
        return Err(RektError::InvalidLimit {
            limit,
            max: config.max_limit,
        }
        .into());
    }
    Ok(limit)
}

/// Pulls up to `limit` records from the source, sorted ascending by date.
pub async fn fetch_incidents(state: &AppState, limit: Option<usize>) -> Result<Vec<Incident>, AppError> {
    let limit = resolve_limit(&state.config, limit)?;
    match collect_all(state.source.as_ref(), state.config.page_size, limit).await {
        Ok(incidents) => {
            state.metrics.record_fetch(incidents.len());
            Ok(incidents)
        }
        Err(err) => {
            state.metrics.record_fetch_error();
            error!("failed to fetch rekts: {}", err);
            Err(err.into())
        }
    }
}

pub async fn list_summaries(state: &AppState, query: LimitQuery) -> Result<Vec<IncidentSummary>, AppError> {
    let incidents = fetch_incidents(state, query.limit).await?;
    Ok(summaries(&incidents))
}
