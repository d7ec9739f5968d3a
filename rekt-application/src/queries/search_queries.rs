use tracing::error;

use crate::queries::incident_queries::resolve_limit;
use crate::AppError;
use crate::AppState;
use rekt_domain::{collect_search, Incident, SearchQuery};

/// Walks the `searchText` listing with the configured page size.
pub async fn search_incidents(state: &AppState, query: SearchQuery) -> Result<Vec<Incident>, AppError> {
    let text = query.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("text is empty".to_string()));
    }
    let limit = resolve_limit(&state.config, query.limit)?;
    match collect_search(state.source.as_ref(), text, state.config.page_size, limit).await {
        Ok(incidents) => {
            state.metrics.record_fetch(incidents.len());
            Ok(incidents)
        }
        Err(err) => {
            state.metrics.record_fetch_error();
            error!("failed to search rekts: {}", err);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{raw, scenario, state_with, FakeSource};

    #[tokio::test]
    async fn finds_matching_projects() {
        let (state, _) = state_with(FakeSource::new(scenario()));
        let found = search_incidents(
            &state,
            SearchQuery {
                text: " gamma ".to_string(),
                limit: None,
            },
        )
        .await
        .expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].project_name, "Gamma");
    }

    #[tokio::test]
    async fn pages_with_configured_size_and_drops_repeated_ids() {
        let records = vec![
            raw(1, "Terra", "2022-05-09", "Depeg", Some("Stablecoin"), "100", "0"),
            raw(1, "Terra", "2022-05-09", "Depeg", Some("Stablecoin"), "100", "0"),
            raw(2, "Terra Classic", "2022-05-12", "Depeg", Some("Stablecoin"), "50", "0"),
        ];
        let (state, source) = state_with(FakeSource::new(records));
        let found = search_incidents(
            &state,
            SearchQuery {
                text: "terra".to_string(),
                limit: Some(1000),
            },
        )
        .await
        .expect("search");

        let ids: Vec<&str> = found.iter().map(|incident| incident.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        // Page size comes from config (2), never from the limit.
        assert_eq!(*source.search_calls.lock().unwrap(), vec![(1, 2), (2, 2)]);
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let (state, source) = state_with(FakeSource::new(scenario()));
        let err = search_incidents(&state, SearchQuery::default()).await.expect_err("blank");
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(source.search_calls.lock().unwrap().is_empty());
    }
}
