use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use rekt_application::queries::{chain_queries, incident_queries, search_queries};
use rekt_application::AppState;
use rekt_domain::{Chain, Incident, IncidentSummary, LimitQuery, SearchQuery};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_incidents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Incident>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let incidents = incident_queries::fetch_incidents(&state, query.limit).await?;
    Ok(Json(incidents))
}

pub async fn list_summaries(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<IncidentSummary>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let summaries = incident_queries::list_summaries(&state, query).await?;
    Ok(Json(summaries))
}

pub async fn search_incidents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Incident>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let incidents = search_queries::search_incidents(&state, query).await?;
    Ok(Json(incidents))
}

pub async fn list_chains(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Chain>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let chains = chain_queries::list_chains(&state).await?;
    Ok(Json(chains))
}
