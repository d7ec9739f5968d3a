use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use rekt_application::queries::{dashboard_queries, group_queries, trend_queries};
use rekt_application::AppState;
use rekt_domain::{DashboardSummary, GroupBreakdown, GroupQuery, LimitQuery, TrendQuery, TrendSummary};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LimitQuery>,
) -> Result<Json<DashboardSummary>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let dashboard = dashboard_queries::build_dashboard(&state, query).await?;
    Ok(Json(dashboard))
}

pub async fn group_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<GroupQuery>,
) -> Result<Json<GroupBreakdown>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let breakdown = group_queries::group_incidents(&state, query).await?;
    Ok(Json(breakdown))
}

pub async fn trend_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TrendQuery>,
) -> Result<Json<TrendSummary>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let trend = trend_queries::year_trend(&state, query).await?;
    Ok(Json(trend))
}
