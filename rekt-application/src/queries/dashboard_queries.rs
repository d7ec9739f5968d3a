use chrono::Utc;
use tracing::info;

use crate::queries::incident_queries::fetch_incidents;
use crate::AppError;
use crate::AppState;
use rekt_domain::{
    breakdown, count_by_year, normalize_categories, overall_mean, peak_year, DashboardSummary, GroupField,
    LimitQuery, RektError,
};

/// One render pass: fetch, normalize categories, aggregate.
///
/// Return ratios are part of every breakdown, so a single group whose mean
/// funds lost is zero makes the whole dashboard `Unprocessable` rather than
/// rendering a partial view.
pub async fn build_dashboard(state: &AppState, query: LimitQuery) -> Result<DashboardSummary, AppError> {
    let mut incidents = fetch_incidents(state, query.limit).await?;
    if incidents.is_empty() {
        return Err(RektError::EmptyCollection("dashboard").into());
    }
    let category_mapping = normalize_categories(&mut incidents, &state.config.taxonomy);

    let year_counts = count_by_year(&incidents)?;
    let summary = DashboardSummary {
        fetched_at: Utc::now(),
        total: incidents.len() as u64,
        overall_mean: overall_mean(&incidents)?,
        issue_type: breakdown(&incidents, GroupField::IssueType)?,
        category: breakdown(&incidents, GroupField::Category)?,
        upper_category: breakdown(&incidents, GroupField::UpperCategory)?,
        category_mapping,
        peak_year: peak_year(&year_counts)?,
        year_counts,
    };

    state.metrics.record_dashboard();
    info!(
        total = summary.total,
        main_issue = %summary.issue_type.main.value,
        main_category = %summary.category.main.value,
        "dashboard built"
    );
    Ok(summary)
}
