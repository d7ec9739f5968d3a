use crate::queries::incident_queries::fetch_incidents;
use crate::AppError;
use crate::AppState;
use rekt_domain::{count_by_year, summarize, TrendQuery, TrendSummary};

const DEFAULT_HORIZON: u32 = 3;
const MAX_HORIZON: u32 = 10;

pub async fn year_trend(state: &AppState, query: TrendQuery) -> Result<TrendSummary, AppError> {
    let horizon = query.horizon.unwrap_or(DEFAULT_HORIZON);
    if horizon > MAX_HORIZON {
        return Err(AppError::BadRequest(format!(
            "horizon must be at most {}",
            MAX_HORIZON
        )));
    }
    let incidents = fetch_incidents(state, query.limit).await?;
    let year_counts = count_by_year(&incidents)?;
    Ok(summarize(year_counts, horizon)?)
}
