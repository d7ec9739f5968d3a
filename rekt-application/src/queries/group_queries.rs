use crate::queries::incident_queries::fetch_incidents;
use crate::AppError;
use crate::AppState;
use rekt_domain::{breakdown, normalize_categories, GroupBreakdown, GroupField, GroupQuery};

pub async fn group_incidents(state: &AppState, query: GroupQuery) -> Result<GroupBreakdown, AppError> {
    // Reject missing or unknown fields before touching the network.
    let field: GroupField = query
        .field
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("field is required".to_string()))?
        .parse()?;
    let mut incidents = fetch_incidents(state, query.limit).await?;
    if field == GroupField::UpperCategory {
        normalize_categories(&mut incidents, &state.config.taxonomy);
    }
    Ok(breakdown(&incidents, field)?)
}
