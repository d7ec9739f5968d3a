// Read-side use cases. Every query performs a fresh fetch; nothing is cached.

pub mod chain_queries;
pub mod dashboard_queries;
pub mod group_queries;
pub mod incident_queries;
pub mod search_queries;
pub mod trend_queries;
