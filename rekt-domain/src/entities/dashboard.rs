// Aggregated views handed to the rendering layer

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::GroupField;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct FundsMean {
    pub funds_lost: f64,
    pub funds_returned: f64,
}

/// The most common value of a grouping and its share of all records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountStatistic {
    pub value: String,
    pub count: u64,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatioExtreme {
    pub group: String,
    pub ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatioExtremes {
    pub least_returned: RatioExtreme,
    pub most_returned: RatioExtreme,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MostVulnerable {
    pub group: String,
    pub mean_funds_lost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupBreakdown {
    pub field: GroupField,
    pub total: u64,
    pub counts: BTreeMap<String, u64>,
    pub means: BTreeMap<String, FundsMean>,
    pub main: CountStatistic,
    pub most_vulnerable: MostVulnerable,
    pub return_ratios: RatioExtremes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearProjection {
    pub year: i32,
    pub count: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendSummary {
    pub year_counts: BTreeMap<i32, u64>,
    pub peak: CountStatistic,
    pub slope_per_year: f64,
    pub projection: Vec<YearProjection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub fetched_at: chrono::DateTime<chrono::Utc>,
    pub total: u64,
    pub overall_mean: FundsMean,
    pub issue_type: GroupBreakdown,
    pub category: GroupBreakdown,
    pub upper_category: GroupBreakdown,
    pub category_mapping: BTreeMap<String, String>,
    pub year_counts: BTreeMap<i32, u64>,
    pub peak_year: CountStatistic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncidentSummary {
    pub id: String,
    pub project_name: String,
    pub text: String,
}
