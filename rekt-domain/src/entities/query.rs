// Query parameters accepted by the read endpoints

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GroupQuery {
    pub field: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TrendQuery {
    pub limit: Option<usize>,
    pub horizon: Option<u32>,
}
