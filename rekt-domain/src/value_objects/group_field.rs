// Group field value object

use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::entities::Incident;
use crate::errors::RektError;

/// Bucket used when a record has no value for the grouped field.
pub const UNKNOWN_GROUP: &str = "unknown";

/// Categorical record fields the aggregator can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    IssueType,
    Category,
    UpperCategory,
    Token,
    Year,
}

impl GroupField {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupField::IssueType => "issue_type",
            GroupField::Category => "category",
            GroupField::UpperCategory => "upper_category",
            GroupField::Token => "token",
            GroupField::Year => "year",
        }
    }

    pub fn key(&self, incident: &Incident) -> String {
        let value = match self {
            GroupField::IssueType => incident.issue_type.as_deref(),
            GroupField::Category => incident.category.as_deref(),
            GroupField::UpperCategory => incident.upper_category.as_deref(),
            GroupField::Token => incident.token_name.as_deref(),
            GroupField::Year => return incident.date.year().to_string(),
        };
        value.unwrap_or(UNKNOWN_GROUP).to_string()
    }
}

impl FromStr for GroupField {
    type Err = RektError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "issue_type" | "issuetype" | "issue" => Ok(GroupField::IssueType),
            "category" => Ok(GroupField::Category),
            "upper_category" | "uppercategory" => Ok(GroupField::UpperCategory),
            "token" | "token_name" | "tokenname" => Ok(GroupField::Token),
            "year" => Ok(GroupField::Year),
            _ => Err(RektError::UnsupportedGroupField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_snake_and_camel_names() {
        assert_eq!("issue_type".parse::<GroupField>(), Ok(GroupField::IssueType));
        assert_eq!("issueType".parse::<GroupField>(), Ok(GroupField::IssueType));
        assert_eq!("upperCategory".parse::<GroupField>(), Ok(GroupField::UpperCategory));
        assert_eq!(" Year ".parse::<GroupField>(), Ok(GroupField::Year));
    }

    #[test]
    fn rejects_aggregate_column_names() {
        for name in ["count", "mean", "fundsLost", ""] {
            let err = name.parse::<GroupField>().expect_err("reject");
            assert_eq!(err, RektError::UnsupportedGroupField(name.to_string()));
        }
    }
}
