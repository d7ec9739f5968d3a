// Incident entity
// One exploit ("rekt") record as reported by the upstream source

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{RektError, RektResult};
use crate::utils::parse_source_date;
use crate::value_objects::IncidentId;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawToken {
    #[serde(default)]
    pub name: Option<String>,
}

/// Wire shape of a `rekts` entry. Funds arrive as strings or numbers.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawIncident {
    pub id: Value,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub funds_lost: Option<Value>,
    #[serde(default)]
    pub funds_returned: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub chain_ids: Vec<Value>,
    #[serde(default)]
    pub token: Option<RawToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    pub id: IncidentId,
    pub project_name: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub funds_lost: f64,
    pub funds_returned: f64,
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_category: Option<String>,
    pub issue_type: Option<String>,
    pub token_name: Option<String>,
    pub chain_ids: Vec<String>,
}

impl Incident {
    pub fn try_from_raw(raw: RawIncident) -> RektResult<Self> {
        let id = scalar_to_string(&raw.id)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| RektError::malformed("<missing>", "id", &raw.id))?;

        let funds_lost = match raw.funds_lost.as_ref() {
            Some(value) if !value.is_null() => parse_amount(value)
                .ok_or_else(|| RektError::malformed(&id, "fundsLost", value))?,
            _ => return Err(RektError::malformed(&id, "fundsLost", "null")),
        };
        // An unreported return is nothing returned.
        let funds_returned = match raw.funds_returned.as_ref() {
            Some(value) if !value.is_null() => parse_amount(value)
                .ok_or_else(|| RektError::malformed(&id, "fundsReturned", value))?,
            _ => 0.0,
        };

        let raw_date = raw.date.unwrap_or_default();
        let date = parse_source_date(&raw_date)
            .ok_or_else(|| RektError::malformed(&id, "date", &raw_date))?;

        Ok(Self {
            id: IncidentId(id),
            project_name: raw.project_name.unwrap_or_default(),
            description: raw.description,
            date,
            funds_lost,
            funds_returned,
            category: non_blank(raw.category),
            upper_category: None,
            issue_type: non_blank(raw.issue_type),
            token_name: raw.token.and_then(|token| non_blank(token.name)),
            chain_ids: raw.chain_ids.iter().filter_map(scalar_to_string).collect(),
        })
    }
}

fn parse_amount(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawIncident {
        serde_json::from_value(value).expect("raw incident")
    }

    #[test]
    fn parses_string_amounts_and_nested_token() {
        let incident = Incident::try_from_raw(raw(json!({
            "id": 42,
            "projectName": "Ronin",
            "description": "<p>Bridge drained</p>",
            "date": "2022-03-23T00:00:00.000Z",
            "fundsLost": "624000000",
            "fundsReturned": " 30000000.5 ",
            "category": "Bridge",
            "issueType": "Access Control",
            "chainIds": [1, "56"],
            "token": { "name": "RON" }
        })))
        .expect("incident");

        assert_eq!(incident.id.as_str(), "42");
        assert_eq!(incident.funds_lost, 624_000_000.0);
        assert_eq!(incident.funds_returned, 30_000_000.5);
        assert_eq!(incident.token_name.as_deref(), Some("RON"));
        assert_eq!(incident.chain_ids, vec!["1".to_string(), "56".to_string()]);
    }

    #[test]
    fn missing_returned_amount_counts_as_zero() {
        let incident = Incident::try_from_raw(raw(json!({
            "id": "a",
            "date": "2021-01-01",
            "fundsLost": 10,
            "fundsReturned": null
        })))
        .expect("incident");
        assert_eq!(incident.funds_returned, 0.0);
        assert!(incident.category.is_none());
    }

    #[test]
    fn unparseable_amount_is_malformed() {
        let err = Incident::try_from_raw(raw(json!({
            "id": "b",
            "date": "2021-01-01",
            "fundsLost": "about a million"
        })))
        .expect_err("malformed");
        match err {
            RektError::MalformedRecord { id, field, .. } => {
                assert_eq!(id, "b");
                assert_eq!(field, "fundsLost");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_date_is_malformed() {
        let err = Incident::try_from_raw(raw(json!({
            "id": "c",
            "date": "last tuesday",
            "fundsLost": "1"
        })))
        .expect_err("malformed");
        assert!(matches!(err, RektError::MalformedRecord { field: "date", .. }));
    }
}
