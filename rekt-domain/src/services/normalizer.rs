use std::collections::{BTreeMap, BTreeSet};

use similar::TextDiff;
use tracing::debug;

use crate::entities::Incident;
use crate::value_objects::Taxonomy;

/// Character-level similarity in `[0, 1]`, ignoring case.
pub fn similarity(left: &str, right: &str) -> f32 {
    let left = left.trim().to_lowercase();
    let right = right.trim().to_lowercase();
    if left.is_empty() && right.is_empty() {
        return 1.0;
    }
    TextDiff::from_chars(left.as_str(), right.as_str()).ratio()
}

/// Closest taxonomy entry. Always answers; the first entry wins ties.
pub fn closest<'t>(raw: &str, taxonomy: &'t Taxonomy) -> &'t str {
    let mut best: Option<(&str, f32)> = None;
    for entry in taxonomy.entries() {
        let score = similarity(raw, entry);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((entry.as_str(), score));
        }
    }
    best.map(|(entry, _)| entry).unwrap_or_default()
}

/// Maps every distinct raw category onto the taxonomy and stamps the result
/// on each record as `upper_category`. Returns the raw-to-upper mapping.
pub fn normalize_categories(incidents: &mut [Incident], taxonomy: &Taxonomy) -> BTreeMap<String, String> {
    let distinct: BTreeSet<&str> = incidents
        .iter()
        .filter_map(|incident| incident.category.as_deref())
        .collect();
    let mapping: BTreeMap<String, String> = distinct
        .into_iter()
        .map(|raw| (raw.to_string(), closest(raw, taxonomy).to_string()))
        .collect();
    debug!(categories = mapping.len(), "normalized rekt categories");

    for incident in incidents.iter_mut() {
        incident.upper_category = incident
            .category
            .as_ref()
            .and_then(|raw| mapping.get(raw))
            .cloned();
    }
    mapping
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::value_objects::IncidentId;

    fn with_category(id: &str, category: Option<&str>) -> Incident {
        Incident {
            id: IncidentId(id.to_string()),
            project_name: String::new(),
            description: None,
            date: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
            funds_lost: 1.0,
            funds_returned: 0.0,
            category: category.map(ToString::to_string),
            upper_category: None,
            issue_type: None,
            token_name: None,
            chain_ids: Vec::new(),
        }
    }

    #[test]
    fn similarity_is_case_insensitive() {
        assert_eq!(similarity("NFT", "nft"), 1.0);
        assert!(similarity("Dexs", "Dexes") > similarity("Dexs", "Lending"));
    }

    #[test]
    fn closest_picks_best_entry() {
        let taxonomy = Taxonomy::default();
        assert_eq!(closest("Dexs", &taxonomy), "Dexes");
        assert_eq!(closest("lending", &taxonomy), "Lending");
        assert_eq!(closest("Yield Aggregator", &taxonomy), "Yield");
    }

    #[test]
    fn closest_always_answers() {
        let taxonomy = Taxonomy::new(vec!["Bridge".to_string()]).expect("taxonomy");
        assert_eq!(closest("zzzz", &taxonomy), "Bridge");
    }

    #[test]
    fn normalization_stamps_every_record_sharing_a_category() {
        let mut incidents = vec![
            with_category("1", Some("Dexs")),
            with_category("2", Some("lending")),
            with_category("3", Some("Dexs")),
            with_category("4", None),
        ];
        let mapping = normalize_categories(&mut incidents, &Taxonomy::default());

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["Dexs"], "Dexes");
        assert_eq!(incidents[0].upper_category.as_deref(), Some("Dexes"));
        assert_eq!(incidents[2].upper_category.as_deref(), Some("Dexes"));
        assert_eq!(incidents[1].upper_category.as_deref(), Some("Lending"));
        assert!(incidents[3].upper_category.is_none());
    }
}
