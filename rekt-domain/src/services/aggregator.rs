// Group-by statistics over a fetched rekt collection.
//
// Every function takes the raw record slice; aggregated maps are separate
// types and cannot be fed back in. Empty input is an explicit error.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::entities::{
    CountStatistic, FundsMean, GroupBreakdown, Incident, MostVulnerable, RatioExtreme, RatioExtremes,
};
use crate::errors::{RektError, RektResult};
use crate::value_objects::GroupField;

/// Occurrences of each distinct value of `field`.
///
/// Records without a value are counted under `"unknown"`, so the counts
/// always sum to `incidents.len()`.
///
/// Only record collections are accepted:
///
/// ```compile_fail
/// use std::collections::BTreeMap;
/// use rekt_domain::{count_by, GroupField};
///
/// let counts: BTreeMap<String, u64> = BTreeMap::from([("A".to_string(), 3)]);
/// let _ = count_by(&counts, GroupField::IssueType);
/// ```
pub fn count_by(incidents: &[Incident], field: GroupField) -> RektResult<BTreeMap<String, u64>> {
    ensure_not_empty(incidents, "group counts")?;
    let mut counts = BTreeMap::new();
    for incident in incidents {
        *counts.entry(field.key(incident)).or_insert(0) += 1;
    }
    Ok(counts)
}

pub fn mean_by(incidents: &[Incident], field: GroupField) -> RektResult<BTreeMap<String, FundsMean>> {
    ensure_not_empty(incidents, "group means")?;
    let mut sums: BTreeMap<String, (f64, f64, u64)> = BTreeMap::new();
    for incident in incidents {
        let entry = sums.entry(field.key(incident)).or_insert((0.0, 0.0, 0));
        entry.0 += incident.funds_lost;
        entry.1 += incident.funds_returned;
        entry.2 += 1;
    }
    Ok(sums
        .into_iter()
        .map(|(key, (lost, returned, count))| {
            let count = count as f64;
            (
                key,
                FundsMean {
                    funds_lost: lost / count,
                    funds_returned: returned / count,
                },
            )
        })
        .collect())
}

pub fn overall_mean(incidents: &[Incident]) -> RektResult<FundsMean> {
    ensure_not_empty(incidents, "overall mean")?;
    let count = incidents.len() as f64;
    let lost: f64 = incidents.iter().map(|incident| incident.funds_lost).sum();
    let returned: f64 = incidents.iter().map(|incident| incident.funds_returned).sum();
    Ok(FundsMean {
        funds_lost: lost / count,
        funds_returned: returned / count,
    })
}

pub fn count_by_year(incidents: &[Incident]) -> RektResult<BTreeMap<i32, u64>> {
    ensure_not_empty(incidents, "year counts")?;
    let mut counts = BTreeMap::new();
    for incident in incidents {
        *counts.entry(incident.date.year()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Largest count wins; among equal counts the first key in map order wins.
pub fn count_statistics<K: ToString>(counts: &BTreeMap<K, u64>) -> RektResult<CountStatistic> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return Err(RektError::EmptyCollection("count statistics"));
    }
    let mut best: Option<(&K, u64)> = None;
    for (key, &count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    let (key, count) = best.ok_or(RektError::EmptyCollection("count statistics"))?;
    Ok(CountStatistic {
        value: key.to_string(),
        count,
        share: count as f64 / total as f64,
    })
}

/// Mean funds returned over mean funds lost, per group.
pub fn return_ratios(means: &BTreeMap<String, FundsMean>) -> RektResult<BTreeMap<String, f64>> {
    if means.is_empty() {
        return Err(RektError::EmptyCollection("return ratios"));
    }
    means
        .iter()
        .map(|(group, mean)| {
            if mean.funds_lost == 0.0 {
                return Err(RektError::DivisionByZero {
                    group: group.clone(),
                });
            }
            Ok((group.clone(), mean.funds_returned / mean.funds_lost))
        })
        .collect()
}

pub fn ratio_extremes(ratios: &BTreeMap<String, f64>) -> RektResult<RatioExtremes> {
    let mut iter = ratios.iter();
    let (first_group, &first_ratio) = iter.next().ok_or(RektError::EmptyCollection("ratio extremes"))?;
    let mut least = (first_group, first_ratio);
    let mut most = (first_group, first_ratio);
    for (group, &ratio) in iter {
        if ratio < least.1 {
            least = (group, ratio);
        }
        if ratio > most.1 {
            most = (group, ratio);
        }
    }
    Ok(RatioExtremes {
        least_returned: RatioExtreme {
            group: least.0.clone(),
            ratio: least.1,
        },
        most_returned: RatioExtreme {
            group: most.0.clone(),
            ratio: most.1,
        },
    })
}

/// Group with the highest mean funds lost per incident.
pub fn most_vulnerable(means: &BTreeMap<String, FundsMean>) -> RektResult<MostVulnerable> {
    let mut best: Option<(&String, f64)> = None;
    for (group, mean) in means {
        if best.map_or(true, |(_, lost)| mean.funds_lost > lost) {
            best = Some((group, mean.funds_lost));
        }
    }
    let (group, mean_funds_lost) = best.ok_or(RektError::EmptyCollection("most vulnerable group"))?;
    Ok(MostVulnerable {
        group: group.clone(),
        mean_funds_lost,
    })
}

pub fn breakdown(incidents: &[Incident], field: GroupField) -> RektResult<GroupBreakdown> {
    let counts = count_by(incidents, field)?;
    let means = mean_by(incidents, field)?;
    let main = count_statistics(&counts)?;
    let most_vulnerable = most_vulnerable(&means)?;
    let return_ratios = ratio_extremes(&return_ratios(&means)?)?;
    Ok(GroupBreakdown {
        field,
        total: incidents.len() as u64,
        counts,
        means,
        main,
        most_vulnerable,
        return_ratios,
    })
}

fn ensure_not_empty(incidents: &[Incident], what: &'static str) -> RektResult<()> {
    if incidents.is_empty() {
        return Err(RektError::EmptyCollection(what));
    }
    Ok(())
}
