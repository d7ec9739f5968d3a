use std::collections::BTreeMap;

use crate::entities::{CountStatistic, TrendSummary, YearProjection};
use crate::errors::{RektError, RektResult};
use crate::services::aggregator::count_statistics;

/// Least-squares line through `(year, count)`; returns `(slope, intercept)`.
/// A single year yields a flat line.
pub fn linear_trend(year_counts: &BTreeMap<i32, u64>) -> RektResult<(f64, f64)> {
    if year_counts.is_empty() {
        return Err(RektError::EmptyCollection("year trend"));
    }
    let n = year_counts.len() as f64;
    let mean_x = year_counts.keys().map(|year| f64::from(*year)).sum::<f64>() / n;
    let mean_y = year_counts.values().map(|count| *count as f64).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (year, count) in year_counts {
        let dx = f64::from(*year) - mean_x;
        covariance += dx * (*count as f64 - mean_y);
        variance += dx * dx;
    }
    let slope = if variance == 0.0 { 0.0 } else { covariance / variance };
    Ok((slope, mean_y - slope * mean_x))
}

/// Projects `horizon` years past the last observed year, clamped at zero.
pub fn project(year_counts: &BTreeMap<i32, u64>, horizon: u32) -> RektResult<Vec<YearProjection>> {
    let (slope, intercept) = linear_trend(year_counts)?;
    let last = year_counts
        .keys()
        .next_back()
        .copied()
        .ok_or(RektError::EmptyCollection("year trend"))?;
    Ok((1..=horizon as i32)
        .map(|offset| {
            let year = last + offset;
            YearProjection {
                year,
                count: (slope * f64::from(year) + intercept).max(0.0),
            }
        })
        .collect())
}

pub fn peak_year(year_counts: &BTreeMap<i32, u64>) -> RektResult<CountStatistic> {
    count_statistics(year_counts)
}

pub fn summarize(year_counts: BTreeMap<i32, u64>, horizon: u32) -> RektResult<TrendSummary> {
    let peak = peak_year(&year_counts)?;
    let (slope_per_year, _) = linear_trend(&year_counts)?;
    let projection = project(&year_counts, horizon)?;
    Ok(TrendSummary {
        year_counts,
        peak,
        slope_per_year,
        projection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_of_a_rising_series() {
        let counts = BTreeMap::from([(2020, 10), (2021, 20), (2022, 30)]);
        let (slope, intercept) = linear_trend(&counts).expect("trend");
        assert!((slope - 10.0).abs() < 1e-9);
        assert!((slope * 2021.0 + intercept - 20.0).abs() < 1e-6);
    }

    #[test]
    fn projection_continues_the_line() {
        let counts = BTreeMap::from([(2020, 10), (2021, 20), (2022, 30)]);
        let projection = project(&counts, 2).expect("projection");
        assert_eq!(projection.len(), 2);
        assert_eq!(projection[0].year, 2023);
        assert!((projection[0].count - 40.0).abs() < 1e-6);
        assert!((projection[1].count - 50.0).abs() < 1e-6);
    }

    #[test]
    fn projection_never_goes_negative() {
        let counts = BTreeMap::from([(2020, 30), (2021, 10)]);
        let projection = project(&counts, 3).expect("projection");
        assert!(projection.iter().all(|point| point.count >= 0.0));
        assert_eq!(projection[2].count, 0.0);
    }

    #[test]
    fn single_year_is_flat() {
        let counts = BTreeMap::from([(2022, 7)]);
        let summary = summarize(counts, 1).expect("summary");
        assert_eq!(summary.slope_per_year, 0.0);
        assert_eq!(summary.peak.value, "2022");
        assert!((summary.projection[0].count - 7.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_is_rejected() {
        let counts = BTreeMap::new();
        assert!(matches!(summarize(counts, 1), Err(RektError::EmptyCollection(_))));
    }
}
