//! Impact-to-access ranking for vulnerability records.
//!
//! Scores the categorical impact and access-complexity columns with fixed
//! lookup tables and derives a floating-point sort key per record. Ranking
//! policy is a pure key function handed to the standard library's stable
//! sort; the record type carries no ordering of its own.

use crate::constants::{access_levels, impact_levels};
use crate::models::VulnRecord;
use std::cmp::Ordering;

/// Score an impact category (availability, confidentiality, integrity).
/// Unknown categories score zero.
pub fn impact_score(category: &str) -> u32 {
    match category {
        impact_levels::COMPLETE => 3,
        impact_levels::PARTIAL => 2,
        impact_levels::NONE => 1,
        _ => 0,
    }
}

/// Score an access-complexity category. Unknown categories score zero.
pub fn access_score(category: &str) -> u32 {
    match category {
        access_levels::HIGH => 3,
        access_levels::MEDIUM => 2,
        access_levels::LOW => 1,
        _ => 0,
    }
}

/// Derived sort key: summed impact scores over the access-complexity score.
///
/// A zero access score divides to infinity, or NaN when the impact sum is
/// also zero. Both are valid keys, not errors.
pub fn impact_access_ratio(record: &VulnRecord) -> f64 {
    let impact = impact_score(&record.impact_availability)
        + impact_score(&record.impact_integrity)
        + impact_score(&record.impact_confidentiality);

    f64::from(impact) / f64::from(access_score(&record.access_complexity))
}

/// Stable ascending sort by impact-to-access ratio.
///
/// NaN keys order after every numeric key, so records with an unmapped
/// access category land at the same extreme as the infinite ratios.
pub fn sort_by_ratio(records: &mut [VulnRecord]) {
    records.sort_by(|a, b| compare_ratios(impact_access_ratio(a), impact_access_ratio(b)));
}

fn compare_ratios(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cve_id: &str, avail: &str, conf: &str, integ: &str, complexity: &str) -> VulnRecord {
        VulnRecord {
            cve_id: cve_id.to_string(),
            modified_date: String::new(),
            published_date: String::new(),
            cvss_score: String::new(),
            cwe_code: String::new(),
            cwe_name: String::new(),
            summary: String::new(),
            access_authentication: String::new(),
            access_complexity: complexity.to_string(),
            access_vector: String::new(),
            impact_availability: avail.to_string(),
            impact_confidentiality: conf.to_string(),
            impact_integrity: integ.to_string(),
        }
    }

    #[test]
    fn test_impact_score_mapping() {
        assert_eq!(impact_score("COMPLETE"), 3);
        assert_eq!(impact_score("PARTIAL"), 2);
        assert_eq!(impact_score("NONE"), 1);
        assert_eq!(impact_score("UNKNOWN"), 0);
        assert_eq!(impact_score(""), 0);
    }

    #[test]
    fn test_access_score_mapping() {
        assert_eq!(access_score("HIGH"), 3);
        assert_eq!(access_score("MEDIUM"), 2);
        assert_eq!(access_score("LOW"), 1);
        assert_eq!(access_score(""), 0);
    }

    #[test]
    fn test_ratio_computation() {
        let r = record("CVE-1", "COMPLETE", "PARTIAL", "NONE", "MEDIUM");
        assert_eq!(impact_access_ratio(&r), 3.0);
    }

    #[test]
    fn test_zero_access_divides_to_infinity() {
        let r = record("CVE-1", "COMPLETE", "NONE", "NONE", "UNMAPPED");
        assert_eq!(impact_access_ratio(&r), f64::INFINITY);
    }

    #[test]
    fn test_zero_over_zero_is_nan() {
        let r = record("CVE-1", "X", "X", "X", "X");
        assert!(impact_access_ratio(&r).is_nan());
    }

    #[test]
    fn test_sort_is_stable_and_total() {
        // Ratios 2.0, 1.0, 1.0, inf; the two 1.0 records must keep their
        // relative input order.
        let mut records = vec![
            record("CVE-A", "PARTIAL", "PARTIAL", "PARTIAL", "HIGH"), // 6/3 = 2.0
            record("CVE-B", "NONE", "NONE", "NONE", "HIGH"),          // 3/3 = 1.0
            record("CVE-C", "PARTIAL", "NONE", "X", "HIGH"),          // 3/3 = 1.0
            record("CVE-D", "COMPLETE", "NONE", "NONE", "X"),         // 5/0 = inf
        ];

        sort_by_ratio(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.cve_id.as_str()).collect();
        assert_eq!(order, vec!["CVE-B", "CVE-C", "CVE-A", "CVE-D"]);
    }

    #[test]
    fn test_nan_sorts_to_the_top_extreme() {
        let mut records = vec![
            record("CVE-NAN", "X", "X", "X", "X"),              // 0/0 = NaN
            record("CVE-INF", "NONE", "NONE", "NONE", "X"),     // 3/0 = inf
            record("CVE-LOW", "NONE", "NONE", "NONE", "HIGH"),  // 1.0
        ];

        sort_by_ratio(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.cve_id.as_str()).collect();
        assert_eq!(order, vec!["CVE-LOW", "CVE-INF", "CVE-NAN"]);
    }
}
