//! Property tests for band thresholds, bounded traits and catalog draws.

use proptest::prelude::*;
use workforce_model::{
    AcademicBackground, Catalog, Department, DepartmentMetrics, PercentileBand, PerformanceLevel, PerformanceRecord,
    TraitScore,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn extreme_percentiles_force_labels(p in 0.0f64..100.0) {
        let band = PercentileBand::from_percentile(p);
        if p < 15.0 {
            prop_assert_eq!(band.forced_level(), Some(PerformanceLevel::Low));
        } else if p > 85.0 {
            prop_assert_eq!(band.forced_level(), Some(PerformanceLevel::High));
        } else {
            prop_assert_eq!(band, PercentileBand::Mid70);
        }
        prop_assert_eq!(band.label().parse::<PercentileBand>(), Ok(band));
    }

    #[test]
    fn composite_between_facets_is_bounded(a in 0u8..=100, b in 0u8..=100, t in 0.0f64..=1.0) {
        let (lo, hi) = (a.min(b), a.max(b));
        let composite = lo + ((hi - lo) as f64 * t).floor() as u8;
        let score = TraitScore { facet_a: a, facet_b: b, composite };
        prop_assert!(score.is_bounded());
        if hi < 100 {
            let above = TraitScore { composite: hi + 1, ..score };
            prop_assert!(!above.is_bounded());
        }
    }

    #[test]
    fn promotions_track_loyalty(loyalty in 0u32..60) {
        let p = PerformanceRecord::promotions_for(loyalty);
        prop_assert!(p * 4 <= loyalty && loyalty < (p + 1) * 4);
    }

    #[test]
    fn background_index_is_clamped(i in any::<usize>()) {
        let bg = Catalog::background_at(i);
        prop_assert!(AcademicBackground::ALL.contains(&bg));
    }
}

#[test]
fn typo_columns_are_a_subset_of_metric_columns() {
    for dept in Department::ALL {
        let all = DepartmentMetrics::columns(dept);
        for c in DepartmentMetrics::typo_columns(dept) {
            assert!(all.contains(c), "{dept}: {c}");
        }
    }
}
