//! End-to-end checks of the calculator against brute-force recomputation.

use approx::assert_relative_eq;
use divider_calc::divider::{current_ma, vout};
use divider_calc::*;

fn small_calc() -> DividerCalc {
    DividerCalc::new(ResistorCatalog::new(vec![1.0, 2.0, 4.7]).unwrap())
}

#[test]
fn test_best_pair_matches_brute_force() {
    let spec = DividerSpec::new(3.3, 1.0, None).unwrap();
    let calc = small_calc();
    let res = calc.best_pair(&spec);
    assert_eq!(res.achievable.len(), 9);

    let values = calc.catalog().values();
    let mut expected: Option<(f64, f64, f64)> = None;
    for &r1 in values {
        for &r2 in values {
            let err = (vout(3.3, r1, r2) - 1.0).abs();
            match expected {
                Some((e, a, b)) if e < err || (e == err && a + b <= r1 + r2) => {}
                _ => expected = Some((err, r1, r2)),
            }
        }
    }
    let (err, r1, r2) = expected.unwrap();
    let best = res.best.unwrap();
    assert_eq!((best.r1, best.r2), (r1, r2));
    assert_relative_eq!(best.error, err);
    assert_relative_eq!(best.current_ma, current_ma(3.3, r1, r2));
}

#[test]
fn test_exact_partner_for_known_r1() {
    let spec = DividerSpec::new(3.3, 1.0, None).unwrap();
    let suggestions = small_calc().suggestions(&spec);
    let s = suggestions
        .iter()
        .find(|s| s.known == Role::R1 && s.r1 == 2.0)
        .unwrap();
    assert_relative_eq!(s.r2, 2.0 * 1.0 / (3.3 - 1.0));
    assert_relative_eq!(s.r2, 0.870, epsilon = 5e-4);
    assert_relative_eq!(vout(3.3, s.r1, s.r2), 1.0, max_relative = 1e-9);
}

#[test]
fn test_e24_search_hits_common_ratio() {
    // 4K7 over 9K1 gives 3.2971 V; every decade of that ratio ties, and the cap
    // rules out 47R / 91R, so the smallest allowed sum is 470R / 910R
    let spec = DividerSpec::new(5.0, 3.3, Some(5000.0)).unwrap();
    let report = DividerCalc::series(&E24).calc(&spec);
    let best = report.best.unwrap();
    assert_relative_eq!(best.error, 0.1 / 69.0 * 2.0, max_relative = 1e-9);
    assert_relative_eq!(best.r1, 0.47, max_relative = 1e-12);
    assert_relative_eq!(best.r2, 0.91, max_relative = 1e-12);
    assert!(best.current_ma <= 5000.0);
    assert_eq!(
        report.advisory,
        Some(Advisory::InputAboveThreshold {
            vin: 5.0,
            threshold: DEFAULT_ADVISORY_THRESHOLD
        })
    );
    assert!(report.table.omitted() > 0);
}

#[test]
fn test_custom_threshold_silences_advisory() {
    let spec = DividerSpec::new(5.0, 2.5, None).unwrap();
    let calc = small_calc().with_advisory_threshold(12.0).unwrap();
    assert!(calc.calc(&spec).advisory.is_none());
    let calc = small_calc().without_advisory();
    assert!(calc.calc(&spec).advisory.is_none());
}

#[test]
fn test_degenerate_target_reports_no_suggestions() {
    let spec = DividerSpec::new(3.3, 0.0, None).unwrap();
    let report = small_calc().calc(&spec);
    assert!(report.suggestions.is_empty());
    // nothing reaches 0 V but nothing overshoots it either
    assert!(report.table.is_empty());
    assert!(report.best.is_some());
}
