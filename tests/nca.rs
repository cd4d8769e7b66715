//! Integration tests for the NCA computational core
//!
//! Exercises the public API: the AUC estimator, the peak finder and the
//! combined summary, including the pinned boundary behaviors.

use approx::assert_relative_eq;
use ncaview::prelude::*;

#[test]
fn symmetric_profile_matches_known_values() {
    let times = [0.0, 1.0, 2.0, 3.0, 4.0];
    let concs = [0.0, 2.0, 4.0, 2.0, 0.0];

    // Two uniform Simpson pairs: (1/3)(0 + 8 + 4) + (1/3)(4 + 8 + 0) = 8
    let auc = auc_simpson(&times, &concs).unwrap();
    assert_relative_eq!(auc, 8.0, max_relative = 1e-12);

    let (cmax, tmax) = cmax_tmax(&times, &concs).unwrap();
    assert_eq!(cmax, 4.0);
    assert_eq!(tmax, 2.0);
}

#[test]
fn irregular_spacing_uses_trapezoid_tail() {
    // Three intervals: Simpson on (0,1,3), trapezoid on (3,4)
    let times = [0.0, 1.0, 3.0, 4.0];
    let concs = [0.0, 2.0, 1.0, 0.0];

    let auc = auc_simpson(&times, &concs).unwrap();
    assert!(auc.is_finite());
    // (3/6)(0 + (9/2)*2 + 1.5*1) + (1+0)/2 = 5.25 + 0.5
    assert_relative_eq!(auc, 5.75, max_relative = 1e-12);
}

#[test]
fn auc_scales_linearly_with_concentration() {
    let times = [0.0, 0.25, 1.0, 2.5, 4.0, 9.0];
    let concs = [0.0, 4.0, 10.0, 6.0, 3.0, 0.5];
    let k = 3.7;
    let scaled: Vec<f64> = concs.iter().map(|c| c * k).collect();

    let base = auc_simpson(&times, &concs).unwrap();
    let scaled_auc = auc_simpson(&times, &scaled).unwrap();
    assert_relative_eq!(scaled_auc, k * base, max_relative = 1e-12);
}

#[test]
fn auc_nonnegative_for_nonnegative_profile() {
    let times = [0.0, 0.5, 1.0, 2.0, 4.0, 8.0, 12.0, 24.0];
    let concs = [0.0, 5.0, 10.0, 8.0, 4.0, 2.0, 1.0, 0.2];
    assert!(auc_simpson(&times, &concs).unwrap() >= 0.0);
}

#[test]
fn tmax_tie_break_takes_earliest() {
    let (cmax, tmax) = cmax_tmax(&[0.0, 1.0, 2.0, 3.0], &[1.0, 5.0, 5.0, 2.0]).unwrap();
    assert_eq!(cmax, 5.0);
    assert_eq!(tmax, 1.0);
}

#[test]
fn single_observation_has_zero_auc() {
    let summary = PkSummary::from_arrays(&[1.5], &[12.0]).unwrap();
    assert_eq!(summary.auc, 0.0);
    assert_eq!(summary.cmax, 12.0);
    assert_eq!(summary.tmax, 1.5);
}

#[test]
fn empty_series_is_rejected_by_peak_finder() {
    let times: [f64; 0] = [];
    let concs: [f64; 0] = [];
    assert!(matches!(
        cmax_tmax(&times, &concs),
        Err(NcaError::InsufficientData { n: 0, .. })
    ));
    // AUC over nothing is the pinned 0.0
    assert_eq!(auc_simpson(&times, &concs).unwrap(), 0.0);
}

#[test]
fn unsorted_time_is_a_visible_error() {
    let result = auc_simpson(&[0.0, 2.0, 1.0, 3.0], &[0.0, 4.0, 2.0, 0.0]);
    assert_eq!(result, Err(NcaError::InvalidTimeSequence));
}

#[test]
fn nan_concentration_propagates_through_auc() {
    let auc = auc_simpson(&[0.0, 1.0, 2.0], &[1.0, f64::NAN, 1.0]).unwrap();
    assert!(auc.is_nan());
}

#[test]
fn profile_validates_and_summarizes() {
    let profile =
        Profile::from_arrays(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 2.0, 4.0, 2.0, 0.0]).unwrap();
    let summary = profile.summary().unwrap();
    assert_relative_eq!(summary.auc, 8.0, max_relative = 1e-12);

    assert!(matches!(
        Profile::from_arrays(&[0.0, 1.0], &[1.0]),
        Err(NcaError::LengthMismatch { .. })
    ));
}

#[test]
fn summary_reports_two_decimal_places() {
    let summary = PkSummary::from_arrays(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 2.0, 4.0, 2.0, 0.0])
        .unwrap();
    let report = summary.to_string();
    assert!(report.contains("AUC"));
    assert!(report.contains("8.00"));
    assert!(report.contains("Cmax"));
    assert!(report.contains("4.00"));
    assert!(report.contains("Tmax"));
    assert!(report.contains("2.00"));
}
