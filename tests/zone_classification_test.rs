// ABOUTME: Property-style integration tests for zone classification
// ABOUTME: Bounds, monotonicity, boundary exactness and clamping over both reference profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use ant_zone_display::config::DisplaySettings;
use ant_zone_display::{Metric, ZoneClassifier, ZoneConfig};
use common::{reference_profiles, LABELLED_SETTINGS};
use std::thread;

/// Readings from -50 to just past each sentinel in quarter steps
fn sweep(config: &ZoneConfig) -> Vec<f64> {
    let top = config.thresholds().last().unwrap() + 50.0;
    let steps = ((top + 50.0) * 4.0) as usize;
    (0..=steps).map(|step| step as f64 / 4.0 - 50.0).collect()
}

fn for_each_profile(check: impl Fn(&ZoneConfig)) {
    let profiles = reference_profiles();
    check(&profiles.power);
    check(&profiles.heart_rate);
}

#[test]
fn test_lower_bound_never_exceeds_reading() {
    for_each_profile(|config| {
        let classifier = ZoneClassifier::new(config);
        for reading in sweep(config).into_iter().filter(|r| *r >= 0.0) {
            let result = classifier.classify(reading);
            assert!(result.lower_bound <= reading, "{reading}");
            if result.index < config.last_index() {
                assert!(reading < result.next_bound.unwrap(), "{reading}");
            } else {
                assert!(result.next_bound.is_none());
            }
        }
    });
}

#[test]
fn test_classification_is_monotonic() {
    for_each_profile(|config| {
        let classifier = ZoneClassifier::new(config);
        let indices: Vec<usize> = sweep(config)
            .into_iter()
            .map(|reading| classifier.classify(reading).index)
            .collect();
        assert!(indices.windows(2).all(|pair| pair[0] <= pair[1]));
    });
}

#[test]
fn test_classification_is_idempotent() {
    for_each_profile(|config| {
        let classifier = ZoneClassifier::new(config);
        for reading in [-3.0, 0.0, 141.0, 199.5, 3000.0, 1e6] {
            assert_eq!(classifier.classify(reading), classifier.classify(reading));
        }
    });
}

#[test]
fn test_each_threshold_opens_its_zone() {
    for_each_profile(|config| {
        let classifier = ZoneClassifier::new(config);
        for boundary in config.boundaries() {
            let result = classifier.classify(boundary.lower_bound);
            assert_eq!(result.index, boundary.index);
            assert_eq!(result.label, boundary.label);
        }
    });
}

#[test]
fn test_clamping_at_both_ends() {
    for_each_profile(|config| {
        let classifier = ZoneClassifier::new(config);
        assert_eq!(classifier.classify(-5.0).index, 0);
        assert_eq!(classifier.classify(100_000.0).index, config.last_index());
    });
}

#[test]
fn test_power_scenarios_from_settings() {
    let settings = DisplaySettings::from_yaml_str(LABELLED_SETTINGS).unwrap();
    let profiles = settings.zone_profiles().unwrap();
    let classifier = profiles.classifier(Metric::Power);

    let expected = [
        (0.0, 0, "Coasting"),
        (145.0, 0, "Coasting"),
        (146.0, 1, "Active"),
        (250.0, 3, "Tempo"),
        (5000.0, 7, "Anaerobic"),
        (-10.0, 0, "Coasting"),
    ];
    for (reading, index, label) in expected {
        let result = classifier.classify(reading);
        assert_eq!((result.index, result.label), (index, label), "{reading}");
    }
}

#[test]
fn test_heart_rate_scenarios() {
    let profiles = reference_profiles();
    let classifier = profiles.classifier(Metric::HeartRate);

    assert_eq!(classifier.classify(60.0).label, "Recovery");
    assert_eq!(classifier.classify(155.0).label, "Tempo");
    assert_eq!(classifier.classify(167.0).label, "SuperThreshold");
    assert_eq!(classifier.classify(190.0).label, "Anaerobic Capacity");
    assert_eq!(classifier.classify(255.0).label, "Maximum");
}

#[test]
fn test_classifier_shared_across_threads() {
    let profiles = reference_profiles();
    let classifier = profiles.classifier(Metric::Power);
    let expected: Vec<usize> = (0..400).map(|w| classifier.zone_index(f64::from(w))).collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let seen: Vec<usize> = (0..400)
                    .map(|w| classifier.zone_index(f64::from(w)))
                    .collect();
                assert_eq!(seen, expected);
            });
        }
    });
}
