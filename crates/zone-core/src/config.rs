// ABOUTME: Validated, immutable zone configuration for one metric
// ABOUTME: Pairs thresholds with labels and enforces ordering and shape invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Zone configuration construction.
//!
//! A [`ZoneConfig`] is built exactly once from configuration input and is never mutated
//! afterwards. Every invariant the classifier relies on is checked here:
//!
//! - at least one threshold
//! - as many labels as thresholds
//! - every threshold finite
//! - the first threshold is 0
//! - thresholds strictly increase
//! - the reference value (FTP / threshold heart rate) is positive

use crate::boundary::ZoneBoundary;
use crate::errors::ConfigValidationError;
use crate::metric::Metric;
use serde::Serialize;
use tracing::debug;

/// Ordered, validated zone boundaries for a single metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneConfig {
    metric: Metric,
    reference_value: f64,
    boundaries: Vec<ZoneBoundary>,
}

impl ZoneConfig {
    /// Build a zone configuration from parallel threshold and label lists
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` when the thresholds are empty, the list lengths
    /// differ, a threshold is not finite, the first threshold is not 0, the thresholds
    /// are not strictly increasing, or the reference value is not positive.
    pub fn build<S: AsRef<str>>(
        metric: Metric,
        thresholds: &[f64],
        labels: &[S],
        reference_value: f64,
    ) -> Result<Self, ConfigValidationError> {
        let Some(&first) = thresholds.first() else {
            return Err(ConfigValidationError::Empty);
        };

        if thresholds.len() != labels.len() {
            return Err(ConfigValidationError::LengthMismatch {
                thresholds: thresholds.len(),
                labels: labels.len(),
            });
        }

        if let Some(index) = thresholds.iter().position(|value| !value.is_finite()) {
            return Err(ConfigValidationError::NonFinite { index });
        }

        if first != 0.0 {
            return Err(ConfigValidationError::MissingZeroStart { first });
        }

        for (offset, pair) in thresholds.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ConfigValidationError::NotIncreasing {
                    index: offset + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        if !reference_value.is_finite() || reference_value <= 0.0 {
            return Err(ConfigValidationError::InvalidReference {
                value: reference_value,
            });
        }

        let boundaries: Vec<ZoneBoundary> = thresholds
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(index, (&lower_bound, label))| ZoneBoundary {
                lower_bound,
                label: label.as_ref().to_owned(),
                index,
            })
            .collect();

        debug!(
            metric = %metric,
            zones = boundaries.len(),
            reference_value,
            "zone configuration built"
        );

        Ok(Self {
            metric,
            reference_value,
            boundaries,
        })
    }

    /// Metric these zones classify
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// FTP for power zones, threshold heart rate for heart rate zones
    #[must_use]
    pub const fn reference_value(&self) -> f64 {
        self.reference_value
    }

    /// Boundaries in ascending order
    #[must_use]
    pub fn boundaries(&self) -> &[ZoneBoundary] {
        &self.boundaries
    }

    /// Boundary at `index`, if any
    #[must_use]
    pub fn boundary(&self, index: usize) -> Option<&ZoneBoundary> {
        self.boundaries.get(index)
    }

    /// Lower bounds in ascending order
    pub fn thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        self.boundaries.iter().map(|boundary| boundary.lower_bound)
    }

    /// Number of zones
    #[must_use]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Always false for a successfully built configuration
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Index of the open-ended top zone
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }
}
