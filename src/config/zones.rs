// ABOUTME: Zone sections of the settings file and the validated profiles built from them
// ABOUTME: Reifies the positional threshold/label pairing before handing it to zone-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use zone_core::{Metric, ZoneClassifier, ZoneConfig};

/// One zone definition (`POWER` or `HEART RATE` section)
///
/// The reference key depends on the section: `ftp` under `POWER`, `threshold` under
/// `HEART RATE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneSection {
    /// Functional threshold power (`POWER` section)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ftp: Option<f64>,
    /// Threshold heart rate (`HEART RATE` section)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Zone lower bounds, first 0, strictly increasing
    pub zones: Vec<f64>,
    /// Explicit labels; the metric's default labels are used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl ZoneSection {
    /// Reference value under the key expected for `metric`
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error when the key is missing or the other metric's key is used
    pub fn reference(&self, metric: Metric) -> AppResult<f64> {
        let (own, foreign, foreign_key) = match metric {
            Metric::Power => (self.ftp, self.threshold, Metric::HeartRate.reference_name()),
            Metric::HeartRate => (self.threshold, self.ftp, Metric::Power.reference_name()),
        };
        let key = metric.reference_name();

        if foreign.is_some() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{metric} section uses '{foreign_key}', expected '{key}'"),
            ));
        }

        own.ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{metric} section is missing '{key}'"),
            )
        })
    }

    /// Validate this section into a [`ZoneConfig`]
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error naming the metric and the violated constraint
    pub fn to_zone_config(&self, metric: Metric) -> AppResult<ZoneConfig> {
        let reference = self.reference(metric)?;
        let labels = self
            .labels
            .clone()
            .unwrap_or_else(|| metric.default_labels());

        ZoneConfig::build(metric, &self.zones, &labels, reference)
            .map_err(|e| AppError::zone_validation(metric, e))
    }
}

/// Both validated zone configurations, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneProfiles {
    /// Power zones
    pub power: ZoneConfig,
    /// Heart rate zones
    pub heart_rate: ZoneConfig,
}

impl ZoneProfiles {
    /// Zone configuration for `metric`
    #[must_use]
    pub const fn get(&self, metric: Metric) -> &ZoneConfig {
        match metric {
            Metric::Power => &self.power,
            Metric::HeartRate => &self.heart_rate,
        }
    }

    /// Classifier borrowing the configuration for `metric`
    #[must_use]
    pub const fn classifier(&self, metric: Metric) -> ZoneClassifier<'_> {
        ZoneClassifier::new(self.get(metric))
    }
}
