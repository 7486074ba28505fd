// ABOUTME: Metric definitions for zone classification (power and heart rate)
// ABOUTME: Provides units, reference-value names and default positional labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::labels;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sensor metric a zone configuration applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Cycling power in watts
    Power,
    /// Heart rate in beats per minute
    HeartRate,
}

impl Metric {
    /// Unit suffix used when displaying readings
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Power => "W",
            Self::HeartRate => "bpm",
        }
    }

    /// Name of the reference value zones are derived from
    #[must_use]
    pub const fn reference_name(self) -> &'static str {
        match self {
            Self::Power => "ftp",
            Self::HeartRate => "threshold",
        }
    }

    /// Default zone labels, in threshold order
    ///
    /// The deployed configuration only documents labels as comments next to each
    /// threshold, so these tables carry the positional pairing.
    #[must_use]
    pub fn default_labels(self) -> Vec<String> {
        let table: &[&str] = match self {
            Self::Power => &labels::POWER,
            Self::HeartRate => &labels::HEART_RATE,
        };
        table.iter().map(|label| (*label).to_owned()).collect()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power => write!(f, "power"),
            Self::HeartRate => write!(f, "heart rate"),
        }
    }
}
