// ABOUTME: Stateless classification of readings against a zone configuration
// ABOUTME: Inclusive-lower / exclusive-upper lookup with clamping at both ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Zone lookup.
//!
//! Zones are contiguous half-open ranges `[thresholds[i], thresholds[i + 1])`; the last zone
//! is open-ended. Readings below 0 (and NaN) resolve to zone 0 and readings above the last
//! threshold resolve to the last zone, so classification is total.

use crate::config::ZoneConfig;
use serde::Serialize;

/// Outcome of classifying a single reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneResult<'a> {
    /// 0-based zone index
    pub index: usize,
    /// Zone label
    pub label: &'a str,
    /// Inclusive lower bound of the matched zone
    pub lower_bound: f64,
    /// Lower bound of the next zone, `None` for the open-ended last zone
    pub next_bound: Option<f64>,
}

impl ZoneResult<'_> {
    /// Whether this is the open-ended top zone
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.next_bound.is_none()
    }

    /// Detach the result from the configuration it borrows from
    #[must_use]
    pub fn into_owned(self) -> OwnedZoneResult {
        OwnedZoneResult {
            index: self.index,
            label: self.label.to_owned(),
            lower_bound: self.lower_bound,
            next_bound: self.next_bound,
        }
    }
}

/// [`ZoneResult`] with an owned label, for handing to collaborators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedZoneResult {
    /// 0-based zone index
    pub index: usize,
    /// Zone label
    pub label: String,
    /// Inclusive lower bound of the matched zone
    pub lower_bound: f64,
    /// Lower bound of the next zone, `None` for the open-ended last zone
    pub next_bound: Option<f64>,
}

/// Maps readings to zones of a borrowed [`ZoneConfig`]
#[derive(Debug, Clone, Copy)]
pub struct ZoneClassifier<'a> {
    config: &'a ZoneConfig,
}

impl<'a> ZoneClassifier<'a> {
    /// Create a classifier over `config`
    #[must_use]
    pub const fn new(config: &'a ZoneConfig) -> Self {
        Self { config }
    }

    /// Configuration this classifier reads from
    #[must_use]
    pub const fn config(&self) -> &'a ZoneConfig {
        self.config
    }

    /// Index of the zone containing `reading`
    ///
    /// Greatest `i` with `thresholds[i] <= reading`, clamped to 0 when no threshold qualifies.
    #[must_use]
    pub fn zone_index(&self, reading: f64) -> usize {
        self.config
            .boundaries()
            .partition_point(|boundary| boundary.lower_bound <= reading)
            .saturating_sub(1)
    }

    /// Classify a reading
    #[must_use]
    pub fn classify(&self, reading: f64) -> ZoneResult<'a> {
        let boundaries = self.config.boundaries();
        let index = self.zone_index(reading);
        let current = &boundaries[index];

        ZoneResult {
            index,
            label: &current.label,
            lower_bound: current.lower_bound,
            next_bound: boundaries.get(index + 1).map(|next| next.lower_bound),
        }
    }
}
