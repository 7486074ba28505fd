// ABOUTME: Single labeled zone lower bound
// ABOUTME: Pairs a threshold with its human-readable zone name and ordinal position
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// A zone's lower bound paired with its label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneBoundary {
    /// Inclusive lower bound (watts or bpm)
    pub lower_bound: f64,
    /// Zone name, e.g. "Endurance"
    pub label: String,
    /// 0-based position in the configuration
    pub index: usize,
}
