// ABOUTME: Validation error types for zone configuration construction
// ABOUTME: Each variant names the boundary constraint that was violated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration validation errors.
//!
//! These are only produced while building a [`crate::ZoneConfig`]. Classification itself
//! never fails, so there is no runtime error type in this crate.

use thiserror::Error;

/// Reasons a zone configuration is rejected at startup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// No thresholds were supplied
    #[error("zone list is empty: at least one threshold is required")]
    Empty,

    /// Threshold and label counts differ
    #[error("wrong length: {thresholds} thresholds but {labels} labels")]
    LengthMismatch {
        /// Number of thresholds supplied
        thresholds: usize,
        /// Number of labels supplied
        labels: usize,
    },

    /// The first threshold is not zero
    #[error("missing zero start: first threshold is {first}, expected 0")]
    MissingZeroStart {
        /// The offending first threshold
        first: f64,
    },

    /// A threshold is not strictly greater than its predecessor
    #[error(
        "non-increasing order: threshold {current} at position {index} is not greater than {previous}"
    )]
    NotIncreasing {
        /// Position of the offending threshold
        index: usize,
        /// Threshold immediately before it
        previous: f64,
        /// The offending threshold
        current: f64,
    },

    /// A threshold is NaN or infinite
    #[error("threshold at position {index} is not a finite number")]
    NonFinite {
        /// Position of the offending threshold
        index: usize,
    },

    /// Reference value (FTP or threshold heart rate) is not a positive finite number
    #[error("reference value must be a positive number, got {value}")]
    InvalidReference {
        /// The offending reference value
        value: f64,
    },
}
