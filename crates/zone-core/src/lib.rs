// ABOUTME: Core zone-classification crate for the ANT+ zone display
// ABOUTME: Validated zone configurations and stateless reading classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Zone Core
//!
//! Foundation crate for mapping power and heart rate readings onto named training zones.
//! It performs no I/O: configuration is handed in as plain numbers and labels, validated
//! once by [`ZoneConfig::build`], and then queried through [`ZoneClassifier::classify`].
//!
//! ## Modules
//!
//! - **errors**: `ConfigValidationError` raised when zone boundaries are malformed
//! - **metric**: the two classified metrics (power, heart rate) and their default labels
//! - **boundary**: a single labeled lower bound
//! - **config**: validated, immutable zone configuration
//! - **classifier**: reading lookup returning a `ZoneResult`
//! - **constants**: reference zone profiles (`TrainerRoad` power, Training Peaks heart rate)
//!
//! ## Example
//!
//! ```rust
//! use zone_core::{Metric, ZoneClassifier, ZoneConfig};
//!
//! let config = ZoneConfig::build(
//!     Metric::Power,
//!     &[0.0, 146.0, 202.0, 234.0, 253.0, 282.0, 322.0, 3000.0],
//!     &Metric::Power.default_labels(),
//!     266.0,
//! )?;
//! let classifier = ZoneClassifier::new(&config);
//! assert_eq!(classifier.classify(250.0).label, "Tempo");
//! # Ok::<(), zone_core::ConfigValidationError>(())
//! ```

/// Zone configuration validation errors
pub mod errors;

/// Classified metrics and their default zone labels
pub mod metric;

/// Labeled zone lower bound
pub mod boundary;

/// Validated zone configuration
pub mod config;

/// Stateless reading classification
pub mod classifier;

/// Reference zone profiles and label tables
pub mod constants;

pub use boundary::ZoneBoundary;
pub use classifier::{OwnedZoneResult, ZoneClassifier, ZoneResult};
pub use config::ZoneConfig;
pub use errors::ConfigValidationError;
pub use metric::Metric;
