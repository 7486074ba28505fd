// ABOUTME: Main library entry point for the ANT+ zone display
// ABOUTME: Settings, logging and the reading pipeline around the zone-core classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # ANT+ Zone Display
//!
//! Turns power meter and heart rate monitor readings into training zones for an LED strip.
//! Zone lookup itself lives in the `zone-core` crate; this crate wires it to the deployed
//! configuration file and to the sensor and display collaborators.
//!
//! ## Architecture
//!
//! - **Config**: `INPUT_CONSTANTS.yaml` device and zone settings with environment overrides
//! - **Smoothing**: moving average over the configured power window
//! - **Selection**: power first, heart rate when power goes quiet
//! - **Monitor**: reading → smoothing → selection → classification → [`monitor::ZoneUpdate`]
//! - **Sink**: output seam to the LED / rendering collaborator
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ant_zone_display::config::DisplaySettings;
//! use ant_zone_display::errors::AppResult;
//! use ant_zone_display::monitor::{Reading, ZoneMonitor};
//! use std::time::Duration;
//!
//! fn main() -> AppResult<()> {
//!     let settings = DisplaySettings::from_env(None)?;
//!     let profiles = settings.zone_profiles()?;
//!     let mut monitor = ZoneMonitor::from_settings(&profiles, &settings.ant);
//!
//!     if let Some(update) = monitor.ingest(Reading::power(250.0, Duration::ZERO)) {
//!         println!("{} -> {}", update.value, update.zone.label);
//!     }
//!     Ok(())
//! }
//! ```

/// Device and zone configuration loading
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling with error codes
pub mod errors;

/// Reading line parsing
pub mod input;

/// Structured logging setup
pub mod logging;

/// Reading pipeline producing zone updates
pub mod monitor;

/// Active input selection between power and heart rate
pub mod selection;

/// Output seam towards the display
pub mod sink;

/// Power smoothing
pub mod smoothing;

pub use zone_core::{Metric, ZoneClassifier, ZoneConfig, ZoneResult};
