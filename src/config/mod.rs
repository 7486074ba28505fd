// ABOUTME: Configuration module for the ANT+ zone display
// ABOUTME: YAML device/zone settings with environment overrides and validated zone profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Device**: ANT stick and LED strip parameters passed through to collaborators
//! - **Zones**: per-metric zone sections and the validated [`ZoneProfiles`] built from them
//! - **Settings**: the top-level YAML document, file loading and environment overrides

/// ANT stick and LED strip parameters
pub mod device;
/// Top-level settings document and loading
pub mod settings;
/// Zone sections and validated zone profiles
pub mod zones;

pub use device::AntSettings;
pub use settings::DisplaySettings;
pub use zones::{ZoneProfiles, ZoneSection};
