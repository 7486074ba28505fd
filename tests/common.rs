// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Reference settings documents and zone profile builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ant_zone_display`

use ant_zone_display::config::{DisplaySettings, ZoneProfiles};
use std::io::Write;
use tempfile::NamedTempFile;

/// Settings document matching the deployed layout
pub const REFERENCE_SETTINGS: &str = r"
ANT:
  SERIAL: /dev/ttyUSB0
  NETKEY: B9A521FBBD72C345
  LEDS: 30
  TIME_DELAY: 10
  POWER_AVERAGING: 9
POWER:
  ftp: 266
  zones: [0, 146, 202, 234, 253, 282, 322, 3000]
HEART RATE:
  threshold: 167
  zones: [0, 141, 150, 158, 167, 172, 178, 255]
";

/// Settings with the compact power labels used in the zone scenarios
pub const LABELLED_SETTINGS: &str = r"
ANT:
  SERIAL: /dev/ttyUSB0
  NETKEY: B9A521FBBD72C345
POWER:
  ftp: 266
  zones: [0, 146, 202, 234, 253, 282, 322, 3000]
  labels: [Coasting, Active, Endurance, Tempo, SweetSpot, Threshold, VO2Max, Anaerobic]
HEART RATE:
  threshold: 167
  zones: [0, 141, 150, 158, 167, 172, 178, 255]
";

/// Parse the reference settings
pub fn reference_settings() -> DisplaySettings {
    DisplaySettings::from_yaml_str(REFERENCE_SETTINGS).unwrap()
}

/// Validated zone profiles from the reference settings
pub fn reference_profiles() -> ZoneProfiles {
    reference_settings().zone_profiles().unwrap()
}

/// Write `contents` to a temporary settings file
pub fn write_settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
