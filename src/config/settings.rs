// ABOUTME: Top-level settings document (ANT, POWER, HEART RATE sections)
// ABOUTME: Loads the YAML file, applies environment overrides and builds zone profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Settings loading.
//!
//! The deployed file keeps the layout of `INPUT_CONSTANTS.yaml`:
//!
//! ```yaml
//! ANT:
//!   SERIAL: /dev/ttyUSB0
//!   NETKEY: B9A521FBBD72C345
//!   LEDS: 30
//!   TIME_DELAY: 10
//!   POWER_AVERAGING: 9
//! POWER:
//!   ftp: 266
//!   zones: [0, 146, 202, 234, 253, 282, 322, 3000]
//! HEART RATE:
//!   threshold: 167
//!   zones: [0, 141, 150, 158, 167, 172, 178, 255]
//! ```

use super::device::AntSettings;
use super::zones::{ZoneProfiles, ZoneSection};
use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};
use zone_core::Metric;

/// Complete device and zone settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Device and session parameters
    #[serde(rename = "ANT")]
    pub ant: AntSettings,
    /// Power zone definition
    #[serde(rename = "POWER")]
    pub power: ZoneSection,
    /// Heart rate zone definition
    #[serde(rename = "HEART RATE")]
    pub heart_rate: ZoneSection,
}

impl DisplaySettings {
    /// Parse settings from YAML text
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_FORMAT` error if the text does not match the settings layout
    pub fn from_yaml_str(text: &str) -> AppResult<Self> {
        serde_yaml::from_str(text).map_err(AppError::config_parse)
    }

    /// Read and parse a settings file
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_MISSING` error if the file cannot be read, or an
    /// `INVALID_FORMAT` error if it cannot be parsed
    pub fn load(path: &Path) -> AppResult<Self> {
        let text =
            fs::read_to_string(path).map_err(|e| AppError::config_missing(path.display(), e))?;
        let settings = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), "settings file loaded");
        Ok(settings)
    }

    /// Settings file path from `ZONE_CONFIG_PATH`, defaulting to `INPUT_CONSTANTS.yaml`
    #[must_use]
    pub fn path_from_env() -> PathBuf {
        env::var(env_vars::CONFIG_PATH)
            .map_or_else(|_| PathBuf::from(defaults::CONFIG_FILE), PathBuf::from)
    }

    /// Load settings from `path` (or the environment-selected path) and apply overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or an override cannot be parsed
    pub fn from_env(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map_or_else(Self::path_from_env, Path::to_path_buf);
        let mut settings = Self::load(&path)?;
        settings.apply_environment_overrides()?;

        info!(
            config.path = %path.display(),
            ant.serial = %settings.ant.serial,
            ant.leds = settings.ant.leds,
            ant.time_delay_secs = settings.ant.time_delay_secs,
            ant.power_averaging_secs = settings.ant.power_averaging_secs,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Apply `ANT_*` environment overrides to the device parameters
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric override cannot be parsed
    pub fn apply_environment_overrides(&mut self) -> AppResult<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric override cannot be parsed
    pub fn apply_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(serial) = lookup(env_vars::ANT_SERIAL) {
            self.ant.serial = serial;
        }
        if let Some(value) = parse_override(&lookup, env_vars::ANT_LEDS)? {
            self.ant.leds = value;
        }
        if let Some(value) = parse_override(&lookup, env_vars::ANT_TIME_DELAY)? {
            self.ant.time_delay_secs = value;
        }
        if let Some(value) = parse_override(&lookup, env_vars::ANT_POWER_AVERAGING)? {
            self.ant.power_averaging_secs = value;
        }
        Ok(())
    }

    /// Section for `metric`
    #[must_use]
    pub const fn section(&self, metric: Metric) -> &ZoneSection {
        match metric {
            Metric::Power => &self.power,
            Metric::HeartRate => &self.heart_rate,
        }
    }

    /// Validate both zone sections
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; power is checked before heart rate
    pub fn zone_profiles(&self) -> AppResult<ZoneProfiles> {
        Ok(ZoneProfiles {
            power: self.power.to_zone_config(Metric::Power)?,
            heart_rate: self.heart_rate.to_zone_config(Metric::HeartRate)?,
        })
    }
}

fn parse_override<T, F>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                AppError::config(format!("environment override {key}={raw} is invalid: {e}"))
            })
        })
        .transpose()
}
