// ABOUTME: ANT stick and LED strip parameters from the ANT section of the settings file
// ABOUTME: Values are passed through unchanged; the network key can also be decoded to bytes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::ant::NETWORK_KEY_LEN;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn default_leds() -> u32 {
    30
}

const fn default_time_delay() -> u64 {
    10
}

/// Device and session parameters (`ANT` section)
///
/// None of these are interpreted by zone classification; they are handed to the radio,
/// LED and smoothing collaborators as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntSettings {
    /// Serial device of the ANT USB stick, e.g. `/dev/ttyUSB0`
    #[serde(rename = "SERIAL")]
    pub serial: String,
    /// ANT+ network key as a hex string
    #[serde(rename = "NETKEY")]
    pub netkey: String,
    /// Number of LEDs on the strip
    #[serde(rename = "LEDS", default = "default_leds")]
    pub leds: u32,
    /// Seconds without power data before heart rate takes over the display
    #[serde(rename = "TIME_DELAY", default = "default_time_delay")]
    pub time_delay_secs: u64,
    /// Power averaging window in seconds (0 disables smoothing)
    #[serde(rename = "POWER_AVERAGING", default)]
    pub power_averaging_secs: u64,
}

impl AntSettings {
    /// Input-switch delay as a `Duration`
    #[must_use]
    pub const fn time_delay(&self) -> Duration {
        Duration::from_secs(self.time_delay_secs)
    }

    /// Decode the network key into the 8 bytes the ANT stick expects
    ///
    /// Accepts plain hex (`B9A521FBBD72C345`) as well as `0x`-prefixed bytes separated by
    /// commas, colons or whitespace (`0xB9, 0xA5, ...`).
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not valid hex or does not decode to 8 bytes
    pub fn network_key_bytes(&self) -> AppResult<[u8; NETWORK_KEY_LEN]> {
        let compact: String = self
            .netkey
            .replace("0x", "")
            .replace("0X", "")
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != ':')
            .collect();

        let bytes = hex::decode(&compact).map_err(|e| {
            AppError::config(format!("NETKEY is not valid hex: {e}")).with_source(e)
        })?;

        <[u8; NETWORK_KEY_LEN]>::try_from(bytes.as_slice()).map_err(|_| {
            AppError::config(format!(
                "NETKEY must be {NETWORK_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key(netkey: &str) -> AntSettings {
        AntSettings {
            serial: "/dev/ttyUSB0".to_owned(),
            netkey: netkey.to_owned(),
            leds: default_leds(),
            time_delay_secs: default_time_delay(),
            power_averaging_secs: 0,
        }
    }

    #[test]
    fn test_plain_hex_key() {
        let key = settings_with_key("B9A521FBBD72C345")
            .network_key_bytes()
            .unwrap();
        assert_eq!(key, [0xB9, 0xA5, 0x21, 0xFB, 0xBD, 0x72, 0xC3, 0x45]);
    }

    #[test]
    fn test_prefixed_byte_list_key() {
        let key = settings_with_key("0xB9, 0xA5, 0x21, 0xFB, 0xBD, 0x72, 0xC3, 0x45")
            .network_key_bytes()
            .unwrap();
        assert_eq!(key[0], 0xB9);
        assert_eq!(key[7], 0x45);
    }

    #[test]
    fn test_rejects_short_key() {
        let err = settings_with_key("B9A521").network_key_bytes().unwrap_err();
        assert!(err.message.contains("8 bytes"));
    }

    #[test]
    fn test_rejects_non_hex_key() {
        assert!(settings_with_key("not-a-key").network_key_bytes().is_err());
    }

    #[test]
    fn test_netkey_passes_through_unchanged() {
        let settings = settings_with_key("0xB9,0xA5,0x21,0xFB,0xBD,0x72,0xC3,0x45");
        settings.network_key_bytes().unwrap();
        assert_eq!(settings.netkey, "0xB9,0xA5,0x21,0xFB,0xBD,0x72,0xC3,0x45");
        assert_eq!(settings.time_delay(), Duration::from_secs(10));
    }
}
