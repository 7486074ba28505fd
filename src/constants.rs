// ABOUTME: Application constants for the ANT+ zone display
// ABOUTME: Service identity, environment variable names and ANT+ channel timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identity used in structured logs
pub mod service_names {
    /// Binary / service name
    pub const ANT_ZONE_DISPLAY: &str = "ant-zone-display";
}

/// Environment variable names
pub mod env_vars {
    /// Path of the YAML zone/device configuration
    pub const CONFIG_PATH: &str = "ZONE_CONFIG_PATH";
    /// Override for the ANT USB stick serial device
    pub const ANT_SERIAL: &str = "ANT_SERIAL";
    /// Override for the LED strip length
    pub const ANT_LEDS: &str = "ANT_LEDS";
    /// Override for the input-switch delay in seconds
    pub const ANT_TIME_DELAY: &str = "ANT_TIME_DELAY";
    /// Override for the power averaging window in seconds
    pub const ANT_POWER_AVERAGING: &str = "ANT_POWER_AVERAGING";
}

/// Configuration file defaults
pub mod defaults {
    /// Configuration file looked up when `ZONE_CONFIG_PATH` is unset
    pub const CONFIG_FILE: &str = "INPUT_CONSTANTS.yaml";
}

/// ANT+ channel timing
pub mod ant {
    /// ANT channel period unit: periods are expressed in 1/32768 s
    pub const PERIOD_CLOCK_HZ: f64 = 32_768.0;
    /// Bicycle power channel period
    pub const POWER_CHANNEL_PERIOD: u16 = 8182;
    /// Network keys are 8 bytes
    pub const NETWORK_KEY_LEN: usize = 8;

    /// Broadcast messages per second for a channel period
    #[must_use]
    pub fn message_rate_hz(period: u16) -> f64 {
        PERIOD_CLOCK_HZ / f64::from(period)
    }
}
