// ABOUTME: Reading pipeline from sensor samples to zone updates for the display
// ABOUTME: Smooths power, selects the active input and classifies against zone profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Zone monitor.
//!
//! The radio collaborator hands over decoded samples as [`Reading`]s; the monitor decides
//! whether each one reaches the display and, if so, which zone it is in. Zone
//! configurations are borrowed from the [`ZoneProfiles`] built at startup.

use crate::config::{AntSettings, ZoneProfiles};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::selection::InputSelector;
use crate::sink::ZoneSink;
use crate::smoothing::{ReadingSmoother, RollingAverage};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use zone_core::{Metric, OwnedZoneResult};

/// One decoded sensor sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Which sensor produced the sample
    pub metric: Metric,
    /// Watts or bpm
    pub value: f64,
    /// Monotonic time since the session started
    pub at: Duration,
}

impl Reading {
    /// Power sample in watts
    #[must_use]
    pub const fn power(watts: f64, at: Duration) -> Self {
        Self {
            metric: Metric::Power,
            value: watts,
            at,
        }
    }

    /// Heart rate sample in bpm
    #[must_use]
    pub const fn heart_rate(bpm: f64, at: Duration) -> Self {
        Self {
            metric: Metric::HeartRate,
            value: bpm,
            at,
        }
    }
}

/// What the display should show after a sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneUpdate {
    /// Input driving the display
    pub metric: Metric,
    /// Sample value as received
    pub raw: f64,
    /// Value that was classified (smoothed for power)
    pub value: f64,
    /// Zone of `value`
    pub zone: OwnedZoneResult,
    /// The displayed input changed with this sample
    pub switched: bool,
    /// The displayed zone differs from the previous update
    pub zone_changed: bool,
    /// Seconds since the session started
    pub at_secs: f64,
}

/// Stateful pipeline over immutable zone profiles
pub struct ZoneMonitor<'a> {
    profiles: &'a ZoneProfiles,
    smoother: Box<dyn ReadingSmoother>,
    selector: InputSelector,
    last_zone: Option<(Metric, usize)>,
}

impl<'a> ZoneMonitor<'a> {
    /// Create a monitor with an explicit smoother and switch-over delay
    #[must_use]
    pub fn new(
        profiles: &'a ZoneProfiles,
        smoother: Box<dyn ReadingSmoother>,
        time_delay: Duration,
    ) -> Self {
        Self {
            profiles,
            smoother,
            selector: InputSelector::new(time_delay),
            last_zone: None,
        }
    }

    /// Create a monitor from the device parameters
    #[must_use]
    pub fn from_settings(profiles: &'a ZoneProfiles, ant: &AntSettings) -> Self {
        let smoother = RollingAverage::for_power_window(ant.power_averaging_secs);
        debug!(
            window_samples = smoother.capacity(),
            time_delay_secs = ant.time_delay_secs,
            "zone monitor configured"
        );
        Self::new(profiles, Box::new(smoother), ant.time_delay())
    }

    /// Input currently driving the display
    #[must_use]
    pub const fn active(&self) -> Metric {
        self.selector.active()
    }

    /// Process one sample
    ///
    /// Returns `None` when the sample does not reach the display: non-finite values, and
    /// heart rate samples while power is still fresh.
    pub fn ingest(&mut self, reading: Reading) -> Option<ZoneUpdate> {
        if !reading.value.is_finite() {
            warn!(metric = %reading.metric, "ignoring non-finite reading");
            return None;
        }

        let silence = self.selector.power_silence(reading.at);
        let power_gap = silence.is_some_and(|quiet| quiet > self.selector.time_delay());
        let selection = self.selector.observe(reading.metric, reading.at)?;

        let value = match selection.metric {
            Metric::Power => {
                // samples from before a switch or a dropout never share a window
                if selection.switched || power_gap {
                    debug!(metric = %selection.metric, "power window restarted");
                    self.smoother.reset();
                }
                self.smoother.push(reading.value)
            }
            Metric::HeartRate => reading.value,
        };

        if selection.switched {
            let from = match selection.metric {
                Metric::Power => Metric::HeartRate,
                Metric::HeartRate => Metric::Power,
            };
            AppLogger::log_source_switch(
                from,
                selection.metric,
                silence.as_ref().map(Duration::as_secs_f64),
            );
        }

        let zone = self.profiles.classifier(selection.metric).classify(value);
        let zone_changed = self.last_zone != Some((selection.metric, zone.index));
        if zone_changed {
            AppLogger::log_zone_change(selection.metric, value, zone.index, zone.label);
            self.last_zone = Some((selection.metric, zone.index));
        }

        Some(ZoneUpdate {
            metric: selection.metric,
            raw: reading.value,
            value,
            zone: zone.into_owned(),
            switched: selection.switched,
            zone_changed,
            at_secs: reading.at.as_secs_f64(),
        })
    }

    /// Feed every reading through the pipeline and publish the resulting updates
    ///
    /// # Errors
    ///
    /// Returns the first sink error
    pub fn run<I, S>(&mut self, readings: I, sink: &mut S) -> AppResult<usize>
    where
        I: IntoIterator<Item = Reading>,
        S: ZoneSink + ?Sized,
    {
        let mut published = 0;
        for reading in readings {
            if let Some(update) = self.ingest(reading) {
                sink.publish(&update)?;
                published += 1;
            }
        }
        Ok(published)
    }
}
