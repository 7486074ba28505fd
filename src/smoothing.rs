// ABOUTME: Windowed smoothing of power readings before zone classification
// ABOUTME: Simple moving average sized from the configured averaging window in seconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Power smoothing.
//!
//! Instantaneous power from a bicycle power meter is noisy, so the display classifies the
//! average of the last `POWER_AVERAGING` seconds of samples. Heart rate is not smoothed.

use crate::constants::ant;
use std::collections::VecDeque;

/// Streaming smoother fed one reading at a time
pub trait ReadingSmoother: Send {
    /// Add a reading and return the smoothed value
    fn push(&mut self, reading: f64) -> f64;

    /// Discard all buffered readings
    fn reset(&mut self);
}

/// Simple moving average over the last `capacity` samples
#[derive(Debug, Clone)]
pub struct RollingAverage {
    capacity: usize,
    samples: VecDeque<f64>,
}

impl RollingAverage {
    /// Average over the last `capacity` samples (at least one)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Size the window from a duration in seconds and a message rate
    ///
    /// A zero-second window degenerates to a pass-through (one sample).
    #[must_use]
    pub fn for_window(seconds: u64, message_rate_hz: f64) -> Self {
        let samples = (seconds as f64 * message_rate_hz).ceil();
        if samples.is_finite() && samples >= 1.0 {
            Self::new(samples as usize)
        } else {
            Self::new(1)
        }
    }

    /// Size the window for the ANT+ bicycle power broadcast rate
    #[must_use]
    pub fn for_power_window(seconds: u64) -> Self {
        Self::for_window(seconds, ant::message_rate_hz(ant::POWER_CHANNEL_PERIOD))
    }

    /// Number of samples averaged once the window is full
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently buffered
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been buffered yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl ReadingSmoother for RollingAverage {
    fn push(&mut self, reading: f64) -> f64 {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(reading);

        let sum: f64 = self.samples.iter().sum();
        sum / self.samples.len() as f64
    }

    fn reset(&mut self) {
        self.samples.clear();
    }
}
