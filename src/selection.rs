// ABOUTME: Chooses which sensor drives the display (power preferred, heart rate as fallback)
// ABOUTME: Pure state machine over caller-supplied monotonic timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input source selection.
//!
//! Power always wins: any power sample makes power the displayed input. Heart rate only
//! takes over once power has been silent for longer than the configured delay (or has never
//! been seen). While power is displayed and still fresh, heart rate samples are ignored.

use serde::Serialize;
use std::time::Duration;
use zone_core::Metric;

/// Decision for one incoming sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Input currently driving the display
    pub metric: Metric,
    /// True when this sample changed the displayed input (collaborators flash the strip)
    pub switched: bool,
}

/// Tracks the displayed input and when each sensor last reported
#[derive(Debug, Clone)]
pub struct InputSelector {
    active: Metric,
    time_delay: Duration,
    last_power: Option<Duration>,
    last_heart_rate: Option<Duration>,
}

impl InputSelector {
    /// Start on power with the given switch-over delay
    #[must_use]
    pub const fn new(time_delay: Duration) -> Self {
        Self {
            active: Metric::Power,
            time_delay,
            last_power: None,
            last_heart_rate: None,
        }
    }

    /// Input currently driving the display
    #[must_use]
    pub const fn active(&self) -> Metric {
        self.active
    }

    /// Configured switch-over delay
    #[must_use]
    pub const fn time_delay(&self) -> Duration {
        self.time_delay
    }

    /// Timestamp of the latest sample for `metric`
    #[must_use]
    pub const fn last_seen(&self, metric: Metric) -> Option<Duration> {
        match metric {
            Metric::Power => self.last_power,
            Metric::HeartRate => self.last_heart_rate,
        }
    }

    /// How long power has been silent at `at`; `None` if power was never seen
    #[must_use]
    pub fn power_silence(&self, at: Duration) -> Option<Duration> {
        self.last_power.map(|last| at.saturating_sub(last))
    }

    /// Record a sample and decide whether it should be displayed
    ///
    /// Returns `None` when the sample is ignored (heart rate while power is fresh).
    pub fn observe(&mut self, metric: Metric, at: Duration) -> Option<Selection> {
        match metric {
            Metric::Power => Some(self.on_power(at)),
            Metric::HeartRate => self.on_heart_rate(at),
        }
    }

    fn on_power(&mut self, at: Duration) -> Selection {
        self.last_power = Some(at);
        let switched = self.active != Metric::Power;
        self.active = Metric::Power;
        Selection {
            metric: Metric::Power,
            switched,
        }
    }

    fn on_heart_rate(&mut self, at: Duration) -> Option<Selection> {
        self.last_heart_rate = Some(at);

        if self.active == Metric::HeartRate {
            return Some(Selection {
                metric: Metric::HeartRate,
                switched: false,
            });
        }

        let power_stale = self
            .power_silence(at)
            .is_none_or(|silence| silence > self.time_delay);

        if power_stale {
            self.active = Metric::HeartRate;
            Some(Selection {
                metric: Metric::HeartRate,
                switched: true,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(10);

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[test]
    fn test_starts_on_power() {
        let mut selector = InputSelector::new(DELAY);
        assert_eq!(selector.active(), Metric::Power);

        let selection = selector.observe(Metric::Power, secs(0)).unwrap();
        assert_eq!(selection.metric, Metric::Power);
        assert!(!selection.switched);
    }

    #[test]
    fn test_heart_rate_ignored_while_power_fresh() {
        let mut selector = InputSelector::new(DELAY);
        selector.observe(Metric::Power, secs(0));

        assert!(selector.observe(Metric::HeartRate, secs(5)).is_none());
        // exactly the delay is not yet stale
        assert!(selector.observe(Metric::HeartRate, secs(10)).is_none());
        assert_eq!(selector.active(), Metric::Power);
        assert_eq!(selector.last_seen(Metric::HeartRate), Some(secs(10)));
    }

    #[test]
    fn test_heart_rate_takes_over_after_delay() {
        let mut selector = InputSelector::new(DELAY);
        selector.observe(Metric::Power, secs(0));

        let selection = selector.observe(Metric::HeartRate, secs(11)).unwrap();
        assert_eq!(selection.metric, Metric::HeartRate);
        assert!(selection.switched);

        let next = selector.observe(Metric::HeartRate, secs(12)).unwrap();
        assert!(!next.switched);
    }

    #[test]
    fn test_heart_rate_takes_over_when_power_never_seen() {
        let mut selector = InputSelector::new(DELAY);
        let selection = selector.observe(Metric::HeartRate, secs(0)).unwrap();
        assert_eq!(selection.metric, Metric::HeartRate);
        assert!(selection.switched);
    }

    #[test]
    fn test_power_reclaims_display() {
        let mut selector = InputSelector::new(DELAY);
        selector.observe(Metric::HeartRate, secs(0));

        let selection = selector.observe(Metric::Power, secs(3)).unwrap();
        assert_eq!(selection.metric, Metric::Power);
        assert!(selection.switched);
        assert_eq!(selector.power_silence(secs(8)), Some(secs(5)));
    }
}
