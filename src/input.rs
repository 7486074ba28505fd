// ABOUTME: Parses text reading lines handed over by the radio collaborator
// ABOUTME: Format is `<metric> <value> [seconds]`, blank lines and # comments skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::monitor::Reading;
use std::time::Duration;
use zone_core::Metric;

/// Parse a metric name as used on the command line and in reading lines
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error for unknown names
pub fn parse_metric(token: &str) -> AppResult<Metric> {
    match token.to_ascii_lowercase().as_str() {
        "power" | "pwr" | "w" => Ok(Metric::Power),
        "hr" | "heart-rate" | "heart_rate" | "heartrate" | "bpm" => Ok(Metric::HeartRate),
        other => Err(AppError::invalid_input(format!("unknown metric '{other}'"))),
    }
}

/// Assigns session times to reading lines
///
/// Lines may carry an explicit timestamp in seconds; lines without one are stamped from the
/// receive clock, offset so that they continue from the latest explicit timestamp instead of
/// falling behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingClock {
    // (explicit timestamp, receive time when it was seen)
    anchor: Option<(Duration, Duration)>,
}

impl ReadingClock {
    /// Clock with no explicit timestamp seen yet
    #[must_use]
    pub const fn new() -> Self {
        Self { anchor: None }
    }

    /// Session time for a line received at `received_at` without its own timestamp
    #[must_use]
    pub fn now(&self, received_at: Duration) -> Duration {
        self.anchor.map_or(received_at, |(stamp, seen)| {
            stamp.saturating_add(received_at.saturating_sub(seen))
        })
    }

    /// Parse one reading line received at `received_at`
    ///
    /// Returns `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error when the line is malformed
    pub fn parse_line(&mut self, line: &str, received_at: Duration) -> AppResult<Option<Reading>> {
        let Some((metric, value, stamp)) = parse_fields(line)? else {
            return Ok(None);
        };

        let at = match stamp {
            Some(stamp) => {
                self.anchor = Some((stamp, received_at));
                stamp
            }
            None => self.now(received_at),
        };

        Ok(Some(Reading { metric, value, at }))
    }
}

fn parse_fields(line: &str) -> AppResult<Option<(Metric, f64, Option<Duration>)>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut fields = content.split_whitespace();
    let (Some(metric), Some(value)) = (fields.next(), fields.next()) else {
        return Err(AppError::invalid_input(format!(
            "expected '<metric> <value> [seconds]', got '{content}'"
        )));
    };

    let metric = parse_metric(metric)?;
    let value: f64 = value
        .parse()
        .map_err(|_| AppError::invalid_input(format!("'{value}' is not a number")))?;

    let stamp = fields
        .next()
        .map(|seconds| {
            seconds
                .parse::<f64>()
                .ok()
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .ok_or_else(|| {
                    AppError::invalid_input(format!("'{seconds}' is not a valid timestamp"))
                })
        })
        .transpose()?;

    if let Some(extra) = fields.next() {
        return Err(AppError::invalid_input(format!(
            "unexpected trailing field '{extra}'"
        )));
    }

    Ok(Some((metric, value, stamp)))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[test]
    fn test_power_line_with_timestamp() {
        let reading = ReadingClock::new()
            .parse_line("power 250 12.5", Duration::ZERO)
            .unwrap()
            .unwrap();
        assert_eq!(reading.metric, Metric::Power);
        assert_eq!(reading.value, 250.0);
        assert_eq!(reading.at, Duration::from_millis(12_500));
    }

    #[test]
    fn test_heart_rate_line_uses_receive_time() {
        let reading = ReadingClock::new()
            .parse_line("  HR 142  ", secs(3))
            .unwrap()
            .unwrap();
        assert_eq!(reading.metric, Metric::HeartRate);
        assert_eq!(reading.at, secs(3));
    }

    #[test]
    fn test_untimed_lines_continue_from_explicit_timestamp() {
        let mut clock = ReadingClock::new();
        clock.parse_line("power 250 100", secs(1)).unwrap();

        let reading = clock.parse_line("hr 150", secs(4)).unwrap().unwrap();
        assert_eq!(reading.at, secs(103));
        assert_eq!(clock.now(secs(20)), secs(119));
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        let mut clock = ReadingClock::new();
        assert!(clock.parse_line("", Duration::ZERO).unwrap().is_none());
        assert!(clock
            .parse_line("# warm-up", Duration::ZERO)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_malformed_lines_rejected() {
        let mut clock = ReadingClock::new();
        for line in ["power", "cadence 90", "power abc", "hr 150 -1", "hr 150 1 2"] {
            assert!(
                clock.parse_line(line, Duration::ZERO).is_err(),
                "line '{line}' should be rejected"
            );
        }
    }
}
