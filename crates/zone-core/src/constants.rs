// ABOUTME: Zone label tables and reference zone profiles
// ABOUTME: Power zones follow TrainerRoad, heart rate zones follow Training Peaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Positional zone labels
pub mod labels {
    /// `TrainerRoad` power zone names
    pub const POWER: [&str; 8] = [
        "Coasting",
        "Active",
        "Endurance",
        "Tempo",
        "Sweet Spot",
        "Threshold",
        "VO2 Max",
        "Anaerobic",
    ];

    /// Training Peaks heart rate zone names
    pub const HEART_RATE: [&str; 8] = [
        "Recovery",
        "Aerobic",
        "Tempo",
        "SubThreshold",
        "SuperThreshold",
        "Aerobic Capacity",
        "Anaerobic Capacity",
        "Maximum",
    ];
}

/// Reference power profile
pub mod power {
    /// Functional threshold power in watts
    pub const FTP: f64 = 266.0;
    /// Zone lower bounds in watts; the last entry is the open-ended sentinel
    pub const ZONES: [f64; 8] = [0.0, 146.0, 202.0, 234.0, 253.0, 282.0, 322.0, 3000.0];
}

/// Reference heart rate profile
pub mod heart_rate {
    /// Lactate threshold heart rate in bpm
    pub const THRESHOLD: f64 = 167.0;
    /// Zone lower bounds in bpm; the last entry is the open-ended sentinel
    pub const ZONES: [f64; 8] = [0.0, 141.0, 150.0, 158.0, 167.0, 172.0, 178.0, 255.0];
}
