// ABOUTME: Output seam towards the LED / rendering collaborator
// ABOUTME: ZoneSink trait plus a JSON-lines implementation for piping into a renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::monitor::ZoneUpdate;
use std::io::Write;

/// Receives zone updates destined for the display
pub trait ZoneSink {
    /// Publish one update
    ///
    /// # Errors
    ///
    /// Returns an error if the update cannot be delivered
    fn publish(&mut self, update: &ZoneUpdate) -> AppResult<()>;
}

/// Collects updates in memory
impl ZoneSink for Vec<ZoneUpdate> {
    fn publish(&mut self, update: &ZoneUpdate) -> AppResult<()> {
        self.push(update.clone());
        Ok(())
    }
}

/// Writes each update as one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ZoneSink for JsonLinesSink<W> {
    fn publish(&mut self, update: &ZoneUpdate) -> AppResult<()> {
        serde_json::to_writer(&mut self.writer, update)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
