//! Campaign Event Log
//!
//! Append-only record of every resolved event, optionally mirrored to a
//! JSONL file. The in-memory record feeds the daily coverage report; the
//! file mirror is line-per-event for external tooling.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use election_events::{generate_event_id, CampaignEvent};

/// Event log for one election run.
pub struct EventLog {
    events: Vec<CampaignEvent>,
    writer: Option<BufWriter<File>>,
    next_event_id: u64,
}

impl EventLog {
    /// Creates a log mirroring each record to a JSONL file at `path`.
    pub fn to_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            events: Vec::new(),
            writer: Some(BufWriter::new(file)),
            next_event_id: 1,
        })
    }

    /// Creates a log with no file mirror.
    pub fn null() -> Self {
        Self {
            events: Vec::new(),
            writer: None,
            next_event_id: 1,
        }
    }

    /// Generate the next event ID
    pub fn next_id(&mut self) -> String {
        let id = generate_event_id(self.next_event_id);
        self.next_event_id += 1;
        id
    }

    /// Records one event, appending it to the mirror file if one is open.
    pub fn record(&mut self, event: CampaignEvent) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            let json = event.to_jsonl()?;
            writeln!(writer, "{}", json)?;
        }
        self.events.push(event);
        Ok(())
    }

    /// Every event recorded so far, in order.
    pub fn events(&self) -> &[CampaignEvent] {
        &self.events
    }

    /// Events recorded with `day` days remaining, in order.
    pub fn events_on_day(&self, day: u32) -> impl Iterator<Item = &CampaignEvent> {
        self.events.iter().filter(move |event| event.day == day)
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Flush the mirror file to disk.
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("Warning: failed to flush event log: {}", e);
        }
    }
}
