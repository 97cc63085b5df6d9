//! In-process reporter that keeps everything it receives.

use casahub_domain::device::{Controllable, Device, DeviceSnapshot};
use casahub_domain::error::HouseError;
use casahub_domain::event::Event;

use crate::ports::Reporter;

/// One recorded piece of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    Section(String),
    Event(Event),
    Status(DeviceSnapshot),
}

/// Reporter that stores entries in memory, in the order received.
///
/// Never fails.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Vec<ReportEntry>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Only the recorded events, in order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Event(event) => Some(event),
            _ => None,
        })
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<ReportEntry> {
        self.entries
    }
}

impl Reporter for MemoryReporter {
    fn section(&mut self, title: &str) -> Result<(), HouseError> {
        self.entries.push(ReportEntry::Section(title.to_string()));
        Ok(())
    }

    fn event(&mut self, event: &Event) -> Result<(), HouseError> {
        self.entries.push(ReportEntry::Event(event.clone()));
        Ok(())
    }

    fn status(&mut self, device: &Device) -> Result<(), HouseError> {
        self.entries.push(ReportEntry::Status(device.snapshot()));
        Ok(())
    }
}
