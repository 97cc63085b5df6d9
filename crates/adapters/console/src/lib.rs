//! # casahub-adapter-console
//!
//! [`Reporter`] implementation that writes the house output to any
//! [`std::io::Write`] (stdout in `casahubd`, a `Vec<u8>` in tests).
//!
//! ## Formats
//!
//! | Format | Section | Event | Status |
//! |--------|---------|-------|--------|
//! | `text` | blank line + `=== title ===` | event message | `describe()` line |
//! | `json` | `{"type":"section",…}` | `{"type":"event",…}` | `{"type":"status",…}` |
//!
//! ## Dependency rule
//!
//! Depends on `casahub-app` (port traits) and `casahub-domain` only.

mod error;

pub use error::ConsoleError;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use casahub_app::ports::Reporter;
use casahub_domain::device::{Controllable, Device, DeviceSnapshot};
use casahub_domain::error::HouseError;
use casahub_domain::event::Event;
use serde::{Deserialize, Serialize};

/// How the console reporter renders its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Unknown [`OutputFormat`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format `{0}` (expected `text` or `json`)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonLine<'a> {
    Section { title: &'a str },
    Event(&'a Event),
    Status(DeviceSnapshot),
}

/// Reporter writing to a [`Write`] sink.
pub struct ConsoleReporter<W> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_json(&mut self, line: &JsonLine<'_>) -> Result<(), ConsoleError> {
        serde_json::to_writer(&mut self.writer, line)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section(&mut self, title: &str) -> Result<(), ConsoleError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer)?;
                writeln!(self.writer, "=== {title} ===")?;
                Ok(())
            }
            OutputFormat::Json => self.write_json(&JsonLine::Section { title }),
        }
    }

    fn write_event(&mut self, event: &Event) -> Result<(), ConsoleError> {
        match self.format {
            OutputFormat::Text => Ok(writeln!(self.writer, "{event}")?),
            OutputFormat::Json => self.write_json(&JsonLine::Event(event)),
        }
    }

    fn write_status(&mut self, device: &Device) -> Result<(), ConsoleError> {
        match self.format {
            OutputFormat::Text => Ok(writeln!(self.writer, "{}", device.describe())?),
            OutputFormat::Json => self.write_json(&JsonLine::Status(device.snapshot())),
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn section(&mut self, title: &str) -> Result<(), HouseError> {
        Ok(self.write_section(title)?)
    }

    fn event(&mut self, event: &Event) -> Result<(), HouseError> {
        Ok(self.write_event(event)?)
    }

    fn status(&mut self, device: &Device) -> Result<(), HouseError> {
        Ok(self.write_status(device)?)
    }
}
