//! Security camera — records whenever it is on.

use crate::event::{Event, EventKind};
use crate::id::DeviceId;

use super::{Controllable, DeviceKind, DeviceSnapshot, power_label};

/// A camera whose `recording` flag mirrors its power state after every
/// `turn_on` / `turn_off`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camera {
    id: DeviceId,
    on: bool,
    recording: bool,
}

impl Camera {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            on: false,
            recording: false,
        }
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }
}

impl Controllable for Camera {
    fn id(&self) -> &DeviceId {
        &self.id
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn turn_on(&mut self) -> Event {
        self.on = true;
        self.recording = true;
        Event::new(self.id.clone(), EventKind::CameraTurnedOn)
    }

    fn turn_off(&mut self) -> Event {
        self.on = false;
        self.recording = false;
        Event::new(self.id.clone(), EventKind::CameraTurnedOff)
    }

    fn describe(&self) -> String {
        let recording = if self.recording { "Recording" } else { "Idle" };
        format!(
            "[Security Camera] ID: {} | State: {} | {recording}",
            self.id,
            power_label(self.on)
        )
    }

    fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            id: self.id.clone(),
            kind: DeviceKind::Camera,
            is_on: self.on,
            intensity: None,
            recording: Some(self.recording),
            motion_detected: None,
        }
    }
}
