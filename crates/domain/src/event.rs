//! Event — an immutable record of something that happened to a device.
//!
//! Every state-changing operation returns an [`Event`] instead of printing;
//! the application layer forwards them to a reporter port.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::time::{Timestamp, now};

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// A device was registered with the house.
    DeviceAdded,
    LightTurnedOn {
        intensity: u8,
    },
    LightTurnedOff,
    /// A camera was switched on; it records whenever it is on.
    CameraTurnedOn,
    CameraTurnedOff,
    SensorActivated,
    SensorDeactivated,
    MotionDetected,
    /// Detection was requested while the sensor was off. Nothing changed.
    MotionIgnored,
    /// The motion scene fired because of this sensor.
    SceneTriggered,
}

/// A status record for a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub device_id: DeviceId,
    #[serde(flatten)]
    pub kind: EventKind,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(device_id: DeviceId, kind: EventKind) -> Self {
        Self {
            device_id,
            kind,
            timestamp: now(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = &self.device_id;
        match self.kind {
            EventKind::DeviceAdded => write!(f, "Device '{id}' added to the house"),
            EventKind::LightTurnedOn { intensity } => {
                write!(f, "Light {id} turned on at {intensity}% intensity")
            }
            EventKind::LightTurnedOff => write!(f, "Light {id} turned off"),
            EventKind::CameraTurnedOn => write!(f, "Camera {id} turned on and recording"),
            EventKind::CameraTurnedOff => write!(f, "Camera {id} turned off"),
            EventKind::SensorActivated => write!(f, "Sensor {id} activated"),
            EventKind::SensorDeactivated => write!(f, "Sensor {id} deactivated"),
            EventKind::MotionDetected => write!(f, "Sensor {id} detected motion"),
            EventKind::MotionIgnored => {
                write!(f, "Sensor {id} is off, cannot detect motion")
            }
            EventKind::SceneTriggered => write!(
                f,
                "Action: motion detected by {id}, turning on lights and cameras"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> DeviceId {
        DeviceId::new(s).unwrap()
    }

    #[test]
    fn should_display_light_turned_on_with_intensity() {
        let event = Event::new(id("Kitchen"), EventKind::LightTurnedOn { intensity: 80 });
        assert_eq!(event.to_string(), "Light Kitchen turned on at 80% intensity");
    }

    #[test]
    fn should_display_ignored_detection() {
        let event = Event::new(id("Patio"), EventKind::MotionIgnored);
        assert_eq!(event.to_string(), "Sensor Patio is off, cannot detect motion");
    }

    #[test]
    fn should_display_scene_trigger() {
        let event = Event::new(id("Hallway"), EventKind::SceneTriggered);
        assert_eq!(
            event.to_string(),
            "Action: motion detected by Hallway, turning on lights and cameras"
        );
    }

    #[test]
    fn should_flatten_kind_when_serialized() {
        let event = Event::new(id("Kitchen"), EventKind::LightTurnedOn { intensity: 80 });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["device_id"], "Kitchen");
        assert_eq!(json["event"], "light_turned_on");
        assert_eq!(json["intensity"], 80);
        assert!(json["timestamp"].is_string());
    }
}
