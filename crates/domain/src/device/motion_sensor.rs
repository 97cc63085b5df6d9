//! Motion sensor — the only device the motion scene reads from.
//!
//! States: `Off`, `On` without motion, `On` with motion detected. Switching
//! the sensor off does not clear the detected flag, so a sensor that saw
//! motion keeps reporting it until it is replaced.

use crate::event::{Event, EventKind};
use crate::id::DeviceId;

use super::{Controllable, DeviceKind, DeviceSnapshot, power_label};

/// A simulated motion sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionSensor {
    id: DeviceId,
    on: bool,
    motion_detected: bool,
}

impl MotionSensor {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            on: false,
            motion_detected: false,
        }
    }

    #[must_use]
    pub fn motion_detected(&self) -> bool {
        self.motion_detected
    }

    /// Simulate a detection.
    ///
    /// Only an active sensor records motion. On an inactive sensor this is a
    /// no-op reported through a [`EventKind::MotionIgnored`] event.
    pub fn detect_motion(&mut self) -> Event {
        if !self.on {
            return Event::new(self.id.clone(), EventKind::MotionIgnored);
        }
        self.motion_detected = true;
        Event::new(self.id.clone(), EventKind::MotionDetected)
    }
}

impl Controllable for MotionSensor {
    fn id(&self) -> &DeviceId {
        &self.id
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn turn_on(&mut self) -> Event {
        self.on = true;
        Event::new(self.id.clone(), EventKind::SensorActivated)
    }

    fn turn_off(&mut self) -> Event {
        self.on = false;
        Event::new(self.id.clone(), EventKind::SensorDeactivated)
    }

    fn describe(&self) -> String {
        let motion = if self.motion_detected { "Yes" } else { "No" };
        format!(
            "[Motion Sensor] ID: {} | State: {} | Motion detected: {motion}",
            self.id,
            power_label(self.on)
        )
    }

    fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            id: self.id.clone(),
            kind: DeviceKind::MotionSensor,
            is_on: self.on,
            intensity: None,
            recording: None,
            motion_detected: Some(self.motion_detected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor() -> MotionSensor {
        MotionSensor::new(DeviceId::new("Hallway").unwrap())
    }

    #[test]
    fn should_default_to_off_without_motion() {
        let sensor = sensor();
        assert!(!sensor.is_on());
        assert!(!sensor.motion_detected());
    }

    #[test]
    fn should_ignore_detection_when_off() {
        let mut sensor = sensor();
        let event = sensor.detect_motion();
        assert_eq!(event.kind, EventKind::MotionIgnored);
        assert!(!sensor.motion_detected());
        assert!(!sensor.is_on());
    }

    #[test]
    fn should_record_detection_when_on() {
        let mut sensor = sensor();
        sensor.turn_on();
        let event = sensor.detect_motion();
        assert_eq!(event.kind, EventKind::MotionDetected);
        assert!(sensor.motion_detected());
    }

    #[test]
    fn should_keep_motion_flag_after_turn_off() {
        let mut sensor = sensor();
        sensor.turn_on();
        sensor.detect_motion();
        let event = sensor.turn_off();
        assert_eq!(event.kind, EventKind::SensorDeactivated);
        assert!(!sensor.is_on());
        assert!(sensor.motion_detected());
    }

    #[test]
    fn should_not_touch_motion_flag_when_toggling_power() {
        let mut sensor = sensor();
        assert_eq!(sensor.turn_on().kind, EventKind::SensorActivated);
        assert!(!sensor.motion_detected());
        sensor.turn_off();
        assert!(!sensor.motion_detected());
    }

    #[test]
    fn should_describe_motion_label() {
        let mut sensor = sensor();
        sensor.turn_on();
        sensor.detect_motion();
        assert_eq!(
            sensor.describe(),
            "[Motion Sensor] ID: Hallway | State: On | Motion detected: Yes"
        );
    }
}
