//! House service — use-cases for driving the devices of a house.

use casahub_domain::device::{Controllable, Device};
use casahub_domain::error::{HouseError, NotFoundError, UnsupportedError};
use casahub_domain::house::{DeviceHandle, House};

use crate::ports::Reporter;

/// Title of the section emitted by [`HouseService::describe_all`].
pub const STATUS_SECTION: &str = "Status of all devices";
/// Title of the section emitted by [`HouseService::run_scene`].
pub const SCENE_SECTION: &str = "Running automatic scene";

/// Application service owning a [`House`] and reporting every change.
pub struct HouseService<R> {
    house: House,
    reporter: R,
}

impl<R: Reporter> HouseService<R> {
    /// Create a service around an empty house.
    pub fn new(reporter: R) -> Self {
        Self::with_house(House::new(), reporter)
    }

    /// Create a service around an existing house.
    pub fn with_house(house: House, reporter: R) -> Self {
        Self { house, reporter }
    }

    #[must_use]
    pub fn house(&self) -> &House {
        &self.house
    }

    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Give back the house and the reporter.
    pub fn into_parts(self) -> (House, R) {
        (self.house, self.reporter)
    }

    /// Register a device and report the confirmation.
    ///
    /// # Errors
    ///
    /// Returns an output error propagated from the reporter.
    #[tracing::instrument(skip(self, device))]
    pub fn add_device(&mut self, device: impl Into<Device>) -> Result<DeviceHandle, HouseError> {
        let (handle, event) = self.house.add_device(device);
        tracing::debug!(%handle, device_id = %event.device_id, "device registered");
        self.reporter.event(&event)?;
        Ok(handle)
    }

    /// Switch a device on.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::NotFound`] for an unknown handle, or an output
    /// error propagated from the reporter.
    #[tracing::instrument(skip(self))]
    pub fn turn_on(&mut self, handle: DeviceHandle) -> Result<(), HouseError> {
        let event = lookup(&mut self.house, handle)?.turn_on();
        self.reporter.event(&event)
    }

    /// Switch a device off.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::NotFound`] for an unknown handle, or an output
    /// error propagated from the reporter.
    #[tracing::instrument(skip(self))]
    pub fn turn_off(&mut self, handle: DeviceHandle) -> Result<(), HouseError> {
        let event = lookup(&mut self.house, handle)?.turn_off();
        self.reporter.event(&event)
    }

    /// Simulate a detection on a motion sensor.
    ///
    /// Returns `Ok(false)` when the sensor is off: the outcome is reported,
    /// nothing changes, and it is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::NotFound`] for an unknown handle,
    /// [`HouseError::Unsupported`] when the device is not a motion sensor, or
    /// an output error propagated from the reporter.
    #[tracing::instrument(skip(self))]
    pub fn detect_motion(&mut self, handle: DeviceHandle) -> Result<bool, HouseError> {
        let device = lookup(&mut self.house, handle)?;
        let kind = device.kind();
        let Some(sensor) = device.as_motion_sensor_mut() else {
            return Err(UnsupportedError {
                id: device.id().to_string(),
                kind,
                operation: "detect_motion",
            }
            .into());
        };
        let event = sensor.detect_motion();
        let detected = sensor.is_on();
        if !detected {
            tracing::debug!(device_id = %event.device_id, "sensor is off, detection ignored");
        }
        self.reporter.event(&event)?;
        Ok(detected)
    }

    /// Report the status of every device in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an output error propagated from the reporter.
    #[tracing::instrument(skip(self))]
    pub fn describe_all(&mut self) -> Result<(), HouseError> {
        self.reporter.section(STATUS_SECTION)?;
        for device in self.house.devices() {
            self.reporter.status(device)?;
        }
        Ok(())
    }

    /// Run the motion scene and report what it did.
    ///
    /// Returns whether a sensor triggered the scene.
    ///
    /// # Errors
    ///
    /// Returns an output error propagated from the reporter.
    #[tracing::instrument(skip(self))]
    pub fn run_scene(&mut self) -> Result<bool, HouseError> {
        self.reporter.section(SCENE_SECTION)?;
        let events = self.house.run_scene();
        let Some(trigger) = events.first() else {
            tracing::debug!("no motion detected, scene skipped");
            return Ok(false);
        };
        tracing::info!(
            sensor = %trigger.device_id,
            switched_on = events.len() - 1,
            "scene triggered"
        );
        for event in &events {
            self.reporter.event(event)?;
        }
        Ok(true)
    }
}

fn lookup(house: &mut House, handle: DeviceHandle) -> Result<&mut Device, HouseError> {
    house.device_mut(handle).ok_or_else(|| {
        NotFoundError {
            entity: "Device",
            id: handle.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use casahub_domain::device::{Camera, DeviceKind, Light, MotionSensor};
    use casahub_domain::event::EventKind;
    use casahub_domain::id::DeviceId;

    use crate::memory_reporter::{MemoryReporter, ReportEntry};

    fn id(s: &str) -> DeviceId {
        DeviceId::new(s).unwrap()
    }

    fn service() -> HouseService<MemoryReporter> {
        HouseService::new(MemoryReporter::new())
    }

    fn event_kinds(service: &HouseService<MemoryReporter>) -> Vec<EventKind> {
        service.reporter().events().map(|e| e.kind).collect()
    }

    #[test]
    fn should_report_registration() {
        let mut service = service();
        let handle = service.add_device(Light::new(id("Kitchen"))).unwrap();
        assert_eq!(service.house().len(), 1);
        assert_eq!(handle.index(), 0);
        assert_eq!(event_kinds(&service), vec![EventKind::DeviceAdded]);
    }

    #[test]
    fn should_report_turn_on_and_turn_off() {
        let mut service = service();
        let cam = service.add_device(Camera::new(id("Entrance"))).unwrap();
        service.turn_on(cam).unwrap();
        service.turn_off(cam).unwrap();
        assert_eq!(
            event_kinds(&service),
            vec![
                EventKind::DeviceAdded,
                EventKind::CameraTurnedOn,
                EventKind::CameraTurnedOff,
            ]
        );
    }

    #[test]
    fn should_return_not_found_for_unknown_handle() {
        let mut service = service();
        let handle = service.add_device(Light::new(id("Kitchen"))).unwrap();
        let (house, _) = service.into_parts();

        let mut other = HouseService::new(MemoryReporter::new());
        let result = other.turn_on(handle);
        assert!(matches!(result, Err(HouseError::NotFound(_))));
        assert_eq!(house.len(), 1);
    }

    #[test]
    fn should_report_ignored_detection_without_error() {
        let mut service = service();
        let sensor = service.add_device(MotionSensor::new(id("Patio"))).unwrap();

        let detected = service.detect_motion(sensor).unwrap();

        assert!(!detected);
        let state = service.house().device(sensor).unwrap();
        assert!(!state.as_motion_sensor().unwrap().motion_detected());
        assert_eq!(
            event_kinds(&service),
            vec![EventKind::DeviceAdded, EventKind::MotionIgnored]
        );
    }

    #[test]
    fn should_detect_motion_on_active_sensor() {
        let mut service = service();
        let sensor = service.add_device(MotionSensor::new(id("Hallway"))).unwrap();
        service.turn_on(sensor).unwrap();
        assert!(service.detect_motion(sensor).unwrap());
    }

    #[test]
    fn should_reject_detection_on_non_sensor() {
        let mut service = service();
        let light = service.add_device(Light::new(id("Kitchen"))).unwrap();

        let result = service.detect_motion(light);

        match result {
            Err(HouseError::Unsupported(err)) => {
                assert_eq!(err.kind, DeviceKind::Light);
                assert_eq!(err.id, "Kitchen");
            }
            other => panic!("expected unsupported error, got {other:?}"),
        }
    }

    #[test]
    fn should_describe_every_device_after_section_header() {
        let mut service = service();
        service.add_device(Light::new(id("Kitchen"))).unwrap();
        service.add_device(Camera::new(id("Entrance"))).unwrap();

        service.describe_all().unwrap();

        let entries = service.reporter().entries();
        assert_eq!(entries[2], ReportEntry::Section(STATUS_SECTION.to_string()));
        assert!(matches!(&entries[3], ReportEntry::Status(s) if s.id.as_str() == "Kitchen"));
        assert!(matches!(&entries[4], ReportEntry::Status(s) if s.id.as_str() == "Entrance"));
    }

    #[test]
    fn should_only_emit_header_when_scene_does_not_fire() {
        let mut service = service();
        let light = service.add_device(Light::new(id("Kitchen"))).unwrap();
        let sensor = service.add_device(MotionSensor::new(id("Hallway"))).unwrap();
        service.turn_on(sensor).unwrap();
        let before = service.reporter().entries().len();

        let fired = service.run_scene().unwrap();

        assert!(!fired);
        let entries = &service.reporter().entries()[before..];
        assert_eq!(entries, &[ReportEntry::Section(SCENE_SECTION.to_string())]);
        assert!(!service.house().device(light).unwrap().is_on());
    }

    #[test]
    fn should_switch_on_lights_and_cameras_when_scene_fires() {
        let mut service = service();
        let light = service.add_device(Light::new(id("L1"))).unwrap();
        let cam = service.add_device(Camera::new(id("C1"))).unwrap();
        let s1 = service.add_device(MotionSensor::new(id("S1"))).unwrap();
        let s2 = service.add_device(MotionSensor::new(id("S2"))).unwrap();
        service.turn_on(s1).unwrap();
        service.turn_on(s2).unwrap();
        service.detect_motion(s1).unwrap();

        assert!(service.run_scene().unwrap());

        let house = service.house();
        let light = house.device(light).and_then(Device::as_light).unwrap();
        assert!(light.is_on());
        assert_eq!(light.intensity(), 80);
        let cam = house.device(cam).and_then(Device::as_camera).unwrap();
        assert!(cam.is_on() && cam.is_recording());
        let s2 = house.device(s2).and_then(Device::as_motion_sensor).unwrap();
        assert!(!s2.motion_detected());

        let tail: Vec<_> = event_kinds(&service).into_iter().rev().take(3).collect();
        assert_eq!(
            tail,
            vec![
                EventKind::CameraTurnedOn,
                EventKind::LightTurnedOn { intensity: 80 },
                EventKind::SceneTriggered,
            ]
        );
    }
}
