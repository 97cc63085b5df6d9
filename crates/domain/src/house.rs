//! House — the ordered registry of devices and its motion scene.

use std::fmt;

use crate::device::{Controllable, Device};
use crate::event::{Event, EventKind};

/// Position of a device inside a [`House`].
///
/// Ids are not unique, so devices are addressed by registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceHandle(usize);

impl DeviceHandle {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Devices in insertion order. Duplicate ids are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct House {
    devices: Vec<Device>,
}

impl House {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a device. Always succeeds.
    pub fn add_device(&mut self, device: impl Into<Device>) -> (DeviceHandle, Event) {
        let device = device.into();
        let event = Event::new(device.id().clone(), EventKind::DeviceAdded);
        let handle = DeviceHandle(self.devices.len());
        self.devices.push(device);
        (handle, event)
    }

    #[must_use]
    pub fn device(&self, handle: DeviceHandle) -> Option<&Device> {
        self.devices.get(handle.0)
    }

    pub fn device_mut(&mut self, handle: DeviceHandle) -> Option<&mut Device> {
        self.devices.get_mut(handle.0)
    }

    /// First device registered under `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<DeviceHandle> {
        self.devices
            .iter()
            .position(|d| d.id().as_str() == id)
            .map(DeviceHandle)
    }

    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Status line of every device, in insertion order.
    #[must_use]
    pub fn describe_all(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.describe()).collect()
    }

    /// Run the motion scene once.
    ///
    /// The first motion sensor (in insertion order) that has detected motion
    /// turns on every light and camera. Later sensors are not evaluated. The
    /// returned events start with [`EventKind::SceneTriggered`]; an empty
    /// vector means nothing fired and nothing changed.
    pub fn run_scene(&mut self) -> Vec<Event> {
        let Some(trigger) = self
            .devices
            .iter()
            .filter_map(Device::as_motion_sensor)
            .find(|sensor| sensor.motion_detected())
            .map(|sensor| sensor.id().clone())
        else {
            return Vec::new();
        };

        let mut events = vec![Event::new(trigger, EventKind::SceneTriggered)];
        events.extend(
            self.devices
                .iter_mut()
                .filter(|d| d.is_scene_target())
                .map(|d| d.turn_on()),
        );
        events
    }
}
