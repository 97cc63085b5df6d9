//! Device — a controllable unit of the house with an on/off state.
//!
//! The capability set shared by every device is the [`Controllable`] trait.
//! Concrete variants live in submodules and are gathered in the [`Device`]
//! sum type, which the [`House`](crate::house::House) stores. Variant-specific
//! behaviour (motion detection) is reached through the capability queries on
//! [`Device`] rather than by inspecting types at runtime.

mod camera;
mod light;
mod motion_sensor;

pub use camera::Camera;
pub use light::{DEFAULT_ON_INTENSITY, Light};
pub use motion_sensor::MotionSensor;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::id::DeviceId;

/// Operations every device supports. None of them can fail.
pub trait Controllable {
    /// The identifier given at construction. Never changes.
    fn id(&self) -> &DeviceId;

    fn is_on(&self) -> bool;

    /// Switch the device on, returning the status event describing the change.
    fn turn_on(&mut self) -> Event;

    /// Switch the device off, returning the status event describing the change.
    fn turn_off(&mut self) -> Event;

    /// Render a one-line human-readable status.
    fn describe(&self) -> String;

    /// Capture the current state in a serializable form.
    fn snapshot(&self) -> DeviceSnapshot;
}

/// Variant tag of a [`Device`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    Camera,
    MotionSensor,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Camera => f.write_str("camera"),
            Self::MotionSensor => f.write_str("motion_sensor"),
        }
    }
}

/// Serializable view of a device's state. Variant-specific fields are only
/// present for the matching kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub id: DeviceId,
    pub kind: DeviceKind,
    pub is_on: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion_detected: Option<bool>,
}

/// Wrapper enum for the concrete device types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Device {
    Light(Light),
    Camera(Camera),
    MotionSensor(MotionSensor),
}

impl Device {
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Camera(_) => DeviceKind::Camera,
            Self::MotionSensor(_) => DeviceKind::MotionSensor,
        }
    }

    /// Whether the motion scene switches this device on (lights and cameras).
    #[must_use]
    pub fn is_scene_target(&self) -> bool {
        matches!(self, Self::Light(_) | Self::Camera(_))
    }

    #[must_use]
    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Self::Light(light) => Some(light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_camera(&self) -> Option<&Camera> {
        match self {
            Self::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_motion_sensor(&self) -> Option<&MotionSensor> {
        match self {
            Self::MotionSensor(sensor) => Some(sensor),
            _ => None,
        }
    }

    pub fn as_motion_sensor_mut(&mut self) -> Option<&mut MotionSensor> {
        match self {
            Self::MotionSensor(sensor) => Some(sensor),
            _ => None,
        }
    }
}

impl Controllable for Device {
    fn id(&self) -> &DeviceId {
        match self {
            Self::Light(d) => d.id(),
            Self::Camera(d) => d.id(),
            Self::MotionSensor(d) => d.id(),
        }
    }

    fn is_on(&self) -> bool {
        match self {
            Self::Light(d) => d.is_on(),
            Self::Camera(d) => d.is_on(),
            Self::MotionSensor(d) => d.is_on(),
        }
    }

    fn turn_on(&mut self) -> Event {
        match self {
            Self::Light(d) => d.turn_on(),
            Self::Camera(d) => d.turn_on(),
            Self::MotionSensor(d) => d.turn_on(),
        }
    }

    fn turn_off(&mut self) -> Event {
        match self {
            Self::Light(d) => d.turn_off(),
            Self::Camera(d) => d.turn_off(),
            Self::MotionSensor(d) => d.turn_off(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Light(d) => d.describe(),
            Self::Camera(d) => d.describe(),
            Self::MotionSensor(d) => d.describe(),
        }
    }

    fn snapshot(&self) -> DeviceSnapshot {
        match self {
            Self::Light(d) => d.snapshot(),
            Self::Camera(d) => d.snapshot(),
            Self::MotionSensor(d) => d.snapshot(),
        }
    }
}

impl From<Light> for Device {
    fn from(light: Light) -> Self {
        Self::Light(light)
    }
}

impl From<Camera> for Device {
    fn from(camera: Camera) -> Self {
        Self::Camera(camera)
    }
}

impl From<MotionSensor> for Device {
    fn from(sensor: MotionSensor) -> Self {
        Self::MotionSensor(sensor)
    }
}

/// `On` / `Off` label used by every `describe` implementation.
fn power_label(is_on: bool) -> &'static str {
    if is_on { "On" } else { "Off" }
}
