//! Smart light with a dimmable intensity.

use crate::error::{HouseError, ValidationError};
use crate::event::{Event, EventKind};
use crate::id::DeviceId;

use super::{Controllable, DeviceKind, DeviceSnapshot, power_label};

/// Intensity applied by [`Light::turn_on`], whatever the previous level was.
pub const DEFAULT_ON_INTENSITY: u8 = 80;

/// A light whose intensity is a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Light {
    id: DeviceId,
    on: bool,
    intensity: u8,
}

impl Light {
    /// Create a light that is off with zero intensity.
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            on: false,
            intensity: 0,
        }
    }

    /// Create a light that is off but remembers a preset intensity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IntensityOutOfRange`] when `intensity > 100`.
    pub fn with_intensity(id: DeviceId, intensity: u8) -> Result<Self, HouseError> {
        if intensity > 100 {
            return Err(ValidationError::IntensityOutOfRange(intensity).into());
        }
        Ok(Self {
            id,
            on: false,
            intensity,
        })
    }

    #[must_use]
    pub fn intensity(&self) -> u8 {
        self.intensity
    }
}

impl Controllable for Light {
    fn id(&self) -> &DeviceId {
        &self.id
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn turn_on(&mut self) -> Event {
        self.on = true;
        self.intensity = DEFAULT_ON_INTENSITY;
        Event::new(
            self.id.clone(),
            EventKind::LightTurnedOn {
                intensity: self.intensity,
            },
        )
    }

    fn turn_off(&mut self) -> Event {
        self.on = false;
        self.intensity = 0;
        Event::new(self.id.clone(), EventKind::LightTurnedOff)
    }

    fn describe(&self) -> String {
        format!(
            "[Smart Light] ID: {} | State: {} | Intensity: {}%",
            self.id,
            power_label(self.on),
            self.intensity
        )
    }

    fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            id: self.id.clone(),
            kind: DeviceKind::Light,
            is_on: self.on,
            intensity: Some(self.intensity),
            recording: None,
            motion_detected: None,
        }
    }
}
