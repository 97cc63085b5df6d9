//! The fixed demonstration script run by `casahubd`.
//!
//! Builds a five-device house, arms both sensors, triggers one of them,
//! prints every status, runs the motion scene and prints every status again.

use casahub_domain::device::{Camera, Light, MotionSensor};
use casahub_domain::error::HouseError;
use casahub_domain::id::DeviceId;

use crate::ports::Reporter;
use crate::services::house_service::HouseService;

/// Run the demonstration against `reporter` and return the final service.
///
/// # Errors
///
/// Returns an output error propagated from the reporter.
#[tracing::instrument(skip(reporter))]
pub fn run_demo<R: Reporter>(reporter: R) -> Result<HouseService<R>, HouseError> {
    let mut service = HouseService::new(reporter);

    service.add_device(Light::new(DeviceId::new("Living_Room")?))?;
    service.add_device(Light::new(DeviceId::new("Kitchen")?))?;
    service.add_device(Camera::new(DeviceId::new("Entrance")?))?;
    let hallway = service.add_device(MotionSensor::new(DeviceId::new("Hallway")?))?;
    let patio = service.add_device(MotionSensor::new(DeviceId::new("Patio")?))?;

    service.turn_on(hallway)?;
    service.turn_on(patio)?;

    service.detect_motion(hallway)?;

    service.describe_all()?;
    service.run_scene()?;
    service.describe_all()?;

    tracing::info!(devices = service.house().len(), "demo finished");
    Ok(service)
}
