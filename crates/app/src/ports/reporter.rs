//! Reporter port — where everything the house emits ends up.

use casahub_domain::device::Device;
use casahub_domain::error::HouseError;
use casahub_domain::event::Event;

/// Receives the program output in the order it is produced.
pub trait Reporter {
    /// Start a titled section (e.g. the device status listing).
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::Output`] when the underlying sink fails.
    fn section(&mut self, title: &str) -> Result<(), HouseError>;

    /// Report a status event produced by a device or the house.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::Output`] when the underlying sink fails.
    fn event(&mut self, event: &Event) -> Result<(), HouseError>;

    /// Report the current status of one device.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::Output`] when the underlying sink fails.
    fn status(&mut self, device: &Device) -> Result<(), HouseError>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn section(&mut self, title: &str) -> Result<(), HouseError> {
        (**self).section(title)
    }

    fn event(&mut self, event: &Event) -> Result<(), HouseError> {
        (**self).event(event)
    }

    fn status(&mut self, device: &Device) -> Result<(), HouseError> {
        (**self).status(device)
    }
}
