//! On-chip wireless MAC registration

use crate::calibration::FlashPointer;
use crate::mac::MacAddress;

/// On-chip wireless MAC (WMAC) driver
pub trait WirelessPlatform {
    /// Register the WMAC
    ///
    /// `calibration` points at the radio calibration blob in flash; the
    /// driver parses it. With no `mac_override` the driver takes the radio
    /// address from the calibration data.
    fn register_wmac(&mut self, calibration: FlashPointer, mac_override: Option<MacAddress>);
}
