//! GPIO LED and polled button registration

use crate::config::{ButtonDescriptor, LedDescriptor};

/// Platform device instance id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceId {
    /// Single instance, no id suffix
    None,
    /// Numbered instance
    Index(u8),
}

/// GPIO LED driver
pub trait LedPlatform {
    /// Register the board LEDs
    ///
    /// The driver exposes LEDs in slice order.
    fn register_leds(&mut self, id: DeviceId, leds: &'static [LedDescriptor]);
}

/// Polled GPIO button driver
pub trait ButtonPlatform {
    /// Register buttons sampled every `poll_interval_ms`
    fn register_polled_buttons(
        &mut self,
        id: DeviceId,
        poll_interval_ms: u32,
        buttons: &'static [ButtonDescriptor],
    );
}
