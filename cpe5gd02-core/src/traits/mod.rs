//! Collaborator traits
//!
//! Bring-up does not drive any peripheral itself. It hands board facts to
//! the generic platform drivers through these registration traits, one per
//! driver family. Registration is fire-and-forget: a driver that rejects a
//! device reports that as its own boot fault, so none of these methods
//! return a result.

pub mod bus;
pub mod ethernet;
pub mod flash;
pub mod leds;
pub mod wireless;

pub use bus::BusPlatform;
pub use ethernet::EthernetPlatform;
pub use flash::FlashPlatform;
pub use leds::{ButtonPlatform, DeviceId, LedPlatform};
pub use wireless::WirelessPlatform;

/// Every driver family bring-up talks to
pub trait BoardPlatform:
    FlashPlatform + LedPlatform + ButtonPlatform + BusPlatform + WirelessPlatform + EthernetPlatform
{
}

// Blanket implementation for types that implement all collaborator traits
impl<T> BoardPlatform for T where
    T: FlashPlatform
        + LedPlatform
        + ButtonPlatform
        + BusPlatform
        + WirelessPlatform
        + EthernetPlatform
{
}
