//! SPI NOR flash registration

use crate::config::FlashPlatformData;

/// SPI NOR flash (m25p80) driver
pub trait FlashPlatform {
    /// Register the boot flash with its partition parsers
    fn register_flash(&mut self, data: &FlashPlatformData);
}
