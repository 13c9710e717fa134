//! Calibration and MAC pointers
//!
//! Board data lives at fixed offsets in the "art" flash block. This module
//! only computes where; it never looks at the bytes. The wireless driver
//! parses the calibration blob, the Ethernet glue interprets the MAC slots.

use cpe5gd02_hal::kseg1_addr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::FlashRegion;

/// Absolute (KSEG1) address of board data in memory-mapped flash
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlashPointer(u32);

impl FlashPointer {
    /// Wrap an absolute address
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Get the address
    pub const fn addr(self) -> u32 {
        self.0
    }
}

/// MAC address slot in the art block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MacSlot {
    /// Address of Ethernet interface 0
    Slot0,
    /// Address of Ethernet interface 1
    Slot1,
}

/// Computes pointers into the art block
#[derive(Debug, Clone, Copy)]
pub struct CalibrationExtractor {
    region: FlashRegion,
    base: u32,
}

impl CalibrationExtractor {
    /// Create an extractor for a flash region
    pub const fn new(region: &FlashRegion) -> Self {
        Self {
            region: *region,
            base: kseg1_addr(region.base),
        }
    }

    /// Uncached base address of the region
    pub const fn base(&self) -> FlashPointer {
        FlashPointer(self.base)
    }

    /// Start of the wireless calibration blob
    pub const fn wmac_calibration(&self) -> FlashPointer {
        FlashPointer(self.base + self.region.caldata_offset)
    }

    /// Start of a 6-byte MAC address slot
    pub const fn mac_slot(&self, slot: MacSlot) -> FlashPointer {
        FlashPointer(self.base + self.region.mac_offset(slot))
    }
}
