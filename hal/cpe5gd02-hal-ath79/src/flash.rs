//! Memory-mapped SPI NOR flash
//!
//! The flash controller maps the whole chip at physical 0x1f00_0000, so
//! board data is read straight through KSEG1.

use core::ptr;

use cpe5gd02_core::config::FlashRegion;
use cpe5gd02_hal::{kseg1_addr, FlashError, FlashWindow};

/// Read-only KSEG1 view of one flash region
pub struct Kseg1Flash {
    start: u32,
    len: u32,
}

impl Kseg1Flash {
    /// View a flash region
    ///
    /// # Safety
    ///
    /// `region` must describe flash that is memory mapped (and stays mapped)
    /// on the running SoC.
    pub unsafe fn new(region: &FlashRegion) -> Self {
        Self {
            start: kseg1_addr(region.base),
            len: region.size,
        }
    }
}

impl FlashWindow for Kseg1Flash {
    fn start(&self) -> u32 {
        self.start
    }

    fn len(&self) -> u32 {
        self.len
    }

    fn read(&self, addr: u32, buf: &mut [u8]) -> Result<(), FlashError> {
        if !self.contains(addr, buf.len()) {
            return Err(FlashError::OutOfBounds);
        }

        let src = addr as usize as *const u8;
        for (i, byte) in buf.iter_mut().enumerate() {
            // SAFETY: `[addr, addr + buf.len())` was checked against the
            // window, which the constructor's contract guarantees is mapped.
            *byte = unsafe { ptr::read_volatile(src.add(i)) };
        }
        Ok(())
    }
}
