//! KSEG1 register mapper
//!
//! The low 512 MiB of physical address space is permanently mapped,
//! uncached, at KSEG1. "Mapping" a register is therefore only validation and
//! address translation; releasing it is a no-op.

use core::marker::PhantomData;
use core::ptr;

use cpe5gd02_hal::mmio::{check_request, is_kseg_reachable, RegisterMapper, RegisterWindow};
use cpe5gd02_hal::{kseg1_addr, MapError};

/// Hands out register windows through KSEG1
pub struct Kseg1Mapper {
    _private: (),
}

impl Kseg1Mapper {
    /// Create the mapper
    ///
    /// # Safety
    ///
    /// Must only be used in kernel mode on an ath79 SoC, where KSEG1 is the
    /// uncached alias of physical memory. Every address it maps is
    /// dereferenced.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

/// One 32-bit register seen through KSEG1
pub struct Kseg1Register<'a> {
    ptr: *mut u32,
    _mapper: PhantomData<&'a mut Kseg1Mapper>,
}

impl Kseg1Register<'_> {
    /// Virtual address of the register
    pub fn addr(&self) -> u32 {
        self.ptr as usize as u32
    }
}

impl RegisterWindow for Kseg1Register<'_> {
    fn read(&self) -> u32 {
        // SAFETY: `ptr` is an aligned KSEG1 alias produced by `map`, and the
        // mapper was created under the contract of `Kseg1Mapper::new`.
        unsafe { ptr::read_volatile(self.ptr) }
    }

    fn write(&mut self, value: u32) {
        // SAFETY: see `read`; the exclusive borrow of the mapper keeps any
        // other window from touching registers meanwhile.
        unsafe { ptr::write_volatile(self.ptr, value) }
    }
}

impl RegisterMapper for Kseg1Mapper {
    type Window<'a> = Kseg1Register<'a>;

    fn map(&mut self, phys: u32, size: usize) -> Result<Kseg1Register<'_>, MapError> {
        check_request(phys, size)?;
        if !is_kseg_reachable(phys) {
            return Err(MapError::Unmappable);
        }

        Ok(Kseg1Register {
            ptr: kseg1_addr(phys) as usize as *mut u32,
            _mapper: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Host tests only exercise validation; no window is ever read or written.

    #[test]
    fn test_map_translates_to_kseg1() {
        let mut mapper = unsafe { Kseg1Mapper::new() };
        let reg = mapper.map(0x1804_006c, 4).unwrap();
        assert_eq!(reg.addr(), 0xb804_006c);
    }

    #[test]
    fn test_map_rejects_high_memory() {
        let mut mapper = unsafe { Kseg1Mapper::new() };
        assert!(matches!(mapper.map(0x2000_0000, 4), Err(MapError::Unmappable)));
    }

    #[test]
    fn test_map_rejects_bad_requests() {
        let mut mapper = unsafe { Kseg1Mapper::new() };
        assert!(matches!(mapper.map(0x1804_006e, 4), Err(MapError::Misaligned)));
        assert!(matches!(mapper.map(0x1804_006c, 2), Err(MapError::InvalidSize)));
    }
}
