//! Memory-mapped register access
//!
//! A register is never poked through a raw address. Callers ask a
//! [`RegisterMapper`] for a window onto a physical address, use the window,
//! and the mapping is released when the window is dropped. Because release
//! lives in `Drop`, it happens on every exit path, including early returns.

/// Start of the MIPS32 uncached, unmapped kernel segment
pub const KSEG1_BASE: u32 = 0xa000_0000;

/// Physical addresses reachable through a fixed KSEG window (low 512 MiB)
pub const KSEG_PHYS_MASK: u32 = 0x1fff_ffff;

/// Translate a physical address to its uncached KSEG1 alias
pub const fn kseg1_addr(phys: u32) -> u32 {
    (phys & KSEG_PHYS_MASK) | KSEG1_BASE
}

/// Check whether a physical address has a fixed KSEG1 alias
pub const fn is_kseg_reachable(phys: u32) -> bool {
    phys & !KSEG_PHYS_MASK == 0
}

/// Errors from mapping a physical register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MapError {
    /// Address cannot be mapped on this platform
    Unmappable,
    /// Address is not aligned to the register width
    Misaligned,
    /// Requested size does not match a 32-bit register
    InvalidSize,
}

/// Width of every register window in bytes
pub const REGISTER_SIZE: usize = 4;

/// A mapped 32-bit register
///
/// Implementations release the underlying mapping in `Drop`.
pub trait RegisterWindow {
    /// Read the current register value
    fn read(&self) -> u32;

    /// Write a new register value
    fn write(&mut self, value: u32);

    /// Read, transform, and write back the register
    ///
    /// Returns `(old, new)`. The write happens even if the value is
    /// unchanged.
    fn modify<F>(&mut self, f: F) -> (u32, u32)
    where
        F: FnOnce(u32) -> u32,
    {
        let old = self.read();
        let new = f(old);
        self.write(new);
        (old, new)
    }
}

/// Source of scoped register mappings
pub trait RegisterMapper {
    /// Window type handed out by this mapper
    type Window<'a>: RegisterWindow
    where
        Self: 'a;

    /// Map `size` bytes at physical address `phys`
    ///
    /// The mapping stays valid for as long as the returned window lives.
    fn map(&mut self, phys: u32, size: usize) -> Result<Self::Window<'_>, MapError>;
}

/// Validate a register mapping request
///
/// Shared by mapper implementations so every platform rejects the same
/// requests.
pub const fn check_request(phys: u32, size: usize) -> Result<(), MapError> {
    if size != REGISTER_SIZE {
        return Err(MapError::InvalidSize);
    }
    if phys % REGISTER_SIZE as u32 != 0 {
        return Err(MapError::Misaligned);
    }
    Ok(())
}
