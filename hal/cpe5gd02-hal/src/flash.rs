//! Flash window abstractions
//!
//! On this board the SPI NOR flash is memory mapped, so board data stored in
//! it (MAC addresses, radio calibration) is read at fixed addresses rather
//! than through a storage driver.

/// Errors from flash window reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Read falls (partly) outside the mapped window
    OutOfBounds,
}

/// Read-only view of a memory-mapped flash range
///
/// Addresses are absolute (the same addresses a driver would dereference),
/// not offsets into the window.
pub trait FlashWindow {
    /// First address covered by the window
    fn start(&self) -> u32;

    /// Number of bytes covered by the window
    fn len(&self) -> u32;

    /// Check if the window is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `[addr, addr + len)` lies inside the window
    fn contains(&self, addr: u32, len: usize) -> bool {
        let start = self.start();
        let Some(end) = start.checked_add(self.len()) else {
            return false;
        };
        let Ok(len) = u32::try_from(len) else {
            return false;
        };
        match addr.checked_add(len) {
            Some(last) => addr >= start && last <= end,
            None => false,
        }
    }

    /// Copy `buf.len()` bytes starting at `addr` into `buf`
    fn read(&self, addr: u32, buf: &mut [u8]) -> Result<(), FlashError>;
}
