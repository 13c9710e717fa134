//! GPIO function register fix-up
//!
//! On the QCA9531 the GPIO function register can route CPU_CLK/4 out to a
//! pin for clock observation. Out of reset that function sits on a line the
//! board uses for an LED, so it has to be switched off before the LED driver
//! claims its GPIOs.

use cpe5gd02_hal::mmio::{RegisterMapper, RegisterWindow, REGISTER_SIZE};
use cpe5gd02_hal::MapError;

/// Physical base of the SoC GPIO block
pub const AR71XX_GPIO_BASE: u32 = 0x1804_0000;

/// Offset of the GPIO function register
pub const GPIO_REG_FUNC: u32 = 0x6c;

/// Physical address of the GPIO function register
pub const GPIO_FUNC_ADDR: u32 = AR71XX_GPIO_BASE + GPIO_REG_FUNC;

/// CPU_CLK/4 observation enable
pub const GPIO_FUNC_CLK_OBS4_EN: u32 = 1 << 7;

/// Register value with clock observation disabled
pub const fn disable_clock_observation(value: u32) -> u32 {
    value & !GPIO_FUNC_CLK_OBS4_EN
}

/// Register values around the fix-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MuxChange {
    /// Value read from the register
    pub before: u32,
    /// Value written back
    pub after: u32,
}

impl MuxChange {
    /// Check if the fix-up changed the register
    pub const fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Read-modify-write of the GPIO function register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioMux {
    addr: u32,
}

impl Default for GpioMux {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioMux {
    /// Fix-up for the SoC's GPIO function register
    pub const fn new() -> Self {
        Self {
            addr: GPIO_FUNC_ADDR,
        }
    }

    /// Physical address this fix-up touches
    pub const fn addr(&self) -> u32 {
        self.addr
    }

    /// Clear the clock observation bit
    ///
    /// Maps the register, reads it, writes it back with the bit cleared
    /// (even if it was already clear) and unmaps it. The mapping never
    /// outlives this call. A mapping failure is returned as is; there is no
    /// retry.
    pub fn apply<M: RegisterMapper>(&self, mapper: &mut M) -> Result<MuxChange, MapError> {
        let mut reg = mapper.map(self.addr, REGISTER_SIZE)?;
        let (before, after) = reg.modify(disable_clock_observation);
        drop(reg);

        Ok(MuxChange { before, after })
    }
}
