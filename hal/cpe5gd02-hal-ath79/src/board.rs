//! CPE5GD02 machine entry

use cpe5gd02_core::traits::BoardPlatform;
use cpe5gd02_core::{
    BoardBringup, BringupError, BringupSummary, MachineDescriptor, CPE5GD02, CPE5GD02_MACHINE,
};

use crate::flash::Kseg1Flash;
use crate::mmio::Kseg1Mapper;

/// Machine table entry
pub const MACHINE: MachineDescriptor = CPE5GD02_MACHINE;

/// Bring up the CPE5GD02
///
/// Runs once, during platform init, after the machine id matched
/// [`MACHINE`].
///
/// # Safety
///
/// Must run in kernel mode on a CPE5GD02 (registers and flash are accessed
/// at fixed KSEG1 addresses), and only once.
pub unsafe fn setup<P: BoardPlatform>(platform: &mut P) -> Result<BringupSummary, BringupError> {
    #[cfg(feature = "defmt")]
    defmt::info!("machine: {}", MACHINE.name);

    // SAFETY: forwarded from this function's contract.
    let mut mapper = unsafe { Kseg1Mapper::new() };
    // SAFETY: the art block lies inside the memory-mapped flash window.
    let flash = unsafe { Kseg1Flash::new(&CPE5GD02.art) };

    let summary = BoardBringup::new(&CPE5GD02, platform, &mut mapper, &flash).run()?;

    #[cfg(feature = "defmt")]
    defmt::info!(
        "WAN {} LAN {} GPIO function {:#x}",
        summary.wan_mac,
        summary.lan_mac,
        summary.gpio_function.after
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpe5gd02_core::MachineType;

    #[test]
    fn test_machine_entry() {
        assert_eq!(MACHINE.mach_type, MachineType::Cpe5gd02);
        assert!(MACHINE.matches("CPE5GD02"));
    }
}
