//! Bring-up steps

use super::machine::BringupState;

/// Steps of board bring-up, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Register the SPI NOR flash
    RegisterFlash,
    /// Disable clock observation in the GPIO function register
    FixGpioFunction,
    /// Register LEDs, buttons and the USB host
    RegisterIoDevices,
    /// Register PCI, the wireless MAC and the MDIO buses
    RegisterBuses,
    /// Install MAC addresses and register both Ethernet interfaces
    RegisterNetwork,
}

impl Step {
    /// All steps, in the only order they may run
    pub const SEQUENCE: [Step; 5] = [
        Step::RegisterFlash,
        Step::FixGpioFunction,
        Step::RegisterIoDevices,
        Step::RegisterBuses,
        Step::RegisterNetwork,
    ];

    /// State the board must be in before this step
    pub const fn precondition(self) -> BringupState {
        match self {
            Step::RegisterFlash => BringupState::Unstarted,
            // LED lines are only free once clock observation is off
            Step::FixGpioFunction => BringupState::FlashReady,
            Step::RegisterIoDevices => BringupState::GpioFixed,
            Step::RegisterBuses => BringupState::IoDevicesReady,
            Step::RegisterNetwork => BringupState::BusReady,
        }
    }

    /// State the board is in after this step
    pub const fn outcome(self) -> BringupState {
        match self {
            Step::RegisterFlash => BringupState::FlashReady,
            Step::FixGpioFunction => BringupState::GpioFixed,
            Step::RegisterIoDevices => BringupState::IoDevicesReady,
            Step::RegisterBuses => BringupState::BusReady,
            Step::RegisterNetwork => BringupState::NetworkReady,
        }
    }
}
