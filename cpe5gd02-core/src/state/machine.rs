//! Bring-up states

use super::step::Step;
use crate::error::BringupError;

/// How far bring-up has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringupState {
    /// Nothing registered yet
    Unstarted,
    /// Boot flash registered
    FlashReady,
    /// Clock observation disabled, LED lines free
    GpioFixed,
    /// LEDs, buttons and USB registered
    IoDevicesReady,
    /// PCI, wireless MAC and MDIO buses registered
    BusReady,
    /// Both Ethernet interfaces registered; bring-up is complete
    NetworkReady,
}

impl BringupState {
    /// Check if bring-up is complete
    pub fn is_terminal(&self) -> bool {
        matches!(self, BringupState::NetworkReady)
    }

    /// Check if `step` may run in this state
    pub fn allows(&self, step: Step) -> bool {
        *self == step.precondition()
    }

    /// Run `step` from this state and return the next state
    ///
    /// Steps can only run in sequence and only once; anything else is an
    /// ordering error and leaves the state unchanged.
    pub fn transition(self, step: Step) -> Result<Self, BringupError> {
        if self.allows(step) {
            Ok(step.outcome())
        } else {
            Err(BringupError::OutOfOrder { state: self, step })
        }
    }
}
