//! Bring-up errors
//!
//! Only faults bring-up itself can observe are represented. Collaborators
//! report their own registration failures; a GPIO line claimed twice is
//! rejected when the board table is compiled.

use cpe5gd02_hal::{FlashError, MapError};

use crate::state::{BringupState, Step};

/// Errors that abort bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringupError {
    /// A fixed physical register could not be mapped
    Mapping(MapError),
    /// Board data could not be read from flash
    Flash(FlashError),
    /// A step was run out of sequence or twice
    OutOfOrder {
        /// State bring-up was in
        state: BringupState,
        /// Step that was attempted
        step: Step,
    },
}

impl BringupError {
    /// Check if this is a hardware access fault (as opposed to misuse)
    pub fn is_hardware_fault(&self) -> bool {
        matches!(self, BringupError::Mapping(_) | BringupError::Flash(_))
    }
}

impl From<MapError> for BringupError {
    fn from(e: MapError) -> Self {
        BringupError::Mapping(e)
    }
}

impl From<FlashError> for BringupError {
    fn from(e: FlashError) -> Self {
        BringupError::Flash(e)
    }
}
