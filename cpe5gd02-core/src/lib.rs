//! Board bring-up for the CPE5GD02 reference board
//!
//! This crate contains everything about the board that does not touch
//! hardware directly:
//!
//! - Static resource table (LEDs, buttons, flash layout, Ethernet ports)
//! - GPIO function register fix-up
//! - Calibration and MAC pointer arithmetic
//! - MAC address derivation
//! - Bring-up state machine and orchestration
//! - Collaborator traits for the generic platform drivers
//!
//! Register and flash access go through the `cpe5gd02-hal` traits, so the
//! whole sequence runs on the host against mocks.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod bringup;
pub mod calibration;
pub mod config;
pub mod error;
pub mod gpio_mux;
pub mod identity;
pub mod mac;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use bringup::{BoardBringup, BringupSummary};
pub use calibration::{CalibrationExtractor, FlashPointer, MacSlot};
pub use config::{BoardResources, CPE5GD02};
pub use error::BringupError;
pub use gpio_mux::{GpioMux, MuxChange};
pub use identity::{MachineDescriptor, MachineType, CPE5GD02_MACHINE};
pub use mac::{MacAddress, MAC_ADDR_LEN};
pub use state::{BringupState, Step};
pub use traits::BoardPlatform;
