//! ath79 HAL for the CPE5GD02
//!
//! Implements the `cpe5gd02-hal` traits on the QCA9531 by going through the
//! fixed, uncached KSEG1 segment, and provides the board entry point used
//! by the platform's machine table.
//!
//! # Features
//!
//! - `defmt` - Enable debug formatting and logging
//!
//! # Usage
//!
//! ```ignore
//! if cpe5gd02_hal_ath79::MACHINE.matches(machine_id) {
//!     let summary = unsafe { cpe5gd02_hal_ath79::setup(&mut platform) }?;
//! }
//! ```

#![no_std]

pub mod board;
pub mod flash;
pub mod mmio;

pub use board::{setup, MACHINE};
pub use flash::Kseg1Flash;
pub use mmio::{Kseg1Mapper, Kseg1Register};

// Re-export shared types from cpe5gd02-hal
pub use cpe5gd02_hal::{FlashError, MapError};
