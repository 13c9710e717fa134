//! CPE5GD02 Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the board bring-up
//! code needs from the SoC: scoped access to a memory-mapped register and
//! read access to the calibration ("art") flash region. Chip HALs implement
//! them against real hardware; tests implement them against RAM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board bring-up (cpe5gd02-core)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cpe5gd02-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ cpe5gd02-hal- │       │  host mocks   │
//! │    ath79      │       │   (tests)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`mmio::RegisterMapper`], [`mmio::RegisterWindow`] - Scoped MMIO access
//! - [`flash::FlashWindow`] - Memory-mapped flash reads

#![no_std]
#![deny(unsafe_code)]

pub mod flash;
pub mod mmio;

// Re-export key traits at crate root for convenience
pub use flash::{FlashError, FlashWindow};
pub use mmio::{kseg1_addr, MapError, RegisterMapper, RegisterWindow};
