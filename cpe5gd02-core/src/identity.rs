//! Machine identity
//!
//! Platform code outside this crate picks the board (from the boot loader's
//! machine string) and then runs its bring-up. These are the values it
//! matches against.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Supported machine types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MachineType {
    /// CPE5GD02 reference board
    Cpe5gd02,
}

/// Identity of a supported machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MachineDescriptor {
    /// Machine type constant
    pub mach_type: MachineType,
    /// Machine id passed by the boot loader
    pub id: &'static str,
    /// Human-readable board name
    pub name: &'static str,
}

impl MachineDescriptor {
    /// Check if a boot loader machine id selects this machine
    pub fn matches(&self, id: &str) -> bool {
        self.id == id.trim()
    }
}

/// The CPE5GD02 reference board
pub const CPE5GD02_MACHINE: MachineDescriptor = MachineDescriptor {
    mach_type: MachineType::Cpe5gd02,
    id: "CPE5GD02",
    name: "CPE5GD02 board",
};
