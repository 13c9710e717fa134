//! Configuration types
//!
//! These types describe the board's physical resources: which GPIO line
//! does what, where board data lives in flash, and how each Ethernet port is
//! wired. Everything is `Copy` and built with `const fn` so the board table
//! is a compile-time constant.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::calibration::MacSlot;
use crate::mac::{MacAddress, MAC_ADDR_LEN};

/// Signal polarity of a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Polarity {
    /// Asserted when the line is high
    #[default]
    ActiveHigh,
    /// Asserted when the line is low
    ActiveLow,
}

/// Physical GPIO line for a logical role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PinAssignment {
    /// SoC GPIO line number
    pub gpio: u8,
    /// Line polarity
    pub polarity: Polarity,
}

impl PinAssignment {
    /// Create an active-high pin
    pub const fn active_high(gpio: u8) -> Self {
        Self {
            gpio,
            polarity: Polarity::ActiveHigh,
        }
    }

    /// Create an active-low (inverted) pin
    pub const fn active_low(gpio: u8) -> Self {
        Self {
            gpio,
            polarity: Polarity::ActiveLow,
        }
    }

    /// Check if the pin is active-low
    pub const fn is_active_low(&self) -> bool {
        matches!(self.polarity, Polarity::ActiveLow)
    }
}

/// GPIO-driven LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LedDescriptor {
    /// LED class device name
    pub name: &'static str,
    /// GPIO line driving the LED
    pub pin: PinAssignment,
}

impl LedDescriptor {
    /// Create an LED descriptor
    pub const fn new(name: &'static str, pin: PinAssignment) -> Self {
        Self { name, pin }
    }
}

/// Input event class reported by a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u16)]
pub enum EventType {
    /// Key press/release (`EV_KEY`)
    Key = 0x01,
}

/// Logical action of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u16)]
pub enum KeyCode {
    /// Reboot / factory-reset key (`KEY_RESTART`)
    Restart = 0x198,
}

impl KeyCode {
    /// Get the input subsystem key code
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Polled GPIO button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ButtonDescriptor {
    /// Human-readable description
    pub desc: &'static str,
    /// GPIO line the button is wired to
    pub pin: PinAssignment,
    /// Event class
    pub event_type: EventType,
    /// Key code reported on press
    pub code: KeyCode,
    /// Debounce interval in milliseconds
    pub debounce_ms: u32,
}

/// Parameters handed to the SPI NOR flash driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlashPlatformData {
    /// Partition table parsers to try, in order
    pub part_probes: &'static [&'static str],
}

/// Flash region holding board data (MAC addresses, radio calibration)
///
/// The region is read through its uncached KSEG1 alias. Offsets are
/// relative to `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlashRegion {
    /// Physical base address
    pub base: u32,
    /// Region size in bytes
    pub size: u32,
    /// MAC address for Ethernet interface 0
    pub mac0_offset: u32,
    /// MAC address for Ethernet interface 1
    pub mac1_offset: u32,
    /// Start of the wireless calibration blob
    pub caldata_offset: u32,
}

impl FlashRegion {
    /// Offset of a MAC slot
    pub const fn mac_offset(&self, slot: MacSlot) -> u32 {
        match slot {
            MacSlot::Slot0 => self.mac0_offset,
            MacSlot::Slot1 => self.mac1_offset,
        }
    }

    /// Check that the MAC slots and the calibration blob do not overlap
    ///
    /// The calibration blob has no fixed length; it only has to start past
    /// both MAC slots.
    pub const fn offsets_disjoint(&self) -> bool {
        let mac = MAC_ADDR_LEN as u32;
        let (lo, hi) = if self.mac0_offset <= self.mac1_offset {
            (self.mac0_offset, self.mac1_offset)
        } else {
            (self.mac1_offset, self.mac0_offset)
        };

        lo + mac <= hi && hi + mac <= self.caldata_offset && self.caldata_offset < self.size
    }
}

/// PHY interface mode between MAC and PHY/switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PhyInterfaceMode {
    /// Media Independent Interface (10/100)
    Mii,
    /// Gigabit Media Independent Interface
    Gmii,
}

/// Link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Speed {
    /// 10 Mb/s
    Mbps10,
    /// 100 Mb/s
    Mbps100,
    /// 1000 Mb/s
    Mbps1000,
}

impl Speed {
    /// Speed in Mb/s
    pub const fn mbps(self) -> u32 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
            Speed::Mbps1000 => 1000,
        }
    }
}

/// Link duplex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    Full,
}

/// Ethernet interface on the SoC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u8)]
pub enum EthInterface {
    /// GE0, the WAN port
    Wan = 0,
    /// GE1, behind the built-in switch
    Lan = 1,
}

impl EthInterface {
    /// Interface index as used by the Ethernet driver
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Built-in switch settings carried by the LAN interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SwitchConfig {
    /// PHY addresses the switch driver polls for link changes
    pub phy_poll_mask: u32,
    /// Force port 4 into MII mode
    pub phy4_mii_en: bool,
}

/// MDIO bus registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MdioBusConfig {
    /// MDIO bus index
    pub bus: u8,
    /// PHY addresses to skip when probing (empty = probe all)
    pub phy_mask: u32,
}

/// Static wiring of one Ethernet port
///
/// Everything except the MAC address, which only exists once it has been
/// read from flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EthernetPort {
    /// Interface this port configures
    pub interface: EthInterface,
    /// MAC-to-PHY interface mode
    pub phy_mode: PhyInterfaceMode,
    /// Fixed link speed
    pub speed: Speed,
    /// Fixed link duplex
    pub duplex: Duplex,
    /// PHY addresses attached to this interface
    pub phy_mask: u32,
    /// Switch settings, for interfaces behind the built-in switch
    pub switch: Option<SwitchConfig>,
    /// Flash slot holding this interface's MAC address
    pub mac_slot: MacSlot,
    /// Adjustment added to the NIC part of the stored MAC address
    pub mac_adjustment: i32,
}

impl EthernetPort {
    /// Complete the port configuration with its MAC address
    pub const fn with_mac(&self, mac: MacAddress) -> NetworkInterfaceConfig {
        NetworkInterfaceConfig {
            interface: self.interface,
            phy_mode: self.phy_mode,
            speed: self.speed,
            duplex: self.duplex,
            phy_mask: self.phy_mask,
            switch: self.switch,
            mac,
        }
    }
}

/// Complete configuration handed to the Ethernet driver on registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NetworkInterfaceConfig {
    /// Interface being registered
    pub interface: EthInterface,
    /// MAC-to-PHY interface mode
    pub phy_mode: PhyInterfaceMode,
    /// Fixed link speed
    pub speed: Speed,
    /// Fixed link duplex
    pub duplex: Duplex,
    /// PHY addresses attached to this interface
    pub phy_mask: u32,
    /// Switch settings, if any
    pub switch: Option<SwitchConfig>,
    /// Station address
    pub mac: MacAddress,
}
