//! Ethernet and MDIO registration

use crate::config::NetworkInterfaceConfig;
use crate::mac::{MacAddress, MAC_ADDR_LEN};

/// Ethernet MAC and MDIO driver
pub trait EthernetPlatform {
    /// Register an MDIO bus
    ///
    /// `phy_mask` lists PHY addresses the bus must not probe.
    fn register_mdio(&mut self, bus: u8, phy_mask: u32);

    /// Turn the bytes stored in flash into an interface address
    ///
    /// The default follows [`MacAddress::derive`].
    fn derive_mac_address(&mut self, src: &[u8; MAC_ADDR_LEN], offset: i32) -> MacAddress {
        MacAddress::derive(src, offset)
    }

    /// Register an Ethernet interface
    ///
    /// The configuration, MAC address included, is committed here.
    fn register_ethernet(&mut self, config: &NetworkInterfaceConfig);
}
