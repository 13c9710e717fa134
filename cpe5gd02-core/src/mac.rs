//! Ethernet MAC addresses
//!
//! The board stores one MAC address per Ethernet interface in flash. The
//! Ethernet glue copies it into the interface configuration, optionally
//! adding a per-device adjustment to the NIC-specific part.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Length of an Ethernet MAC address in bytes
pub const MAC_ADDR_LEN: usize = 6;

/// Mask of the NIC-specific (low 24) bits of a MAC address
const NIC_MASK: u32 = 0x00ff_ffff;

/// A 48-bit Ethernet MAC address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MacAddress(pub [u8; MAC_ADDR_LEN]);

impl MacAddress {
    /// The all-zero address, installed when flash holds no usable address
    pub const ZERO: Self = Self([0; MAC_ADDR_LEN]);

    /// Create an address from raw bytes
    pub const fn new(bytes: [u8; MAC_ADDR_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub const fn octets(&self) -> [u8; MAC_ADDR_LEN] {
        self.0
    }

    /// Check if every byte is zero
    pub const fn is_zero(&self) -> bool {
        let b = &self.0;
        (b[0] | b[1] | b[2] | b[3] | b[4] | b[5]) == 0
    }

    /// Check if the group (multicast) bit is set
    ///
    /// Erased flash (`ff:ff:ff:ff:ff:ff`) reads as a multicast address.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Check if this is a usable unicast station address
    pub const fn is_valid(&self) -> bool {
        !self.is_zero() && !self.is_multicast()
    }

    /// Derive an interface address from the bytes stored in flash
    ///
    /// An invalid source (all-zero, multicast, or erased flash) yields
    /// [`MacAddress::ZERO`] so the driver falls back to its own address.
    /// Otherwise the OUI is copied and `offset` is added to the low 24 bits,
    /// wrapping inside those 24 bits. An offset of 0 copies the source
    /// verbatim.
    pub fn derive(src: &[u8; MAC_ADDR_LEN], offset: i32) -> Self {
        let src = MacAddress(*src);
        if !src.is_valid() {
            return Self::ZERO;
        }

        let b = src.0;
        let nic = u32::from_be_bytes([0, b[3], b[4], b[5]]);
        let nic = (nic as i32).wrapping_add(offset) as u32 & NIC_MASK;
        let [_, n0, n1, n2] = nic.to_be_bytes();

        Self([b[0], b[1], b[2], n0, n1, n2])
    }
}

impl From<[u8; MAC_ADDR_LEN]> for MacAddress {
    fn from(bytes: [u8; MAC_ADDR_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_derive_verbatim() {
        let src = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];
        assert_eq!(MacAddress::derive(&src, 0), MacAddress(src));
    }

    #[test]
    fn test_derive_increment_carries() {
        let src = [0x00, 0x11, 0x22, 0x33, 0x44, 0xff];
        let mac = MacAddress::derive(&src, 1);
        assert_eq!(mac.octets(), [0x00, 0x11, 0x22, 0x33, 0x45, 0x00]);
    }

    #[test]
    fn test_derive_wraps_inside_nic() {
        // Carry out of the NIC part must not touch the OUI
        let src = [0x00, 0x11, 0x22, 0xff, 0xff, 0xff];
        let mac = MacAddress::derive(&src, 1);
        assert_eq!(mac.octets(), [0x00, 0x11, 0x22, 0x00, 0x00, 0x00]);

        let src = [0x00, 0x11, 0x22, 0x00, 0x00, 0x00];
        let mac = MacAddress::derive(&src, -1);
        assert_eq!(mac.octets(), [0x00, 0x11, 0x22, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_derive_rejects_erased_flash() {
        assert_eq!(MacAddress::derive(&[0xff; 6], 0), MacAddress::ZERO);
        assert_eq!(MacAddress::derive(&[0x00; 6], 0), MacAddress::ZERO);
        // Multicast bit set
        let src = [0x01, 0x00, 0x5e, 0x00, 0x00, 0x01];
        assert_eq!(MacAddress::derive(&src, 0), MacAddress::ZERO);
    }

    #[test]
    fn test_validity() {
        assert!(MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]).is_valid());
        assert!(!MacAddress::ZERO.is_valid());
        assert!(MacAddress::ZERO.is_zero());
        assert!(MacAddress::new([0xff; 6]).is_multicast());
    }

    #[test]
    fn test_display() {
        use std::string::ToString;

        let mac = MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x5a]);
        assert_eq!(mac.to_string(), "00:11:22:33:44:5a");
    }

    proptest! {
        #[test]
        fn prop_zero_offset_copies_valid_source(bytes in any::<[u8; 6]>()) {
            let src = MacAddress(bytes);
            prop_assume!(src.is_valid());
            prop_assert_eq!(MacAddress::derive(&bytes, 0), src);
        }

        #[test]
        fn prop_offset_keeps_oui(bytes in any::<[u8; 6]>(), offset in -4096i32..4096) {
            prop_assume!(MacAddress(bytes).is_valid());
            let mac = MacAddress::derive(&bytes, offset);
            prop_assert_eq!(&mac.0[..3], &bytes[..3]);
        }

        #[test]
        fn prop_offset_round_trips(bytes in any::<[u8; 6]>(), offset in -4096i32..4096) {
            prop_assume!(MacAddress(bytes).is_valid());
            let there = MacAddress::derive(&bytes, offset);
            prop_assume!(there.is_valid());
            let back = MacAddress::derive(&there.0, -offset);
            prop_assert_eq!(back.0, bytes);
        }
    }
}
