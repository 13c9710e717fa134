//! CPE5GD02 resource table
//!
//! The board's physical facts, collected in one constant table. Order of
//! the LED and button lists is significant: downstream drivers index
//! devices by position.

use super::types::{
    ButtonDescriptor, Duplex, EthInterface, EthernetPort, EventType, FlashPlatformData,
    FlashRegion, KeyCode, LedDescriptor, MdioBusConfig, PhyInterfaceMode, PinAssignment, Speed,
    SwitchConfig,
};
use crate::calibration::MacSlot;

#[cfg(feature = "serde")]
use serde::Serialize;

/// LED GPIO lines
pub const GPIO_LED_WIFI_2G: u8 = 1;
pub const GPIO_LED_WAN: u8 = 2;
pub const GPIO_LED_LAN: u8 = 3;
pub const GPIO_LED_WIFI_2G_ANT0: u8 = 11;
pub const GPIO_LED_WIFI_5G_D3: u8 = 12;
pub const GPIO_LED_WIFI_2G_ANT1: u8 = 13;
pub const GPIO_LED_SYSTEM: u8 = 14;
pub const GPIO_LED_WIFI_5G_D5: u8 = 15;
pub const GPIO_LED_WIFI_5G_D4: u8 = 16;
pub const GPIO_LED_WIFI_5G_D2: u8 = 17;

/// Reset button GPIO line
pub const GPIO_BTN_RESET: u8 = 4;

/// Button poll interval in milliseconds
pub const KEYS_POLL_INTERVAL_MS: u32 = 20;

/// Debounce spans this many poll intervals
pub const KEYS_DEBOUNCE_FACTOR: u32 = 3;

/// Button debounce interval in milliseconds
pub const KEYS_DEBOUNCE_INTERVAL_MS: u32 = KEYS_DEBOUNCE_FACTOR * KEYS_POLL_INTERVAL_MS;

/// Physical base of the "art" flash block (last 64 KiB of the 16 MiB window)
pub const ART_PHYS_BASE: u32 = 0x1fff_0000;

/// Size of the "art" flash block
pub const ART_SIZE: u32 = 0x1_0000;

/// Flash offsets inside the art block
pub const MAC0_OFFSET: u32 = 0;
pub const MAC1_OFFSET: u32 = 6;
pub const WMAC_CALDATA_OFFSET: u32 = 0x1000;

/// PHY address of the WAN PHY and the switch port polled on the LAN side
const PHY_ADDR_PORT4: u32 = 1 << 4;

/// Partition table parsers: only the vendor (TP-Link) layout is accepted
pub const PART_PROBES: &[&str] = &["tp-link"];

const LEDS: [LedDescriptor; 10] = [
    LedDescriptor::new("wifi-2g", PinAssignment::active_low(GPIO_LED_WIFI_2G)),
    LedDescriptor::new("wan", PinAssignment::active_low(GPIO_LED_WAN)),
    LedDescriptor::new("lan", PinAssignment::active_low(GPIO_LED_LAN)),
    LedDescriptor::new("wifi-2g-ant0", PinAssignment::active_low(GPIO_LED_WIFI_2G_ANT0)),
    LedDescriptor::new("wifi-5g-d3", PinAssignment::active_low(GPIO_LED_WIFI_5G_D3)),
    LedDescriptor::new("wifi-2g-ant1", PinAssignment::active_low(GPIO_LED_WIFI_2G_ANT1)),
    LedDescriptor::new("system", PinAssignment::active_low(GPIO_LED_SYSTEM)),
    LedDescriptor::new("wifi-5g-d5", PinAssignment::active_low(GPIO_LED_WIFI_5G_D5)),
    LedDescriptor::new("wifi-5g-d4", PinAssignment::active_low(GPIO_LED_WIFI_5G_D4)),
    LedDescriptor::new("wifi-5g-d2", PinAssignment::active_low(GPIO_LED_WIFI_5G_D2)),
];

const BUTTONS: [ButtonDescriptor; 1] = [ButtonDescriptor {
    desc: "reset button",
    pin: PinAssignment::active_low(GPIO_BTN_RESET),
    event_type: EventType::Key,
    code: KeyCode::Restart,
    debounce_ms: KEYS_DEBOUNCE_INTERVAL_MS,
}];

const MDIO_BUSES: [MdioBusConfig; 2] = [
    MdioBusConfig { bus: 0, phy_mask: 0 },
    MdioBusConfig { bus: 1, phy_mask: 0 },
];

/// Everything bring-up needs to know about a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BoardResources {
    /// SPI NOR flash driver parameters
    pub flash: FlashPlatformData,
    /// LEDs, in device index order
    pub leds: &'static [LedDescriptor],
    /// Polled buttons, in device index order
    pub buttons: &'static [ButtonDescriptor],
    /// Button poll interval in milliseconds
    pub button_poll_interval_ms: u32,
    /// Flash block with MAC addresses and calibration data
    pub art: FlashRegion,
    /// MDIO buses, in registration order
    pub mdio_buses: &'static [MdioBusConfig],
    /// Ethernet ports, in registration order
    pub ethernet: [EthernetPort; 2],
}

impl BoardResources {
    /// Number of GPIO lines claimed by LEDs and buttons
    pub const fn gpio_count(&self) -> usize {
        self.leds.len() + self.buttons.len()
    }

    /// GPIO line of the `i`-th claim, LEDs first
    ///
    /// Panics if `i >= gpio_count()`.
    pub const fn gpio_at(&self, i: usize) -> u8 {
        if i < self.leds.len() {
            self.leds[i].pin.gpio
        } else {
            self.buttons[i - self.leds.len()].pin.gpio
        }
    }

    /// Find a GPIO line claimed twice
    ///
    /// Returns the first duplicated line, or `None` if every LED and button
    /// owns its line exclusively.
    pub const fn find_gpio_conflict(&self) -> Option<u8> {
        let n = self.gpio_count();
        let mut i = 0;
        while i < n {
            let mut j = i + 1;
            while j < n {
                if self.gpio_at(i) == self.gpio_at(j) {
                    return Some(self.gpio_at(i));
                }
                j += 1;
            }
            i += 1;
        }
        None
    }
}

const BOARD: BoardResources = BoardResources {
    flash: FlashPlatformData {
        part_probes: PART_PROBES,
    },
    leds: &LEDS,
    buttons: &BUTTONS,
    button_poll_interval_ms: KEYS_POLL_INTERVAL_MS,
    art: FlashRegion {
        base: ART_PHYS_BASE,
        size: ART_SIZE,
        mac0_offset: MAC0_OFFSET,
        mac1_offset: MAC1_OFFSET,
        caldata_offset: WMAC_CALDATA_OFFSET,
    },
    mdio_buses: &MDIO_BUSES,
    ethernet: [
        // WAN port: dedicated PHY on MII
        EthernetPort {
            interface: EthInterface::Wan,
            phy_mode: PhyInterfaceMode::Mii,
            speed: Speed::Mbps100,
            duplex: Duplex::Full,
            phy_mask: PHY_ADDR_PORT4,
            switch: None,
            mac_slot: MacSlot::Slot0,
            mac_adjustment: 0,
        },
        // LAN ports: built-in switch on GMII
        EthernetPort {
            interface: EthInterface::Lan,
            phy_mode: PhyInterfaceMode::Gmii,
            speed: Speed::Mbps1000,
            duplex: Duplex::Full,
            phy_mask: 0,
            switch: Some(SwitchConfig {
                phy_poll_mask: PHY_ADDR_PORT4,
                phy4_mii_en: true,
            }),
            mac_slot: MacSlot::Slot1,
            mac_adjustment: 0,
        },
    ],
};

// A shared line would silently lose either the LED or the button.
const _: () = assert!(
    BOARD.find_gpio_conflict().is_none(),
    "GPIO line claimed by more than one LED/button"
);
const _: () = assert!(BOARD.art.offsets_disjoint(), "art flash offsets overlap");

/// The CPE5GD02 board
pub static CPE5GD02: BoardResources = BOARD;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_lines_unique() {
        assert_eq!(CPE5GD02.find_gpio_conflict(), None);

        let mut seen = 0u32;
        for i in 0..CPE5GD02.gpio_count() {
            let bit = 1u32 << CPE5GD02.gpio_at(i);
            assert_eq!(seen & bit, 0, "GPIO {} claimed twice", CPE5GD02.gpio_at(i));
            seen |= bit;
        }
        assert_eq!(seen.count_ones(), 11);
    }

    #[test]
    fn test_conflict_detected() {
        static CLASH: [LedDescriptor; 1] = [LedDescriptor::new(
            "clash",
            PinAssignment::active_low(GPIO_BTN_RESET),
        )];
        let board = BoardResources {
            leds: &CLASH,
            ..CPE5GD02
        };
        assert_eq!(board.find_gpio_conflict(), Some(GPIO_BTN_RESET));
    }

    #[test]
    fn test_led_order() {
        let names: heapless::Vec<&str, 10> = CPE5GD02.leds.iter().map(|l| l.name).collect();
        assert_eq!(
            names.as_slice(),
            &[
                "wifi-2g",
                "wan",
                "lan",
                "wifi-2g-ant0",
                "wifi-5g-d3",
                "wifi-2g-ant1",
                "system",
                "wifi-5g-d5",
                "wifi-5g-d4",
                "wifi-5g-d2",
            ]
        );
        assert!(CPE5GD02.leds.iter().all(|l| l.pin.is_active_low()));
    }

    #[test]
    fn test_reset_button() {
        assert_eq!(CPE5GD02.buttons.len(), 1);
        let button = &CPE5GD02.buttons[0];
        assert_eq!(button.pin.gpio, 4);
        assert!(button.pin.is_active_low());
        assert_eq!(button.code, KeyCode::Restart);
        assert_eq!(button.debounce_ms, 60);
        assert_eq!(CPE5GD02.button_poll_interval_ms, 20);
    }

    #[test]
    fn test_flash_layout() {
        let art = &CPE5GD02.art;
        assert_eq!(art.base, 0x1fff_0000);
        assert_eq!(
            (art.mac0_offset, art.mac1_offset, art.caldata_offset),
            (0, 6, 0x1000)
        );
        assert!(art.offsets_disjoint());
        assert_eq!(CPE5GD02.flash.part_probes, &["tp-link"]);
    }

    #[test]
    fn test_ethernet_ports() {
        let [wan, lan] = CPE5GD02.ethernet;

        assert_eq!(wan.interface, EthInterface::Wan);
        assert_eq!(wan.phy_mode, PhyInterfaceMode::Mii);
        assert_eq!(wan.speed, Speed::Mbps100);
        assert_eq!(wan.duplex, Duplex::Full);
        assert_eq!(wan.phy_mask, 1 << 4);
        assert_eq!(wan.switch, None);
        assert_eq!(wan.mac_slot, MacSlot::Slot0);

        assert_eq!(lan.interface, EthInterface::Lan);
        assert_eq!(lan.phy_mode, PhyInterfaceMode::Gmii);
        assert_eq!(lan.speed, Speed::Mbps1000);
        assert_eq!(lan.duplex, Duplex::Full);
        let switch = lan.switch.unwrap();
        assert_eq!(switch.phy_poll_mask, 1 << 4);
        assert!(switch.phy4_mii_en);
        assert_eq!(lan.mac_slot, MacSlot::Slot1);

        assert!(CPE5GD02.ethernet.iter().all(|p| p.mac_adjustment == 0));
    }

    #[test]
    fn test_mdio_buses() {
        let buses: heapless::Vec<(u8, u32), 2> =
            CPE5GD02.mdio_buses.iter().map(|b| (b.bus, b.phy_mask)).collect();
        assert_eq!(buses.as_slice(), &[(0, 0), (1, 0)]);
    }
}
