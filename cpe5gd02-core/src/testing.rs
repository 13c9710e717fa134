//! Host test doubles
//!
//! A platform that records every registration, a register mapper backed by
//! a single `u32`, and a flash window backed by RAM.

use cpe5gd02_hal::mmio::{check_request, RegisterMapper, RegisterWindow};
use cpe5gd02_hal::{kseg1_addr, FlashError, FlashWindow, MapError};
use heapless::Vec;

use crate::calibration::FlashPointer;
use crate::config::board::{ART_PHYS_BASE, MAC0_OFFSET, MAC1_OFFSET, WMAC_CALDATA_OFFSET};
use crate::config::{ButtonDescriptor, FlashPlatformData, LedDescriptor, NetworkInterfaceConfig};
use crate::mac::{MacAddress, MAC_ADDR_LEN};
use crate::traits::{
    BusPlatform, ButtonPlatform, DeviceId, EthernetPlatform, FlashPlatform, LedPlatform,
    WirelessPlatform,
};

/// One registration call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Flash(FlashPlatformData),
    Leds(DeviceId, &'static [LedDescriptor]),
    Buttons(DeviceId, u32, &'static [ButtonDescriptor]),
    Usb,
    Pci,
    Wmac(FlashPointer, Option<MacAddress>),
    Mdio(u8, u32),
    DeriveMac([u8; MAC_ADDR_LEN], i32),
    Ethernet(NetworkInterfaceConfig),
}

/// Platform that records registrations in call order
pub struct RecordingPlatform {
    pub calls: Vec<Call, 32>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    fn record(&mut self, call: Call) {
        self.calls.push(call).expect("too many registration calls");
    }

    /// Ethernet configurations, in registration order
    pub fn ethernet(&self) -> Vec<NetworkInterfaceConfig, 4> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Ethernet(config) => Some(*config),
                _ => None,
            })
            .collect()
    }
}

impl FlashPlatform for RecordingPlatform {
    fn register_flash(&mut self, data: &FlashPlatformData) {
        self.record(Call::Flash(*data));
    }
}

impl LedPlatform for RecordingPlatform {
    fn register_leds(&mut self, id: DeviceId, leds: &'static [LedDescriptor]) {
        self.record(Call::Leds(id, leds));
    }
}

impl ButtonPlatform for RecordingPlatform {
    fn register_polled_buttons(
        &mut self,
        id: DeviceId,
        poll_interval_ms: u32,
        buttons: &'static [ButtonDescriptor],
    ) {
        self.record(Call::Buttons(id, poll_interval_ms, buttons));
    }
}

impl BusPlatform for RecordingPlatform {
    fn register_usb(&mut self) {
        self.record(Call::Usb);
    }

    fn register_pci(&mut self) {
        self.record(Call::Pci);
    }
}

impl WirelessPlatform for RecordingPlatform {
    fn register_wmac(&mut self, calibration: FlashPointer, mac_override: Option<MacAddress>) {
        self.record(Call::Wmac(calibration, mac_override));
    }
}

impl EthernetPlatform for RecordingPlatform {
    fn register_mdio(&mut self, bus: u8, phy_mask: u32) {
        self.record(Call::Mdio(bus, phy_mask));
    }

    fn derive_mac_address(&mut self, src: &[u8; MAC_ADDR_LEN], offset: i32) -> MacAddress {
        self.record(Call::DeriveMac(*src, offset));
        MacAddress::derive(src, offset)
    }

    fn register_ethernet(&mut self, config: &NetworkInterfaceConfig) {
        self.record(Call::Ethernet(*config));
    }
}

/// Register mapper backed by one value
pub struct MockMapper {
    /// Current register value
    pub value: u32,
    /// Successful mappings
    pub maps: u32,
    /// Released mappings
    pub releases: u32,
    /// Every value written, in order
    pub writes: Vec<u32, 8>,
    /// Last successful `(phys, size)` request
    pub last_request: Option<(u32, usize)>,
    fail: Option<MapError>,
}

impl MockMapper {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            maps: 0,
            releases: 0,
            writes: Vec::new(),
            last_request: None,
            fail: None,
        }
    }

    /// Mapper that rejects every request
    pub fn failing(err: MapError) -> Self {
        Self {
            fail: Some(err),
            ..Self::new(0)
        }
    }
}

pub struct MockWindow<'a> {
    mapper: &'a mut MockMapper,
}

impl RegisterWindow for MockWindow<'_> {
    fn read(&self) -> u32 {
        self.mapper.value
    }

    fn write(&mut self, value: u32) {
        self.mapper.value = value;
        self.mapper.writes.push(value).expect("too many register writes");
    }
}

impl Drop for MockWindow<'_> {
    fn drop(&mut self) {
        self.mapper.releases += 1;
    }
}

impl RegisterMapper for MockMapper {
    type Window<'a> = MockWindow<'a>;

    fn map(&mut self, phys: u32, size: usize) -> Result<MockWindow<'_>, MapError> {
        if let Some(err) = self.fail {
            return Err(err);
        }
        check_request(phys, size)?;

        self.maps += 1;
        self.last_request = Some((phys, size));
        Ok(MockWindow { mapper: self })
    }
}

/// Size of the RAM-backed art image (MAC slots plus the start of caldata)
const IMAGE_SIZE: usize = WMAC_CALDATA_OFFSET as usize + 16;

/// RAM-backed view of the art flash block
pub struct RamFlash {
    start: u32,
    image: [u8; IMAGE_SIZE],
}

impl RamFlash {
    /// Erased flash with the two MAC slots filled in
    pub fn with_macs(mac0: [u8; MAC_ADDR_LEN], mac1: [u8; MAC_ADDR_LEN]) -> Self {
        let mut image = [0xff; IMAGE_SIZE];
        let mac0_at = MAC0_OFFSET as usize;
        let mac1_at = MAC1_OFFSET as usize;
        image[mac0_at..mac0_at + MAC_ADDR_LEN].copy_from_slice(&mac0);
        image[mac1_at..mac1_at + MAC_ADDR_LEN].copy_from_slice(&mac1);

        Self {
            start: kseg1_addr(ART_PHYS_BASE),
            image,
        }
    }

    /// Window that does not cover the art block at all
    pub fn unreadable() -> Self {
        Self {
            start: 0,
            image: [0xff; IMAGE_SIZE],
        }
    }
}

impl FlashWindow for RamFlash {
    fn start(&self) -> u32 {
        self.start
    }

    fn len(&self) -> u32 {
        IMAGE_SIZE as u32
    }

    fn read(&self, addr: u32, buf: &mut [u8]) -> Result<(), FlashError> {
        if !self.contains(addr, buf.len()) {
            return Err(FlashError::OutOfBounds);
        }
        let at = (addr - self.start) as usize;
        buf.copy_from_slice(&self.image[at..at + buf.len()]);
        Ok(())
    }
}
