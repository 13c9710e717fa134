//! Board bring-up
//!
//! Registers every on-board device with its platform driver, in the one
//! order that works on this board:
//!
//! 1. Boot flash
//! 2. GPIO function fix-up (frees the LED lines)
//! 3. LEDs, reset button, USB host
//! 4. PCI, wireless MAC (with calibration pointer), MDIO buses 0 and 1
//! 5. MAC addresses from flash, then WAN and LAN interfaces
//!
//! Every step is also callable on its own; the state machine rejects any
//! step run out of order or twice. Bring-up is not transactional: a failed
//! step leaves earlier registrations in place.

use cpe5gd02_hal::{FlashWindow, RegisterMapper};

use crate::calibration::CalibrationExtractor;
use crate::config::{BoardResources, EthernetPort, NetworkInterfaceConfig};
use crate::error::BringupError;
use crate::gpio_mux::{GpioMux, MuxChange};
use crate::mac::{MacAddress, MAC_ADDR_LEN};
use crate::state::{BringupState, Step};
use crate::traits::{BoardPlatform, DeviceId};

/// What bring-up did, for the caller to log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BringupSummary {
    /// Final state (always `NetworkReady`)
    pub state: BringupState,
    /// GPIO function register before and after the fix-up
    pub gpio_function: MuxChange,
    /// Address installed on the WAN interface
    pub wan_mac: MacAddress,
    /// Address installed on the LAN interface
    pub lan_mac: MacAddress,
}

/// One-shot bring-up of a board
pub struct BoardBringup<'a, P, M, F> {
    resources: &'static BoardResources,
    platform: &'a mut P,
    mapper: &'a mut M,
    flash: &'a F,
    mux: GpioMux,
    state: BringupState,
}

impl<'a, P, M, F> BoardBringup<'a, P, M, F>
where
    P: BoardPlatform,
    M: RegisterMapper,
    F: FlashWindow,
{
    /// Prepare bring-up
    ///
    /// # Arguments
    /// - `resources`: The board's resource table
    /// - `platform`: Registration interfaces of the platform drivers
    /// - `mapper`: Source of register mappings (GPIO function fix-up)
    /// - `flash`: Memory-mapped view of the board data flash block
    pub fn new(
        resources: &'static BoardResources,
        platform: &'a mut P,
        mapper: &'a mut M,
        flash: &'a F,
    ) -> Self {
        Self {
            resources,
            platform,
            mapper,
            flash,
            mux: GpioMux::new(),
            state: BringupState::Unstarted,
        }
    }

    /// Current bring-up state
    pub fn state(&self) -> BringupState {
        self.state
    }

    /// Run every step in order
    pub fn run(mut self) -> Result<BringupSummary, BringupError> {
        log_info!("board bring-up starting");

        self.register_flash()?;
        let gpio_function = self.fix_gpio_function()?;
        self.register_io_devices()?;
        self.register_buses()?;
        let [wan, lan] = self.register_network()?;

        log_info!("board bring-up complete");

        Ok(BringupSummary {
            state: self.state,
            gpio_function,
            wan_mac: wan.mac,
            lan_mac: lan.mac,
        })
    }

    /// Check `step` may run now and return the state it leads to
    fn begin(&self, step: Step) -> Result<BringupState, BringupError> {
        self.state.transition(step).map_err(|e| {
            log_error!("bring-up step {:?} not allowed in {:?}", step, self.state);
            e
        })
    }

    /// Register the boot flash
    pub fn register_flash(&mut self) -> Result<(), BringupError> {
        let next = self.begin(Step::RegisterFlash)?;

        let flash = &self.resources.flash;
        log_info!("registering flash, {} partition parser(s)", flash.part_probes.len());
        self.platform.register_flash(flash);

        self.state = next;
        Ok(())
    }

    /// Disable clock observation so the LED lines can be claimed
    ///
    /// A mapping failure here aborts bring-up: registering the LEDs on top
    /// of an active clock output would fight over the pin.
    pub fn fix_gpio_function(&mut self) -> Result<MuxChange, BringupError> {
        let next = self.begin(Step::FixGpioFunction)?;

        let change = self.mux.apply(&mut *self.mapper).map_err(|e| {
            log_error!("cannot map GPIO function register {:#x}: {:?}", self.mux.addr(), e);
            BringupError::Mapping(e)
        })?;
        log_debug!("GPIO function {:#x} -> {:#x}", change.before, change.after);

        self.state = next;
        Ok(change)
    }

    /// Register LEDs, the polled reset button and the USB host
    pub fn register_io_devices(&mut self) -> Result<(), BringupError> {
        let next = self.begin(Step::RegisterIoDevices)?;

        let r = self.resources;
        log_info!("registering {} LEDs, {} button(s)", r.leds.len(), r.buttons.len());
        self.platform.register_leds(DeviceId::None, r.leds);
        self.platform
            .register_polled_buttons(DeviceId::None, r.button_poll_interval_ms, r.buttons);
        self.platform.register_usb();

        self.state = next;
        Ok(())
    }

    /// Register PCI, the wireless MAC and the MDIO buses
    pub fn register_buses(&mut self) -> Result<(), BringupError> {
        let next = self.begin(Step::RegisterBuses)?;

        let r = self.resources;
        let art = CalibrationExtractor::new(&r.art);

        self.platform.register_pci();

        let caldata = art.wmac_calibration();
        log_info!("registering WMAC, calibration data at {:#x}", caldata.addr());
        self.platform.register_wmac(caldata, None);

        for mdio in r.mdio_buses {
            self.platform.register_mdio(mdio.bus, mdio.phy_mask);
        }

        self.state = next;
        Ok(())
    }

    /// Install MAC addresses and register the Ethernet interfaces
    ///
    /// Returns the configurations as registered, WAN first.
    pub fn register_network(&mut self) -> Result<[NetworkInterfaceConfig; 2], BringupError> {
        let next = self.begin(Step::RegisterNetwork)?;

        // Registration commits the address, so both are read up front
        let art = CalibrationExtractor::new(&self.resources.art);
        let [wan, lan] = self.resources.ethernet;
        let configs = [
            wan.with_mac(self.read_mac(&art, &wan)?),
            lan.with_mac(self.read_mac(&art, &lan)?),
        ];

        for config in &configs {
            log_info!(
                "registering eth{}: {} Mb/s, MAC {}",
                config.interface.index(),
                config.speed.mbps(),
                config.mac
            );
            self.platform.register_ethernet(config);
        }

        self.state = next;
        Ok(configs)
    }

    /// Read a port's MAC slot and let the Ethernet glue derive its address
    fn read_mac(
        &mut self,
        art: &CalibrationExtractor,
        port: &EthernetPort,
    ) -> Result<MacAddress, BringupError> {
        let slot = art.mac_slot(port.mac_slot);
        let mut src = [0u8; MAC_ADDR_LEN];
        self.flash.read(slot.addr(), &mut src).map_err(|e| {
            log_error!("cannot read MAC slot at {:#x}: {:?}", slot.addr(), e);
            BringupError::Flash(e)
        })?;

        if !MacAddress::new(src).is_valid() {
            log_warn!(
                "eth{}: no valid MAC address in flash at {:#x}",
                port.interface.index(),
                slot.addr()
            );
        }

        Ok(self.platform.derive_mac_address(&src, port.mac_adjustment))
    }
}
