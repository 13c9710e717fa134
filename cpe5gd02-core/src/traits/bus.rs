//! USB and PCI host registration

/// On-chip bus host controllers
pub trait BusPlatform {
    /// Register the USB host controller
    fn register_usb(&mut self);

    /// Register the PCIe root complex (expansion radios)
    fn register_pci(&mut self);
}
