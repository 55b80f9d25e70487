//! Register map of the VEML6075.

/// Fixed 7-bit I2C address of the VEML6075.
///
/// The address is not configurable; every VEML6075 responds at 0x10.
pub const DEVICE_ADDRESS: u8 = 0x10;

/// Identification byte reported by the VEML6075 family.
///
/// Read from the low byte of [`Register::DeviceId`]. The driver refuses to
/// configure or sample a device that reports anything else.
pub const DEVICE_ID: u8 = 0x26;

/// Command register addresses.
///
/// All result registers hold a 16-bit little-endian count. The device
/// identification register is also two bytes wide, with the identification
/// byte in the low byte.
///
/// # Datasheet
///
/// See table "I2C interface command structure" in the VEML6075 datasheet.
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub(crate) enum Register {
    /// Configuration word (integration time, dynamic range, trigger,
    /// active force, shutdown).
    Conf = 0x00,
    /// Raw UVA channel count.
    Uva = 0x07,
    /// Dark-current reference count.
    Uvd = 0x08,
    /// Raw UVB channel count.
    Uvb = 0x09,
    /// Visible-light compensation channel count.
    UvComp1 = 0x0A,
    /// Infrared compensation channel count.
    UvComp2 = 0x0B,
    /// Device identification.
    DeviceId = 0x0C,
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register as u8
    }
}
