use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::Configuration;
use crate::error::Error;
use crate::measurement::{RawSample, UvReading};
use crate::registers::{DEVICE_ADDRESS, DEVICE_ID, Register};

/// Settling time before reading the result registers, in milliseconds.
///
/// The device needs this long to complete an internal integration cycle;
/// reading earlier returns counts from a partial conversion.
pub(crate) const SETTLING_TIME_MS: u32 = 150;

/// Driver for the VEML6075.
///
/// # Quick start
///
/// Create the driver with [`Veml6075::new`], passing the I2C bus and a delay
/// provider from your platform's HAL. Call [`Veml6075::initialize`] once to
/// verify the device identification and write the default configuration,
/// then call [`Veml6075::read_uv`] on whatever cadence suits the display.
///
/// The driver owns the bus handle for its lifetime and performs no internal
/// locking; every register transfer blocks until the bus implementation
/// completes or reports an error. [`Veml6075::release`] hands the bus back.
///
/// # Datasheet
///
/// See the [VEML6075 datasheet] for the register descriptions and Vishay
/// application note 84339 for the compensation arithmetic.
///
/// [VEML6075 datasheet]: https://www.vishay.com/docs/84304/veml6075.pdf
#[derive(Debug)]
pub struct Veml6075<I2C, D> {
    /// Underlying I2C bus.
    i2c: I2C,
    /// Delay provider for the settling wait before each sample.
    delay: D,
    /// 7-bit device address, fixed for the VEML6075.
    address: u8,
    /// Last configuration written to the device.
    config: Configuration,
    /// Set once identification and configuration have succeeded.
    ready: bool,
}

impl<I2C, D, E> Veml6075<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    ////////////////////////////////////////////////////////////////////////////////
    // Construction
    ////////////////////////////////////////////////////////////////////////////////

    /// Create a driver on the given bus.
    ///
    /// No bus traffic occurs until [`Veml6075::initialize`] is called.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            address: DEVICE_ADDRESS,
            config: Configuration::default(),
            ready: false,
        }
    }

    /// Release the underlying bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Identification and configuration
    ////////////////////////////////////////////////////////////////////////////////

    /// Verify the device identification and write the default configuration.
    ///
    /// Reads the identification register and compares its low byte against
    /// [`DEVICE_ID`]. On a match, writes [`Configuration::default`]: 100 ms
    /// integration time, normal dynamic range, powered up. Exactly one
    /// register read and, on success, one register write reach the bus.
    ///
    /// On success the driver is ready and the device is in a known
    /// configuration. On any failure the ready flag stays clear and no
    /// sampling should be attempted until initialization succeeds; a
    /// mismatched identification byte is reported without writing the
    /// configuration.
    ///
    /// # Errors
    ///
    /// [`Error::IdentityMismatch`] if another device answers at the VEML6075
    /// address, [`Error::Bus`] if the transport fails.
    pub fn initialize(&mut self) -> Result<(), Error<E>> {
        self.ready = false;
        let found = self.read_register(Register::DeviceId)?.to_le_bytes()[0];
        if found != DEVICE_ID {
            return Err(Error::IdentityMismatch {
                expected: DEVICE_ID,
                found,
            });
        }
        let config = Configuration::default();
        self.write_configuration(&config)?;
        self.config = config;
        self.ready = true;
        Ok(())
    }

    /// Whether identification and configuration have succeeded.
    ///
    /// Callers are expected to gate [`Veml6075::read_uv`] on this, and to
    /// show a "not connected" state instead of sampling while it is false.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Read the raw identification byte from the device.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the transport fails.
    pub fn device_id(&mut self) -> Result<u8, Error<E>> {
        Ok(self.read_register(Register::DeviceId)?.to_le_bytes()[0])
    }

    /// Write an explicit configuration word to the device.
    ///
    /// The ready flag is untouched: changing integration time or dynamic
    /// range does not require re-identification.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the transport fails, in which case the device may
    /// be left with its previous configuration.
    pub fn configure(&mut self, configuration: &Configuration) -> Result<(), Error<E>> {
        self.write_configuration(configuration)?;
        self.config = *configuration;
        Ok(())
    }

    /// Power the device down.
    ///
    /// Rewrites the current configuration with the shutdown flag set. The
    /// device keeps its settings while powered down and draws only standby
    /// current.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the transport fails.
    pub fn shutdown(&mut self) -> Result<(), Error<E>> {
        let mut config = self.config;
        config.with_shutdown(true);
        self.write_configuration(&config)?;
        self.config = config;
        Ok(())
    }

    /// Power the device back up after [`Veml6075::shutdown`].
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the transport fails.
    pub fn wake(&mut self) -> Result<(), Error<E>> {
        let mut config = self.config;
        config.with_shutdown(false);
        self.write_configuration(&config)?;
        self.config = config;
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Sampling
    ////////////////////////////////////////////////////////////////////////////////

    /// Acquire one raw sample from the five result registers.
    ///
    /// Blocks for the 150 ms settling time first, so the device's internal
    /// integration cycle has completed, then reads UVA, dark, UVB, COMP1
    /// and COMP2 in that order. The first failed read aborts the rest; no
    /// partial sample is returned.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if any of the five reads fails. The driver does not
    /// retry; the caller decides whether to retry or re-initialize.
    pub fn read_raw(&mut self) -> Result<RawSample, Error<E>> {
        self.delay.delay_ms(SETTLING_TIME_MS);
        Ok(RawSample {
            uva: self.read_register(Register::Uva)?,
            uvd: self.read_register(Register::Uvd)?,
            uvb: self.read_register(Register::Uvb)?,
            comp1: self.read_register(Register::UvComp1)?,
            comp2: self.read_register(Register::UvComp2)?,
        })
    }

    /// Acquire one sample and derive the calibrated UV reading.
    ///
    /// Expects the driver to be ready; gating on [`Veml6075::is_ready`] is
    /// the caller's responsibility. The compensation arithmetic itself
    /// cannot fail, so the result is exactly as trustworthy as the raw
    /// counts.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if any register read fails.
    pub fn read_uv(&mut self) -> Result<UvReading, Error<E>> {
        Ok(self.read_raw()?.compensate())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Register access
    ////////////////////////////////////////////////////////////////////////////////

    /// Read a 16-bit little-endian register.
    fn read_register(&mut self, register: Register) -> Result<u16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register.into()], &mut buffer)?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Write the two-byte configuration block.
    fn write_configuration(&mut self, configuration: &Configuration) -> Result<(), Error<E>> {
        let [low, high] = configuration.register_value();
        self.i2c
            .write(self.address, &[Register::Conf.into(), low, high])?;
        Ok(())
    }
}
