//! Async driver variant, mirroring the blocking [`Veml6075`].
//!
//! [`Veml6075`]: crate::Veml6075

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::config::Configuration;
use crate::driver::SETTLING_TIME_MS;
use crate::error::Error;
use crate::measurement::{RawSample, UvReading};
use crate::registers::{DEVICE_ADDRESS, DEVICE_ID, Register};

/// Async driver for the VEML6075.
///
/// Identical semantics to the blocking [`Veml6075`], over the
/// [`embedded_hal_async`] I2C and delay traits. The settling wait before
/// each sample becomes a suspend point with the same 150 ms minimum
/// duration; it must not be skipped, as reading earlier returns counts from
/// a partial integration cycle.
///
/// [`Veml6075`]: crate::Veml6075
#[derive(Debug)]
pub struct Veml6075Async<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    config: Configuration,
    ready: bool,
}

impl<I2C, D, E> Veml6075Async<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Create a driver on the given bus.
    ///
    /// No bus traffic occurs until [`Veml6075Async::initialize`] is called.
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

    /// Verify the device identification and write the default configuration.
    ///
    /// See [`Veml6075::initialize`](crate::Veml6075::initialize).
    ///
    /// # Errors
    ///
    /// [`Error::IdentityMismatch`] if another device answers at the VEML6075
    /// address, [`Error::Bus`] if the transport fails.
    pub async fn initialize(&mut self) -> Result<(), Error<E>> {
        self.ready = false;
        let found = self.read_register(Register::DeviceId).await?.to_le_bytes()[0];
        if found != DEVICE_ID {
            return Err(Error::IdentityMismatch {
                expected: DEVICE_ID,
                found,
            });
        }
        let config = Configuration::default();
        self.write_configuration(&config).await?;
        self.config = config;
        self.ready = true;
        Ok(())
    }

    /// Whether identification and configuration have succeeded.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Read the raw identification byte from the device.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the transport fails.
    pub async fn device_id(&mut self) -> Result<u8, Error<E>> {
        Ok(self.read_register(Register::DeviceId).await?.to_le_bytes()[0])
    }

    /// Write an explicit configuration word to the device.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the transport fails.
    pub async fn configure(&mut self, configuration: &Configuration) -> Result<(), Error<E>> {
        self.write_configuration(configuration).await?;
        self.config = *configuration;
        Ok(())
    }

    /// Power the device down.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the transport fails.
    pub async fn shutdown(&mut self) -> Result<(), Error<E>> {
        let mut config = self.config;
        config.with_shutdown(true);
        self.write_configuration(&config).await?;
        self.config = config;
        Ok(())
    }

    /// Power the device back up after [`Veml6075Async::shutdown`].
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the transport fails.
    pub async fn wake(&mut self) -> Result<(), Error<E>> {
        let mut config = self.config;
        config.with_shutdown(false);
        self.write_configuration(&config).await?;
        self.config = config;
        Ok(())
    }

    /// Acquire one raw sample from the five result registers.
    ///
    /// Suspends for the 150 ms settling time first, then reads UVA, dark,
    /// UVB, COMP1 and COMP2 in that order. The first failed read aborts the
    /// rest; no partial sample is returned.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if any of the five reads fails.
    pub async fn read_raw(&mut self) -> Result<RawSample, Error<E>> {
        self.delay.delay_ms(SETTLING_TIME_MS).await;
        Ok(RawSample {
            uva: self.read_register(Register::Uva).await?,
            uvd: self.read_register(Register::Uvd).await?,
            uvb: self.read_register(Register::Uvb).await?,
            comp1: self.read_register(Register::UvComp1).await?,
            comp2: self.read_register(Register::UvComp2).await?,
        })
    }

    /// Acquire one sample and derive the calibrated UV reading.
    ///
    /// Gating on [`Veml6075Async::is_ready`] is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if any register read fails.
    pub async fn read_uv(&mut self) -> Result<UvReading, Error<E>> {
        Ok(self.read_raw().await?.compensate())
    }

    /// Read a 16-bit little-endian register.
    async fn read_register(&mut self, register: Register) -> Result<u16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register.into()], &mut buffer)
            .await?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Write the two-byte configuration block.
    async fn write_configuration(&mut self, configuration: &Configuration) -> Result<(), Error<E>> {
        let [low, high] = configuration.register_value();
        self.i2c
            .write(self.address, &[Register::Conf.into(), low, high])
            .await?;
        Ok(())
    }
}
