/// Wrapper for problems when communicating with the VEML6075.
///
/// Generic over the error type of the underlying I2C implementation. Both
/// cases are surfaced to the caller unchanged: the driver never retries and
/// never substitutes default values for a failed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A transfer on the underlying I2C bus failed.
    ///
    /// The enclosed error is whatever the bus implementation reported
    /// (NACK, timeout, disconnection, ...).
    Bus(E),
    /// The device answered with an unexpected identification byte.
    ///
    /// Either a different device is responding at the VEML6075 address, or
    /// the register read returned garbage. Both bytes are enclosed so the
    /// caller can tell a mismatch apart from a hard bus fault.
    IdentityMismatch {
        /// Identification byte the VEML6075 family reports.
        expected: u8,
        /// Identification byte actually read from the device.
        found: u8,
    },
}

#[doc(hidden)]
impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::Bus(value)
    }
}
