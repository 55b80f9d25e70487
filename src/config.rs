//! Device configuration word.

use bit_field::BitField;

/// Integration time for one conversion cycle.
///
/// Longer integration times accumulate more charge per sample, improving
/// sensitivity at the cost of sample latency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntegrationTime {
    /// 50 ms (power-on default of the device).
    #[default]
    Ms50,
    /// 100 ms.
    Ms100,
    /// 200 ms.
    Ms200,
    /// 400 ms.
    Ms400,
    /// 800 ms.
    Ms800,
}

impl IntegrationTime {
    /// Nominal duration of one conversion, in milliseconds.
    pub fn millis(self) -> u16 {
        match self {
            IntegrationTime::Ms50 => 50,
            IntegrationTime::Ms100 => 100,
            IntegrationTime::Ms200 => 200,
            IntegrationTime::Ms400 => 400,
            IntegrationTime::Ms800 => 800,
        }
    }
}

#[doc(hidden)]
impl From<IntegrationTime> for u8 {
    fn from(value: IntegrationTime) -> u8 {
        match value {
            IntegrationTime::Ms50 => 0b000,
            IntegrationTime::Ms100 => 0b001,
            IntegrationTime::Ms200 => 0b010,
            IntegrationTime::Ms400 => 0b011,
            IntegrationTime::Ms800 => 0b100,
        }
    }
}

/// Dynamic range setting.
///
/// High dynamic mode divides the sensitivity of the photodiode channels,
/// extending the count range in strong sunlight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DynamicRange {
    /// Normal dynamic range (power-on default of the device).
    #[default]
    Normal,
    /// High dynamic range.
    High,
}

/// Contents of the configuration register.
///
/// The word is assembled from orthogonal bit-fields: integration time,
/// dynamic range, the shutdown flag, the self-clearing measurement trigger
/// and the active-force flag. Trigger and active force stay clear unless
/// explicitly requested; the driver operates the device in continuous
/// conversion mode.
///
/// [`Configuration::default`] is the word [`initialize`] writes: 100 ms
/// integration time, normal dynamic range, powered up, trigger and active
/// force clear.
///
/// [`initialize`]: crate::Veml6075::initialize
///
/// # Datasheet
///
/// See the UV_CONF register description in the VEML6075 datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Integration time (bits 4-6).
    integration_time: IntegrationTime,
    /// Dynamic range (bit 3).
    dynamic_range: DynamicRange,
    /// Self-clearing measurement trigger (bit 2).
    trigger: bool,
    /// Active-force mode (bit 1).
    active_force: bool,
    /// Shutdown, i.e. powered down (bit 0).
    shutdown: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            integration_time: IntegrationTime::Ms100,
            dynamic_range: DynamicRange::Normal,
            trigger: false,
            active_force: false,
            shutdown: false,
        }
    }
}

impl Configuration {
    /// Create the configuration written during driver initialization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the integration time.
    pub fn with_integration_time(&mut self, integration_time: IntegrationTime) -> &mut Self {
        self.integration_time = integration_time;
        self
    }

    /// Change the dynamic range.
    pub fn with_dynamic_range(&mut self, dynamic_range: DynamicRange) -> &mut Self {
        self.dynamic_range = dynamic_range;
        self
    }

    /// Request a one-shot measurement trigger.
    ///
    /// The bit clears itself in the device once the triggered conversion
    /// completes. Only meaningful together with active-force mode.
    pub fn with_trigger(&mut self, trigger: bool) -> &mut Self {
        self.trigger = trigger;
        self
    }

    /// Enable or disable active-force (one-shot) mode.
    ///
    /// When disabled the device converts continuously, which is how the
    /// driver operates it.
    pub fn with_active_force(&mut self, active_force: bool) -> &mut Self {
        self.active_force = active_force;
        self
    }

    /// Power the device down (`true`) or up (`false`).
    ///
    /// Prefer [`shutdown`] and [`wake`] on the driver, which rewrite the
    /// current configuration with only this flag changed.
    ///
    /// [`shutdown`]: crate::Veml6075::shutdown
    /// [`wake`]: crate::Veml6075::wake
    pub fn with_shutdown(&mut self, shutdown: bool) -> &mut Self {
        self.shutdown = shutdown;
        self
    }

    /// Assemble the two-byte register value.
    ///
    /// The high byte is reserved and always written as zero.
    pub(crate) fn register_value(&self) -> [u8; 2] {
        let mut low = 0u8;
        low.set_bit(0, self.shutdown);
        low.set_bit(1, self.active_force);
        low.set_bit(2, self.trigger);
        low.set_bit(3, matches!(self.dynamic_range, DynamicRange::High));
        low.set_bits(4..=6, self.integration_time.into());
        [low, 0x00]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_word_selects_100ms_normal_range_powered_up() {
        assert_eq!(Configuration::default().register_value(), [0x10, 0x00]);
    }

    #[test]
    fn integration_time_occupies_bits_4_to_6() {
        let times = [
            (IntegrationTime::Ms50, 0x00),
            (IntegrationTime::Ms100, 0x10),
            (IntegrationTime::Ms200, 0x20),
            (IntegrationTime::Ms400, 0x30),
            (IntegrationTime::Ms800, 0x40),
        ];
        for (time, expected) in times {
            let mut config = Configuration::new();
            config.with_integration_time(time);
            assert_eq!(config.register_value()[0] & 0x70, expected);
        }
    }

    #[test]
    fn high_dynamic_800ms_shutdown_word() {
        let mut config = Configuration::new();
        config
            .with_integration_time(IntegrationTime::Ms800)
            .with_dynamic_range(DynamicRange::High)
            .with_shutdown(true);
        assert_eq!(config.register_value(), [0x49, 0x00]);
    }

    #[test]
    fn trigger_and_active_force_bits() {
        let mut config = Configuration::new();
        config.with_trigger(true);
        assert_eq!(config.register_value()[0] & 0x04, 0x04);

        let mut config = Configuration::new();
        config.with_active_force(true);
        assert_eq!(config.register_value()[0] & 0x02, 0x02);
    }

    #[test]
    fn reserved_high_byte_is_zero() {
        let mut config = Configuration::new();
        config
            .with_integration_time(IntegrationTime::Ms800)
            .with_dynamic_range(DynamicRange::High)
            .with_trigger(true)
            .with_active_force(true)
            .with_shutdown(true);
        assert_eq!(config.register_value()[1], 0x00);
    }

    #[test]
    fn integration_time_durations() {
        assert_eq!(IntegrationTime::Ms50.millis(), 50);
        assert_eq!(IntegrationTime::Ms800.millis(), 800);
    }
}
