//! Raw samples and the UV index compensation arithmetic.
//!
//! The VEML6075 reports raw photodiode counts that include cross-talk from
//! visible and infrared light. The vendor's application note gives a set of
//! empirical coefficients to subtract that cross-talk, and per-channel
//! responsivity scalars that convert the compensated counts into erythema
//! weighted index values. UVB is weighted more heavily than UVA: shorter
//! wavelengths carry more energy per photon.

/// Visible-light coefficient for the UVA channel.
const UVA_A_COEF: f32 = 2.22;
/// Infrared coefficient for the UVA channel.
const UVA_B_COEF: f32 = 1.33;
/// Visible-light coefficient for the UVB channel.
const UVB_C_COEF: f32 = 2.95;
/// Infrared coefficient for the UVB channel.
const UVB_D_COEF: f32 = 1.74;

/// Responsivity of the UVA channel, index value per compensated count.
const UVA_RESPONSIVITY: f32 = 0.0011;
/// Responsivity of the UVB channel, index value per compensated count.
const UVB_RESPONSIVITY: f32 = 0.00125;

/// One acquisition of the five result registers.
///
/// Counts are read fresh on every sampling call and are not cached by the
/// driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Raw UVA channel count.
    pub uva: u16,
    /// Dark-current reference count.
    pub uvd: u16,
    /// Raw UVB channel count.
    pub uvb: u16,
    /// Visible-light compensation channel count.
    pub comp1: u16,
    /// Infrared compensation channel count.
    pub comp2: u16,
}

impl RawSample {
    /// Compensate the raw counts and weight them into index values.
    ///
    /// Dark current is subtracted from every channel, then the visible and
    /// infrared cross-talk is removed using the fixed coefficients.
    /// Compensated counts are clamped at zero before weighting: negative
    /// values occur in zero-UV ambient conditions (e.g. indoors) and are
    /// physically meaningless.
    ///
    /// The computation is pure; identical counts always produce an
    /// identical reading.
    pub fn compensate(&self) -> UvReading {
        let dark = f32::from(self.uvd);
        let comp1 = f32::from(self.comp1) - dark;
        let comp2 = f32::from(self.comp2) - dark;

        let uva_comp = (f32::from(self.uva) - dark) - UVA_A_COEF * comp1 - UVA_B_COEF * comp2;
        let uvb_comp = (f32::from(self.uvb) - dark) - UVB_C_COEF * comp1 - UVB_D_COEF * comp2;
        let uva_comp = uva_comp.max(0.0);
        let uvb_comp = uvb_comp.max(0.0);

        let uva_index = uva_comp * UVA_RESPONSIVITY;
        let uvb_index = uvb_comp * UVB_RESPONSIVITY;
        UvReading {
            uv_index: (uva_index + uvb_index) / 2.0,
            uva_index,
            uvb_index,
        }
    }
}

/// A calibrated reading derived from one [`RawSample`].
///
/// Computed fresh per sampling call; the driver keeps no history.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UvReading {
    /// Composite UV index, the mean of the UVA and UVB indices.
    pub uv_index: f32,
    /// Erythema-weighted UVA index.
    pub uva_index: f32,
    /// Erythema-weighted UVB index.
    pub uvb_index: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN: RawSample = RawSample {
        uva: 1000,
        uvd: 50,
        uvb: 800,
        comp1: 100,
        comp2: 60,
    };

    #[test]
    fn golden_sample_matches_hand_computation() {
        // uva_comp = 950 - 2.22*50 - 1.33*10 = 825.7
        // uvb_comp = 750 - 2.95*50 - 1.74*10 = 585.1
        let reading = GOLDEN.compensate();
        assert!((reading.uva_index - 825.7 * 0.0011).abs() < 1e-5);
        assert!((reading.uvb_index - 585.1 * 0.00125).abs() < 1e-5);
        assert!((reading.uv_index - 0.8198225).abs() < 1e-5);
    }

    #[test]
    fn uv_index_is_mean_of_channel_indices() {
        let reading = GOLDEN.compensate();
        assert_eq!(
            reading.uv_index,
            (reading.uva_index + reading.uvb_index) / 2.0
        );
    }

    #[test]
    fn negative_compensation_clamps_to_zero() {
        // Compensation channels far above the UV channels drive both
        // compensated counts negative.
        let reading = RawSample {
            uva: 10,
            uvd: 50,
            uvb: 10,
            comp1: 1000,
            comp2: 1000,
        }
        .compensate();
        assert_eq!(reading.uva_index, 0.0);
        assert_eq!(reading.uvb_index, 0.0);
        assert_eq!(reading.uv_index, 0.0);
    }

    #[test]
    fn all_channels_at_dark_level_read_zero() {
        let reading = RawSample {
            uva: 50,
            uvd: 50,
            uvb: 50,
            comp1: 50,
            comp2: 50,
        }
        .compensate();
        assert_eq!(reading.uva_index, 0.0);
        assert_eq!(reading.uvb_index, 0.0);
        assert_eq!(reading.uv_index, 0.0);
    }

    #[test]
    fn compensation_is_deterministic() {
        assert_eq!(GOLDEN.compensate(), GOLDEN.compensate());
    }
}
