//! Wave field configuration.

use std::ops::RangeInclusive;

use crate::error::WaveError;

/// Allowed number of summed wave components
pub const WAVE_COUNT_RANGE: RangeInclusive<usize> = 2..=10;

/// Global wave field settings shared by every component
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParams {
    /// Phase advance per second (radians per second)
    pub wave_speed: f32,

    /// Base wavelength (world units); wave number k = 2π / wave_length
    pub wave_length: f32,

    /// Number of summed components, within WAVE_COUNT_RANGE
    pub wave_count: usize,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_speed: 1.0,
            wave_length: 5.0,
            wave_count: 4,
        }
    }
}

impl WaveParams {
    /// Spatial angular frequency derived from the wavelength
    pub fn wave_number(&self) -> f32 {
        std::f32::consts::TAU / self.wave_length
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), WaveError> {
        validate_wave_count(self.wave_count)?;
        validate_wave_length(self.wave_length)?;
        if !self.wave_speed.is_finite() {
            return Err(WaveError::Range(format!(
                "wave speed must be finite, got {}",
                self.wave_speed
            )));
        }
        Ok(())
    }
}

pub fn validate_wave_count(count: usize) -> Result<(), WaveError> {
    if WAVE_COUNT_RANGE.contains(&count) {
        Ok(())
    } else {
        Err(WaveError::Range(format!(
            "wave count must be in [{}, {}], got {}",
            WAVE_COUNT_RANGE.start(),
            WAVE_COUNT_RANGE.end(),
            count
        )))
    }
}

pub fn validate_wave_length(wave_length: f32) -> Result<(), WaveError> {
    if wave_length.is_finite() && wave_length != 0.0 {
        Ok(())
    } else {
        Err(WaveError::Range(format!(
            "wave length must be finite and non-zero, got {}",
            wave_length
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = WaveParams::default();
        assert!(params.validate().is_ok());
        assert!((params.wave_number() - std::f32::consts::TAU / 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_wave_count_bounds() {
        assert!(validate_wave_count(2).is_ok());
        assert!(validate_wave_count(10).is_ok());
        assert!(matches!(validate_wave_count(1), Err(WaveError::Range(_))));
        assert!(matches!(validate_wave_count(11), Err(WaveError::Range(_))));
    }

    #[test]
    fn test_zero_wave_length_rejected() {
        let params = WaveParams {
            wave_length: 0.0,
            ..WaveParams::default()
        };
        assert!(matches!(params.validate(), Err(WaveError::Range(_))));
        assert!(validate_wave_length(f32::NAN).is_err());
        assert!(validate_wave_length(-3.0).is_ok());
    }
}
