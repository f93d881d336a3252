#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Legend scale attached to one signal quality unit.
/// Values at `min_dbhz` land on the low end of the meter,
/// values at `max_dbhz` on the high end. Values outside the scale
/// extrapolate linearly, they are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalScale {
    /// Low end of the legend
    pub min_dbhz: f64,
    /// High end of the legend
    pub max_dbhz: f64,
}

impl SignalScale {
    pub fn new(min_dbhz: f64, max_dbhz: f64) -> Self {
        Self { min_dbhz, max_dbhz }
    }

    /// Scale width, zero for a degenerate (invalid) scale.
    pub(crate) fn width(&self) -> f64 {
        self.max_dbhz - self.min_dbhz
    }
}

fn default_snr_scale() -> SignalScale {
    SignalScale::new(0.0, 30.0)
}

fn default_cn0_scale() -> SignalScale {
    SignalScale::new(10.0, 45.0)
}

/// Engine configuration: the legend scales the meter is drawn with.
/// Scales are supplied by the presentation layer, they are not
/// hardcoded in the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Legacy SNR legend, in dB.
    #[cfg_attr(feature = "serde", serde(default = "default_snr_scale"))]
    pub snr_scale: SignalScale,
    /// Modern C/N0 legend, in dB-Hz.
    #[cfg_attr(feature = "serde", serde(default = "default_cn0_scale"))]
    pub cn0_scale: SignalScale,
}

impl Default for Config {
    /// Builds the default [Config], with the standard legends:
    /// SNR 0..30 dB, C/N0 10..45 dB-Hz.
    fn default() -> Self {
        Self {
            snr_scale: default_snr_scale(),
            cn0_scale: default_cn0_scale(),
        }
    }
}

impl Config {
    /// Verifies both scales span a non zero width.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.snr_scale.width() == 0.0 {
            return Err(Error::DegenerateSnrScale);
        }
        if self.cn0_scale.width() == 0.0 {
            return Err(Error::DegenerateCn0Scale);
        }
        Ok(())
    }
}
