//! Signal quality units and their reconciliation
use crate::cfg::{Config, SignalScale};
use crate::reading::{ObservationSet, SatelliteReading};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which platform API delivered the readings of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalMode {
    /// Legacy status callback: values are nominally SNR (dB).
    LegacySnr,
    /// Modern GNSS status callback: values are C/N0 (dB-Hz).
    ModernCn0,
}

/// Unit actually presented to the user, after reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalUnit {
    /// Signal to noise ratio (dB)
    Snr,
    /// Carrier to noise density (dB-Hz)
    Cn0,
}

impl std::fmt::Display for SignalUnit {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Snr => write!(fmt, "SNR (dB)"),
            Self::Cn0 => write!(fmt, "C/N0 (dB-Hz)"),
        }
    }
}

/// One reading's quality value, attached to the legend it must be
/// presented on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentedSignal {
    /// Quality value, in dB or dB-Hz depending on `unit`.
    pub quantity: f64,
    /// Legend [SignalScale] to present this value on.
    pub scale: SignalScale,
    /// Presented [SignalUnit]
    pub unit: SignalUnit,
}

impl PresentedSignal {
    /// Position of this value within its legend, clamped to [0, 1].
    /// Intended for the renderer's own color table: the engine does
    /// not pick colors.
    pub fn quality_ratio(&self) -> f64 {
        let width = self.scale.max_dbhz - self.scale.min_dbhz;
        if width == 0.0 {
            return 0.0;
        }
        ((self.quantity - self.scale.min_dbhz) / width).clamp(0.0, 1.0)
    }
}

/// True when a legacy cycle's values look anomalous for SNR.
/// Some receivers emit C/N0 shaped data through the legacy callback:
/// true SNR is bounded by the legend top, so one finite value above
/// it is enough evidence to reclassify the whole cycle.
pub(crate) fn snr_looks_bad(set: &ObservationSet, cfg: &Config) -> bool {
    set.valid_signals()
        .filter_map(|r| r.signal_dbhz)
        .any(|value| value > cfg.snr_scale.max_dbhz)
}

/// Resolves the presented [SignalUnit] for one cycle. The callback
/// type does not guarantee the value's true unit: a legacy cycle
/// carrying out-of-scale values is presented as C/N0.
pub(crate) fn resolve_unit(set: &ObservationSet, cfg: &Config) -> SignalUnit {
    match set.mode {
        SignalMode::ModernCn0 => SignalUnit::Cn0,
        SignalMode::LegacySnr => {
            if snr_looks_bad(set, cfg) {
                SignalUnit::Cn0
            } else {
                SignalUnit::Snr
            }
        },
    }
}

/// Attaches the legend matching `unit` to one reading's quality value.
/// None when the reading carries no valid signal.
pub(crate) fn present(
    reading: &SatelliteReading,
    unit: SignalUnit,
    cfg: &Config,
) -> Option<PresentedSignal> {
    let quantity = reading.signal_dbhz.filter(|value| value.is_finite())?;

    let scale = match unit {
        SignalUnit::Snr => cfg.snr_scale,
        SignalUnit::Cn0 => cfg.cn0_scale,
    };

    Some(PresentedSignal {
        quantity,
        scale,
        unit,
    })
}

#[cfg(test)]
mod test {
    use super::{resolve_unit, snr_looks_bad, SignalMode, SignalUnit};
    use crate::prelude::{Config, Constellation, Epoch, ObservationSet, SatelliteReading, SV};

    fn legacy_set(signals: &[f64]) -> ObservationSet {
        let epoch = Epoch::from_gregorian_utc_at_midnight(2020, 6, 25);
        let readings = signals
            .iter()
            .enumerate()
            .map(|(i, signal)| {
                SatelliteReading::new(SV::new(Constellation::GPS, (i + 1) as u8), 0.0, 45.0)
                    .with_signal_dbhz(*signal)
            })
            .collect();
        ObservationSet::new(epoch, SignalMode::LegacySnr).with_readings(readings)
    }

    #[test]
    fn test_nominal_snr() {
        let cfg = Config::default();
        let set = legacy_set(&[12.0, 25.0, 30.0]);

        assert!(!snr_looks_bad(&set, &cfg));
        assert_eq!(resolve_unit(&set, &cfg), SignalUnit::Snr);
    }

    #[test]
    fn test_cn0_shaped_legacy_values() {
        let cfg = Config::default();
        // 41 dB-Hz cannot be an SNR on a 0..30 dB legend
        let set = legacy_set(&[12.0, 41.0]);

        assert!(snr_looks_bad(&set, &cfg));
        assert_eq!(resolve_unit(&set, &cfg), SignalUnit::Cn0);
    }

    #[test]
    fn test_modern_mode_always_cn0() {
        let cfg = Config::default();
        let mut set = legacy_set(&[12.0]);
        set.mode = SignalMode::ModernCn0;

        assert_eq!(resolve_unit(&set, &cfg), SignalUnit::Cn0);
    }

    #[test]
    fn test_quality_ratio() {
        let cfg = Config::default();
        let set = legacy_set(&[15.0]);

        let presented = super::present(&set.readings[0], SignalUnit::Snr, &cfg).unwrap();

        assert_eq!(presented.quantity, 15.0);
        assert_eq!(presented.quality_ratio(), 0.5);
    }
}
