//! Per satellite status readings
use crate::prelude::{Epoch, SignalMode, SV};

/// One satellite status report, as delivered by the receiver for
/// one refresh cycle. Readings are immutable within a cycle and
/// superseded wholesale by the next [ObservationSet].
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteReading {
    /// [SV] identity
    pub sv: SV,

    /// Azimuth at observation time, in degrees.
    /// Nominally [0, 360[, noisy hardware values outside that
    /// domain are normalized at projection time.
    pub azimuth_deg: f64,

    /// Elevation at observation time, in degrees.
    /// Nominally [0, 90], below horizon values are clamped at
    /// projection time only.
    pub elevation_deg: f64,

    /// Signal quality report, either SNR (dB) or C/N0 (dB-Hz)
    /// depending on the [SignalMode] of the cycle. None when the
    /// receiver tracked the vehicle without a signal report.
    pub signal_dbhz: Option<f64>,

    /// True when this vehicle contributed to the position fix.
    pub used_in_fix: bool,
}

impl SatelliteReading {
    /// Builds a new [SatelliteReading] with no signal report,
    /// not used in any fix.
    pub fn new(sv: SV, azimuth_deg: f64, elevation_deg: f64) -> Self {
        Self {
            sv,
            azimuth_deg,
            elevation_deg,
            signal_dbhz: None,
            used_in_fix: false,
        }
    }

    /// Copies and returns [SatelliteReading] with a signal quality
    /// report, in dB (SNR) or dB-Hz (C/N0) depending on the cycle's
    /// [SignalMode].
    pub fn with_signal_dbhz(&self, signal_dbhz: f64) -> Self {
        let mut s = self.clone();
        s.signal_dbhz = Some(signal_dbhz);
        s
    }

    /// Copies and returns [SatelliteReading] marked as contributing
    /// to the position fix.
    pub fn with_used_in_fix(&self, used: bool) -> Self {
        let mut s = self.clone();
        s.used_in_fix = used;
        s
    }

    /// True when this reading carries a meaningful (finite) signal value.
    pub fn has_valid_signal(&self) -> bool {
        matches!(self.signal_dbhz, Some(value) if value.is_finite())
    }
}

/// All [SatelliteReading]s of one refresh cycle, tagged with the
/// sampling [Epoch] and the [SignalMode] of the API that delivered
/// them. The mode is resolved once per cycle, not per reading: the
/// platform never mixes both APIs within a single batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet {
    /// Sampling [Epoch]
    pub epoch: Epoch,

    /// [SignalMode] of the delivering API
    pub mode: SignalMode,

    /// [SatelliteReading]s of this cycle
    pub readings: Vec<SatelliteReading>,
}

impl ObservationSet {
    /// Builds a new empty [ObservationSet] for this [Epoch],
    /// delivered through this [SignalMode].
    pub fn new(epoch: Epoch, mode: SignalMode) -> Self {
        Self {
            epoch,
            mode,
            readings: Vec::new(),
        }
    }

    /// Copies and returns [ObservationSet] with one more reading.
    pub fn with_reading(&self, reading: SatelliteReading) -> Self {
        let mut s = self.clone();
        s.readings.push(reading);
        s
    }

    /// Copies and returns [ObservationSet] with this batch of readings.
    pub fn with_readings(&self, readings: Vec<SatelliteReading>) -> Self {
        let mut s = self.clone();
        s.readings = readings;
        s
    }

    /// Iterates readings that carry a valid (finite) signal value.
    pub(crate) fn valid_signals(&self) -> impl Iterator<Item = &SatelliteReading> {
        self.readings.iter().filter(|r| r.has_valid_signal())
    }
}
