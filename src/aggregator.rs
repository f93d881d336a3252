//! Per cycle cohort aggregation
use itertools::Itertools;
use log::{debug, trace};

use std::collections::HashMap;

use crate::averager::Averager;
use crate::cfg::{Config, SignalScale};
use crate::signal::{resolve_unit, SignalMode, SignalUnit};
use crate::prelude::{Constellation, Epoch, ObservationSet};

/// Signal quality aggregates of one refresh cycle. Derived from the
/// full current [ObservationSet], never updated incrementally from
/// the previous snapshot: that keeps the meter free of drift.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSnapshot {
    /// Sampling [Epoch] of the aggregated cycle
    pub epoch: Epoch,

    /// [SignalMode] the cycle was delivered through
    pub mode: SignalMode,

    /// Presented [SignalUnit], after the bad-SNR reconciliation.
    pub unit: SignalUnit,

    /// Legend [SignalScale] matching the presented unit.
    pub scale: SignalScale,

    /// Mean signal quality over all vehicles in view carrying a
    /// valid signal. None when the cohort is empty.
    pub in_view_avg_dbhz: Option<f64>,

    /// Mean signal quality over vehicles used in the position fix.
    /// None when the cohort is empty.
    pub used_avg_dbhz: Option<f64>,

    /// Number of vehicles contributing to the in-view mean.
    pub in_view_count: u64,

    /// Number of vehicles contributing to the used-in-fix mean.
    pub used_count: u64,

    /// In view vehicles per [Constellation], valid signal or not.
    pub constellations: HashMap<Constellation, usize>,
}

/// Folds one [ObservationSet] into its [AggregateSnapshot].
/// Pure fold over the current cycle: stateless, deterministic,
/// accumulation always runs in double precision.
pub(crate) fn aggregate(set: &ObservationSet, cfg: &Config) -> AggregateSnapshot {
    let unit = resolve_unit(set, cfg);

    let scale = match unit {
        SignalUnit::Snr => cfg.snr_scale,
        SignalUnit::Cn0 => cfg.cn0_scale,
    };

    let mut in_view = Averager::new();
    let mut used = Averager::new();

    for reading in set.valid_signals() {
        if let Some(value) = reading.signal_dbhz {
            trace!(
                "{} ({}) : {:.1} {}, used: {}",
                set.epoch,
                reading.sv,
                value,
                unit,
                reading.used_in_fix
            );

            in_view.add(value);

            if reading.used_in_fix {
                used.add(value);
            }
        }
    }

    let constellations = set
        .readings
        .iter()
        .map(|reading| reading.sv.constellation)
        .counts();

    debug!(
        "{} : {} in view ({} with signal), {} used, unit: {}",
        set.epoch,
        set.readings.len(),
        in_view.count(),
        used.count(),
        unit
    );

    AggregateSnapshot {
        unit,
        scale,
        constellations,
        epoch: set.epoch,
        mode: set.mode,
        in_view_avg_dbhz: in_view.mean(),
        used_avg_dbhz: used.mean(),
        in_view_count: in_view.count(),
        used_count: used.count(),
    }
}
