//! Engine facade
use log::debug;

use crate::aggregator::{aggregate, AggregateSnapshot};
use crate::cfg::Config;
use crate::error::Error;
use crate::planner::{plan, IndicatorPlacement, MarginBounds};
use crate::projector::{project_all, PlotPoint};
use crate::reading::{ObservationSet, SatelliteReading};
use crate::signal::{present, resolve_unit, PresentedSignal, SignalUnit};
use crate::prelude::SV;

/// [SkyEngine] turns one [ObservationSet] per refresh cycle into
/// plain plotting data: sky disk coordinates, cohort averages and
/// meter indicator placements. It owns a validated [Config] and
/// nothing else: no state survives a cycle, so the host may invoke
/// it from any (serialized) status callback and keep all animation
/// on its side.
#[derive(Debug, Clone)]
pub struct SkyEngine {
    cfg: Config,
}

impl SkyEngine {
    /// Builds a new [SkyEngine] from this [Config].
    /// Degenerate legend scales are a configuration error and are
    /// rejected here, before any cycle is processed.
    pub fn new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        debug!(
            "deployed with snr scale {:?}, cn0 scale {:?}",
            cfg.snr_scale, cfg.cn0_scale
        );
        Ok(Self { cfg })
    }

    /// Currently deployed [Config].
    pub fn cfg(&self) -> &Config {
        &self.cfg
    }

    /// Resolves the [SignalUnit] this cycle is presented in,
    /// applying the bad-SNR reclassification to legacy cycles.
    pub fn resolve_unit(&self, set: &ObservationSet) -> SignalUnit {
        resolve_unit(set, &self.cfg)
    }

    /// Attaches the legend matching `unit` to one reading.
    /// None when the reading carries no valid signal.
    pub fn present(&self, reading: &SatelliteReading, unit: SignalUnit) -> Option<PresentedSignal> {
        present(reading, unit, &self.cfg)
    }

    /// Folds one cycle into its [AggregateSnapshot].
    pub fn aggregate(&self, set: &ObservationSet) -> AggregateSnapshot {
        aggregate(set, &self.cfg)
    }

    /// Projects a whole cycle onto the sky disk, one [PlotPoint]
    /// per vehicle. See [crate::prelude::project] for the single
    /// vehicle form.
    pub fn project_all(&self, set: &ObservationSet) -> Vec<(SV, PlotPoint)> {
        project_all(set)
    }

    /// Plans the meter indicator placement for one aggregated cycle
    /// within these [MarginBounds].
    pub fn plan(
        &self,
        snapshot: &AggregateSnapshot,
        bounds: &MarginBounds,
    ) -> Result<IndicatorPlacement, Error> {
        plan(snapshot, bounds)
    }
}
