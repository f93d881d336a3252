//! Sky plot projection
use nalgebra::Vector2;

use crate::prelude::{ObservationSet, SV};

/// Position on the normalized sky disk: center is the zenith,
/// radius 1.0 the horizon, north up (-y), east right (+x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    /// Self as [Vector2], for downstream math (distances, scaling
    /// to the actual plot raster).
    pub fn vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Distance to the zenith: 0.0 for a vehicle overhead,
    /// 1.0 for one sitting on the horizon.
    pub fn radius(&self) -> f64 {
        self.vector().norm()
    }
}

/// Projects one (azimuth, elevation) pair onto the sky disk.
///
/// Azimuth is a compass angle in degrees, clockwise from north;
/// values outside [0, 360[ are normalized, never rejected, since
/// hardware occasionally reports transient out-of-range angles.
/// Elevation is in degrees above the horizon and clamped to
/// [0, 90]: a below horizon vehicle plots on the horizon ring.
///
/// Pure and re-entrant, invoked once per vehicle per refresh cycle.
pub fn project(azimuth_deg: f64, elevation_deg: f64) -> PlotPoint {
    let radius = (90.0 - elevation_deg.clamp(0.0, 90.0)) / 90.0;
    let azimuth_rad = azimuth_deg.rem_euclid(360.0).to_radians();

    PlotPoint {
        x: radius * azimuth_rad.sin(),
        y: -radius * azimuth_rad.cos(),
    }
}

/// Projects a whole cycle, one [PlotPoint] per vehicle.
pub(crate) fn project_all(set: &ObservationSet) -> Vec<(SV, PlotPoint)> {
    set.readings
        .iter()
        .map(|reading| {
            (
                reading.sv,
                project(reading.azimuth_deg, reading.elevation_deg),
            )
        })
        .collect()
}
