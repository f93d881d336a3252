#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod aggregator;
mod averager;
mod cfg;
mod engine;
mod error;
mod mapper;
mod planner;
mod projector;
mod reading;
mod signal;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::aggregator::AggregateSnapshot;
    pub use crate::cfg::{Config, SignalScale};
    pub use crate::engine::SkyEngine;
    pub use crate::error::Error;
    pub use crate::mapper::map_to_range;
    pub use crate::planner::{IndicatorPlacement, MarginBounds};
    pub use crate::projector::{project, PlotPoint};
    pub use crate::reading::{ObservationSet, SatelliteReading};
    pub use crate::signal::{PresentedSignal, SignalMode, SignalUnit};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::Epoch;
    pub use nalgebra::Vector2;
}

// pub export
pub use error::Error;
