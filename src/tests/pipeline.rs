use rstest::*;

use crate::prelude::{Config, MarginBounds, SignalUnit, SkyEngine};
use crate::tests::{init_logger, ReadingsBuilder};

#[fixture]
fn build_engine() -> SkyEngine {
    SkyEngine::new(Config::default()).unwrap()
}

#[fixture]
fn build_bounds() -> MarginBounds {
    // 10 px per dB over the default 35 dB-Hz wide C/N0 legend
    MarginBounds::new(10, 360, 20, 370)
}

#[rstest]
fn modern_cycle(build_engine: SkyEngine, build_bounds: MarginBounds) {
    init_logger();

    let set = ReadingsBuilder::modern_cycle();
    let snapshot = build_engine.aggregate(&set);

    assert_eq!(snapshot.unit, SignalUnit::Cn0);
    assert_eq!(snapshot.in_view_count, 4);
    assert_eq!(snapshot.used_count, 2);

    // (41.0 + 38.5 + 35.0 + 22.0) / 4
    let in_view = snapshot.in_view_avg_dbhz.unwrap();
    assert!((in_view - 34.125).abs() < 1.0E-9);

    // (41.0 + 38.5) / 2
    let used = snapshot.used_avg_dbhz.unwrap();
    assert!((used - 39.75).abs() < 1.0E-9);

    // every tracked vehicle plots, signal or not
    let points = build_engine.project_all(&set);
    assert_eq!(points.len(), set.readings.len());

    for (sv, point) in &points {
        assert!(
            point.radius() <= 1.0 + 1.0E-9,
            "{} plotted outside the sky disk",
            sv
        );
    }

    let placement = build_engine.plan(&snapshot, &build_bounds).unwrap();

    assert_eq!(placement.in_view_margin_px, Some(251));
    assert_eq!(placement.used_margin_px, Some(307));

    // labels are 56 px apart: no overlap shift
    assert_eq!(placement.in_view_text_margin_px, Some(261));
    assert_eq!(placement.used_text_margin_px, Some(317));
}

#[rstest]
fn legacy_cycle(build_engine: SkyEngine, build_bounds: MarginBounds) {
    init_logger();

    let set = ReadingsBuilder::legacy_cycle();
    let snapshot = build_engine.aggregate(&set);

    // nominal values: presented as SNR on the 0..30 dB legend
    assert_eq!(snapshot.unit, SignalUnit::Snr);
    assert_eq!(snapshot.scale.max_dbhz, 30.0);

    assert_eq!(snapshot.in_view_avg_dbhz, Some(20.0));
    assert_eq!(snapshot.used_avg_dbhz, Some(24.0));

    let placement = build_engine.plan(&snapshot, &build_bounds).unwrap();
    assert!(placement.in_view_margin_px.is_some());
    assert!(placement.used_margin_px.is_some());
}

#[rstest]
fn legacy_cn0_shaped_cycle(build_engine: SkyEngine) {
    init_logger();

    let set = ReadingsBuilder::legacy_cn0_shaped_cycle();
    let snapshot = build_engine.aggregate(&set);

    // values above the SNR legend top: the whole cycle is
    // reclassified and presented as C/N0
    assert_eq!(snapshot.unit, SignalUnit::Cn0);
    assert_eq!(snapshot.scale.min_dbhz, 10.0);
    assert_eq!(snapshot.scale.max_dbhz, 45.0);

    assert_eq!(snapshot.in_view_avg_dbhz, Some(40.0));
    assert_eq!(snapshot.used_avg_dbhz, Some(44.0));
}

#[rstest]
fn presentation(build_engine: SkyEngine) {
    init_logger();

    let set = ReadingsBuilder::modern_cycle();
    let unit = build_engine.resolve_unit(&set);
    assert_eq!(unit, SignalUnit::Cn0);

    // 41.0 dB-Hz on the 10..45 dB-Hz legend
    let presented = build_engine.present(&set.readings[0], unit).unwrap();
    assert_eq!(presented.quantity, 41.0);
    assert!((presented.quality_ratio() - 31.0 / 35.0).abs() < 1.0E-9);

    // tracked without a signal report: nothing to present
    assert!(build_engine.present(&set.readings[4], unit).is_none());
}

#[rstest]
fn idempotence(build_engine: SkyEngine, build_bounds: MarginBounds) {
    init_logger();

    let set = ReadingsBuilder::modern_cycle();

    let first = build_engine.aggregate(&set);
    let second = build_engine.aggregate(&set);
    assert_eq!(first, second);

    assert_eq!(
        build_engine.project_all(&set),
        build_engine.project_all(&set)
    );

    assert_eq!(
        build_engine.plan(&first, &build_bounds),
        build_engine.plan(&second, &build_bounds)
    );
}
