//! Meter indicator placement
use log::trace;

use crate::aggregator::AggregateSnapshot;
use crate::error::Error;
use crate::mapper::map_to_range;

/// Pixel geometry of the signal quality meter, supplied by the
/// layout system for the current screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginBounds {
    /// Left margin of an indicator sitting on the low end of the legend.
    pub indicator_min_px: i32,
    /// Left margin of an indicator sitting on the high end of the legend.
    pub indicator_max_px: i32,
    /// Left margin of a text label on the low end of the legend.
    pub text_min_px: i32,
    /// Left margin of a text label on the high end of the legend.
    pub text_max_px: i32,
    /// Shift applied to the lower of the two text labels when both
    /// are shown and too close: -16 dp converted to pixels by the host.
    pub text_overlap_offset_px: i32,
    /// Minimal horizontal separation between the two text labels
    /// before the overlap shift kicks in.
    pub text_separation_px: i32,
}

impl MarginBounds {
    /// Builds [MarginBounds] from the four margin extremes, with the
    /// standard overlap offsets (1 px per dp density).
    pub fn new(
        indicator_min_px: i32,
        indicator_max_px: i32,
        text_min_px: i32,
        text_max_px: i32,
    ) -> Self {
        Self {
            indicator_min_px,
            indicator_max_px,
            text_min_px,
            text_max_px,
            text_overlap_offset_px: -16,
            text_separation_px: 16,
        }
    }

    /// Copies and returns [MarginBounds] with this overlap shift,
    /// in pixels (negative shifts left).
    pub fn with_text_overlap_offset_px(&self, offset_px: i32) -> Self {
        let mut s = *self;
        s.text_overlap_offset_px = offset_px;
        s
    }

    /// Copies and returns [MarginBounds] with this minimal label
    /// separation, in pixels.
    pub fn with_text_separation_px(&self, separation_px: i32) -> Self {
        let mut s = *self;
        s.text_separation_px = separation_px;
        s
    }

    fn validate(&self) -> Result<(), Error> {
        if self.indicator_min_px == self.indicator_max_px {
            return Err(Error::DegenerateIndicatorBounds);
        }
        if self.text_min_px == self.text_max_px {
            return Err(Error::DegenerateTextBounds);
        }
        Ok(())
    }
}

/// Left margins of the two meter indicators and their text labels,
/// in pixels. None means the cohort had no average this cycle and
/// the caller must hide that indicator, not park it at zero.
/// Recomputed per cycle: animating from the previous placement to
/// this one is the renderer's business.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorPlacement {
    /// In view indicator left margin.
    pub in_view_margin_px: Option<i32>,
    /// Used in fix indicator left margin.
    pub used_margin_px: Option<i32>,
    /// In view text label left margin.
    pub in_view_text_margin_px: Option<i32>,
    /// Used in fix text label left margin.
    pub used_text_margin_px: Option<i32>,
}

/// Maps one cohort average onto a margin band. Truncating float to
/// pixel conversion, matching the legend drawing.
fn margin_px(
    avg_dbhz: f64,
    scale_min: f64,
    scale_max: f64,
    min_px: i32,
    max_px: i32,
) -> Result<i32, Error> {
    let px = map_to_range(avg_dbhz, scale_min, scale_max, min_px as f64, max_px as f64)?;
    Ok(px as i32)
}

/// Plans the placement of both meter indicators for one cycle.
///
/// Each cohort average is mapped twice over the snapshot's legend:
/// once onto the indicator margin band, once onto the text label
/// band. When both text labels land closer than
/// [MarginBounds::text_separation_px], the lower one is shifted by
/// [MarginBounds::text_overlap_offset_px]; an exact tie shifts the
/// in-view label.
pub(crate) fn plan(
    snapshot: &AggregateSnapshot,
    bounds: &MarginBounds,
) -> Result<IndicatorPlacement, Error> {
    bounds.validate()?;

    let (scale_min, scale_max) = (snapshot.scale.min_dbhz, snapshot.scale.max_dbhz);

    let mut placement = IndicatorPlacement::default();

    if let Some(avg) = snapshot.in_view_avg_dbhz {
        placement.in_view_margin_px = Some(margin_px(
            avg,
            scale_min,
            scale_max,
            bounds.indicator_min_px,
            bounds.indicator_max_px,
        )?);
        placement.in_view_text_margin_px = Some(margin_px(
            avg,
            scale_min,
            scale_max,
            bounds.text_min_px,
            bounds.text_max_px,
        )?);
    }

    if let Some(avg) = snapshot.used_avg_dbhz {
        placement.used_margin_px = Some(margin_px(
            avg,
            scale_min,
            scale_max,
            bounds.indicator_min_px,
            bounds.indicator_max_px,
        )?);
        placement.used_text_margin_px = Some(margin_px(
            avg,
            scale_min,
            scale_max,
            bounds.text_min_px,
            bounds.text_max_px,
        )?);
    }

    if let (Some(in_view), Some(used)) = (
        placement.in_view_text_margin_px,
        placement.used_text_margin_px,
    ) {
        if (in_view - used).abs() < bounds.text_separation_px {
            // shift the lower label left; exact tie shifts in-view
            if in_view <= used {
                placement.in_view_text_margin_px = Some(in_view + bounds.text_overlap_offset_px);
            } else {
                placement.used_text_margin_px = Some(used + bounds.text_overlap_offset_px);
            }
            trace!(
                "{} : text labels too close ({} / {} px), shifted by {} px",
                snapshot.epoch,
                in_view,
                used,
                bounds.text_overlap_offset_px
            );
        }
    }

    Ok(placement)
}
