//! Layout policy: scales, tick-label thinning, and in-bar label placement.
//!
//! Runs against the finished view model and the current viewport, producing
//! the draw-instruction frame. Pure apart from calls into the host's text
//! measurer.

mod axis;
mod bars;

use serde::{Deserialize, Serialize};

use crate::core::scale::{BandScale, LinearScale};
use crate::core::view_model::ViewModel;
use crate::core::Viewport;
use crate::error::{VisualError, VisualResult};
use crate::host::TextMeasurer;
use crate::render::BarChartFrame;
use crate::settings::VisualSettings;

pub use bars::{BAR_LABEL_ROTATION_DEG, DIMMED_OPACITY};

/// Inter-band padding fraction of the category scale.
pub const BAND_PADDING_RATIO: f64 = 0.1;

/// Layout knobs that are policy rather than user settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutTuning {
    /// Rotation applied to shown tick labels.
    pub tick_rotation_deg: f64,
    /// Pixel budget a shown tick label is truncated to.
    pub tick_label_max_width_px: f64,
    /// Outline bars whose label overflows the bar height.
    pub overflow_stroke: bool,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            tick_rotation_deg: -35.0,
            tick_label_max_width_px: 60.0,
            overflow_stroke: true,
        }
    }
}

/// Computes the draw-instruction frame for one update cycle.
///
/// An empty view model lays out as an empty frame. The x-axis reserves its
/// configured vertical padding only while shown; the y-axis padding indents
/// the band range on the left.
pub fn layout_frame(
    view_model: &ViewModel,
    viewport: Viewport,
    settings: &VisualSettings,
    tuning: &LayoutTuning,
    measurer: &dyn TextMeasurer,
) -> VisualResult<BarChartFrame> {
    if !viewport.is_valid() {
        return Err(VisualError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let mut frame = BarChartFrame::new(viewport);
    if view_model.is_empty() {
        return Ok(frame);
    }

    let x_axis_padding = if settings.x_axis.show {
        settings.x_axis.padding
    } else {
        0.0
    };

    let band = BandScale::new(
        view_model.data_points.len(),
        settings.y_axis.padding,
        f64::from(viewport.width),
        BAND_PADDING_RATIO,
    )?;
    let y_scale = LinearScale::new(
        (0.0, view_model.ranges.measure.max),
        (
            f64::from(viewport.height) - x_axis_padding,
            settings.chart.top_margin,
        ),
    )?;

    let (bars, labels) = bars::layout_bars(view_model, band, y_scale, settings, tuning, measurer);
    frame.bars = bars;
    frame.labels = labels;

    if settings.x_axis.show {
        frame.ticks = axis::layout_ticks(view_model, band, settings, tuning, measurer);
    }

    Ok(frame)
}
