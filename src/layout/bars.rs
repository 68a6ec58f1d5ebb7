use crate::core::scale::{BandScale, LinearScale};
use crate::core::view_model::ViewModel;
use crate::host::{FontProps, TextMeasurer};
use crate::layout::LayoutTuning;
use crate::render::{BarPrimitive, LabelPrimitive};
use crate::settings::VisualSettings;

/// In-bar labels run along the bar, rotated about the top-center anchor.
pub const BAR_LABEL_ROTATION_DEG: f64 = 90.0;

/// Opacity applied to non-highlighted bars while highlight mode is active.
pub const DIMMED_OPACITY: f64 = 0.5;

pub(super) fn layout_bars(
    view_model: &ViewModel,
    band: BandScale,
    y_scale: LinearScale,
    settings: &VisualSettings,
    tuning: &LayoutTuning,
    measurer: &dyn TextMeasurer,
) -> (Vec<BarPrimitive>, Vec<LabelPrimitive>) {
    let baseline_y = y_scale.range().0;
    let font = FontProps::new(settings.chart.label_font_size);

    let mut bars = Vec::with_capacity(view_model.data_points.len());
    let mut labels = Vec::with_capacity(view_model.data_points.len());

    for (index, point) in view_model.data_points.iter().enumerate() {
        let x = band.band_start(index);
        let width = band.band_width();
        let y = y_scale.map(point.value);
        // Negative measures map below the baseline; floor the rect height
        // rather than emitting negative geometry.
        let height = (baseline_y - y).max(0.0);

        let fill_opacity = if view_model.highlights {
            if point.highlighted {
                1.0
            } else {
                DIMMED_OPACITY
            }
        } else {
            1.0
        };

        let label_width = measurer.measure(&point.category, &font).width;
        let overflow_stroke = tuning.overflow_stroke && label_width > height;

        bars.push(BarPrimitive {
            x,
            y,
            width,
            height,
            fill: point.color,
            fill_opacity,
            overflow_stroke,
        });
        labels.push(LabelPrimitive {
            text: point.category.clone(),
            x: x + width * 0.5,
            y,
            rotation_deg: BAR_LABEL_ROTATION_DEG,
            font_size_px: settings.chart.label_font_size,
            color: point.color.contrasting_label_color(),
        });
    }

    (bars, labels)
}
