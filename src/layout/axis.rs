use crate::core::scale::BandScale;
use crate::core::view_model::ViewModel;
use crate::host::{FontProps, TextMeasurer};
use crate::layout::LayoutTuning;
use crate::render::TickPrimitive;
use crate::settings::VisualSettings;

/// One tick per band at the band center, with every other label hidden to
/// reduce crowding. Shown labels are rotated and truncated to the tuning's
/// maximum pixel width.
pub(super) fn layout_ticks(
    view_model: &ViewModel,
    band: BandScale,
    settings: &VisualSettings,
    tuning: &LayoutTuning,
    measurer: &dyn TextMeasurer,
) -> Vec<TickPrimitive> {
    let font = FontProps::new(settings.chart.label_font_size);

    view_model
        .data_points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let label = (index % 2 == 0)
                .then(|| {
                    measurer.truncate_to_fit(&point.category, &font, tuning.tick_label_max_width_px)
                })
                .filter(|label| !label.is_empty());

            TickPrimitive {
                x: band.band_center(index),
                label,
                rotation_deg: tuning.tick_rotation_deg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::layout_ticks;
    use crate::core::scale::BandScale;
    use crate::core::view_model::{DataPoint, Ranges, ValueRange, ViewModel};
    use crate::core::Rgb;
    use crate::host::{HeuristicTextMeasurer, SelectionId};
    use crate::layout::LayoutTuning;
    use crate::settings::VisualSettings;

    fn view_model_with_categories(categories: &[&str]) -> ViewModel {
        ViewModel {
            data_points: categories
                .iter()
                .enumerate()
                .map(|(row, category)| DataPoint {
                    category: (*category).to_owned(),
                    value: row as f64,
                    color: Rgb::BLACK,
                    identity: SelectionId::from_raw(row as u64),
                    highlighted: false,
                })
                .collect(),
            ranges: Ranges {
                measure: ValueRange {
                    min: 0.0,
                    max: categories.len() as f64,
                },
                color: None,
            },
            highlights: false,
        }
    }

    #[test]
    fn alternate_tick_labels_are_hidden() {
        let view_model = view_model_with_categories(&["a", "b", "c", "d"]);
        let band = BandScale::new(4, 0.0, 400.0, 0.1).expect("valid band");
        let ticks = layout_ticks(
            &view_model,
            band,
            &VisualSettings::default(),
            &LayoutTuning::default(),
            &HeuristicTextMeasurer::default(),
        );

        let shown: Vec<bool> = ticks.iter().map(|tick| tick.label.is_some()).collect();
        assert_eq!(shown, vec![true, false, true, false]);
    }

    #[test]
    fn ticks_sit_at_band_centers() {
        let view_model = view_model_with_categories(&["a", "b"]);
        let band = BandScale::new(2, 0.0, 200.0, 0.1).expect("valid band");
        let ticks = layout_ticks(
            &view_model,
            band,
            &VisualSettings::default(),
            &LayoutTuning::default(),
            &HeuristicTextMeasurer::default(),
        );

        assert!((ticks[0].x - band.band_center(0)).abs() <= 1e-9);
        assert!((ticks[1].x - band.band_center(1)).abs() <= 1e-9);
    }

    #[test]
    fn long_labels_are_truncated_to_the_width_budget() {
        let view_model = view_model_with_categories(&["extraordinarily long category"]);
        let band = BandScale::new(1, 0.0, 100.0, 0.1).expect("valid band");
        let measurer = HeuristicTextMeasurer::default();
        let tuning = LayoutTuning::default();
        let ticks = layout_ticks(
            &view_model,
            band,
            &VisualSettings::default(),
            &tuning,
            &measurer,
        );

        let label = ticks[0].label.as_deref().expect("shown label");
        assert!(label.ends_with('…'));
        assert!(label.chars().count() < "extraordinarily long category".chars().count());
    }
}
