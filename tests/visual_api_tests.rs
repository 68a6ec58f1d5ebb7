use barviz_rs::BarVisual;
use barviz_rs::core::{
    CategoricalView, CategoryColumn, ColumnMetadata, DataView, MeasureColumn, PrimitiveValue,
    Viewport,
};
use serde_json::json;

fn sales_view(labels: &[&str], measures: &[f64]) -> DataView {
    DataView::categorical(CategoricalView::single_measure(
        CategoryColumn::new(
            ColumnMetadata::new("Region", "sales.region"),
            labels.iter().map(|label| PrimitiveValue::from(*label)).collect(),
        ),
        MeasureColumn::from_numbers(measures),
    ))
}

#[test]
fn full_update_cycle_produces_the_expected_scene() {
    let mut visual = BarVisual::headless();
    let frame = visual
        .update(&sales_view(&["A", "B", "C"], &[10.0, 20.0, 5.0]), Viewport::new(1000, 600))
        .expect("update");

    assert_eq!(frame.bars.len(), 3);
    assert_eq!(frame.labels.len(), 3);
    assert_eq!(frame.ticks.len(), 3);
    assert!(frame.validate().is_ok());

    let view_model = visual.view_model();
    assert_eq!(view_model.ranges.measure.min, 5.0);
    assert_eq!(view_model.ranges.measure.max, 20.0);
    assert!(!view_model.highlights);

    // No distinct color column: the order is descending lexicographic on the
    // derived hex colors of the default ramp, which here is ascending by
    // value.
    let categories: Vec<&str> = view_model
        .data_points
        .iter()
        .map(|point| point.category.as_str())
        .collect();
    assert_eq!(categories, vec!["C", "A", "B"]);

    let hex: Vec<String> = view_model
        .data_points
        .iter()
        .map(|point| point.color.to_hex())
        .collect();
    assert_eq!(hex, vec!["#a6d4d0", "#6fcbc4", "#01b8aa"]);

    // Frame fills mirror the view-model colors, index-aligned.
    for (bar, point) in visual.frame().bars.iter().zip(&view_model.data_points) {
        assert_eq!(bar.fill, point.color);
        assert_eq!(bar.fill_opacity, 1.0);
    }
}

#[test]
fn metadata_settings_flow_into_the_cycle() {
    let mut visual = BarVisual::headless();
    let view = sales_view(&["A", "B"], &[1.0, 2.0]).with_metadata(json!({
        "xAxis": { "show": false },
        "color": { "colorPickedMin": "#000000", "colorPickedMax": "#ffffff" }
    }));

    let frame = visual
        .update(&view, Viewport::new(800, 400))
        .expect("update");

    assert!(frame.ticks.is_empty());
    assert!(!visual.settings().x_axis.show);
    // Max measure saturates the overridden ramp.
    let top = visual
        .view_model()
        .data_points
        .iter()
        .find(|point| point.value == 2.0)
        .expect("max bar");
    assert_eq!(top.color.to_hex(), "#ffffff");
}

#[test]
fn each_update_rebuilds_the_cycle_from_scratch() {
    let mut visual = BarVisual::headless();
    visual
        .update(&sales_view(&["A", "B", "C"], &[10.0, 20.0, 5.0]), Viewport::new(1000, 600))
        .expect("first update");

    let frame = visual
        .update(&sales_view(&["X"], &[4.0]), Viewport::new(500, 300))
        .expect("second update");

    assert_eq!(frame.bars.len(), 1);
    assert_eq!(frame.viewport, Viewport::new(500, 300));
    assert_eq!(visual.view_model().data_points[0].category, "X");
}

#[test]
fn malformed_input_renders_an_empty_scene() {
    let mut visual = BarVisual::headless();
    let frame = visual
        .update(&DataView::default(), Viewport::new(800, 600))
        .expect("update");

    assert!(frame.is_empty());
    assert!(visual.view_model().is_empty());
    assert!(visual.on_bar_click(0).is_none());
}
