use barviz_rs::core::Rgb;
use barviz_rs::settings::VisualSettings;
use serde_json::json;

#[test]
fn defaults_cover_every_field() {
    let settings = VisualSettings::default();

    assert!(settings.x_axis.show);
    assert_eq!(settings.x_axis.padding, 50.0);
    assert_eq!(settings.y_axis.padding, 50.0);
    assert_eq!(settings.chart.top_margin, 20.0);
    assert_eq!(settings.chart.label_font_size, 12.0);
    assert_eq!(settings.color.color_picked_min, Rgb::new(0xdd, 0xdd, 0xdd));
    assert_eq!(settings.color.color_picked_max, Rgb::new(0x01, 0xb8, 0xaa));
}

#[test]
fn absent_metadata_parses_to_defaults() {
    assert_eq!(
        VisualSettings::parse(&serde_json::Value::Null),
        VisualSettings::default()
    );
}

#[test]
fn partial_metadata_fills_missing_fields_from_defaults() {
    let settings = VisualSettings::parse(&json!({
        "xAxis": { "show": false },
        "chart": { "labelFontSize": 16.0 }
    }));

    assert!(!settings.x_axis.show);
    assert_eq!(settings.x_axis.padding, 50.0);
    assert_eq!(settings.chart.label_font_size, 16.0);
    assert_eq!(settings.chart.top_margin, 20.0);
}

#[test]
fn malformed_metadata_degrades_to_full_defaults() {
    let settings = VisualSettings::parse(&json!({
        "xAxis": { "show": "definitely" }
    }));

    assert_eq!(settings, VisualSettings::default());
}

#[test]
fn color_endpoints_parse_from_hex_literals() {
    let settings = VisualSettings::parse(&json!({
        "color": {
            "colorPickedMin": "#000000",
            "colorPickedMax": "#ffffff"
        }
    }));

    assert_eq!(settings.color.color_picked_min, Rgb::BLACK);
    assert_eq!(settings.color.color_picked_max, Rgb::WHITE);
}

#[test]
fn serialized_form_uses_host_facing_names() {
    let rendered = VisualSettings::default()
        .to_json_pretty()
        .expect("serialize settings");

    assert!(rendered.contains("\"xAxis\""));
    assert!(rendered.contains("\"labelFontSize\""));
    assert!(rendered.contains("\"colorPickedMin\""));
    assert!(rendered.contains("\"#dddddd\""));
}

#[test]
fn builders_override_single_groups() {
    let settings = VisualSettings::default()
        .with_x_axis_shown(false)
        .with_axis_padding(10.0, 30.0)
        .with_top_margin(0.0)
        .with_label_font_size(9.0)
        .with_color_endpoints(Rgb::BLACK, Rgb::WHITE);

    assert!(!settings.x_axis.show);
    assert_eq!(settings.x_axis.padding, 10.0);
    assert_eq!(settings.y_axis.padding, 30.0);
    assert_eq!(settings.chart.top_margin, 0.0);
    assert_eq!(settings.chart.label_font_size, 9.0);
    assert_eq!(settings.color.color_picked_max, Rgb::WHITE);
}
