//! Immutable per-update settings parsed from the host's settings-pane
//! metadata.
//!
//! Parsing is total: absent groups or fields fall back to defaults, and a
//! malformed blob degrades to the full default table. The core reads the
//! parsed value and never mutates it.

use serde::{Deserialize, Serialize};

use crate::core::color::Rgb;
use crate::error::{VisualError, VisualResult};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSettings {
    #[serde(default)]
    pub x_axis: XAxisSettings,
    #[serde(default)]
    pub y_axis: YAxisSettings,
    #[serde(default)]
    pub chart: ChartSettings,
    #[serde(default)]
    pub color: DataColorSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisSettings {
    #[serde(default = "default_axis_show")]
    pub show: bool,
    #[serde(default = "default_axis_padding")]
    pub padding: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisSettings {
    #[serde(default = "default_axis_padding")]
    pub padding: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSettings {
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataColorSettings {
    #[serde(default = "default_color_picked_min")]
    pub color_picked_min: Rgb,
    #[serde(default = "default_color_picked_max")]
    pub color_picked_max: Rgb,
}

impl Default for XAxisSettings {
    fn default() -> Self {
        Self {
            show: default_axis_show(),
            padding: default_axis_padding(),
        }
    }
}

impl Default for YAxisSettings {
    fn default() -> Self {
        Self {
            padding: default_axis_padding(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            top_margin: default_top_margin(),
            label_font_size: default_label_font_size(),
        }
    }
}

impl Default for DataColorSettings {
    fn default() -> Self {
        Self {
            color_picked_min: default_color_picked_min(),
            color_picked_max: default_color_picked_max(),
        }
    }
}

impl VisualSettings {
    /// Parses the host metadata blob, falling back to defaults for anything
    /// absent or malformed.
    #[must_use]
    pub fn parse(metadata: &serde_json::Value) -> Self {
        serde_json::from_value(metadata.clone()).unwrap_or_default()
    }

    /// Sets x-axis visibility.
    #[must_use]
    pub fn with_x_axis_shown(mut self, show: bool) -> Self {
        self.x_axis.show = show;
        self
    }

    /// Sets both axis paddings.
    #[must_use]
    pub fn with_axis_padding(mut self, x_padding: f64, y_padding: f64) -> Self {
        self.x_axis.padding = x_padding;
        self.y_axis.padding = y_padding;
        self
    }

    /// Sets the top margin above the tallest bar.
    #[must_use]
    pub fn with_top_margin(mut self, top_margin: f64) -> Self {
        self.chart.top_margin = top_margin;
        self
    }

    /// Sets the label font size used for ticks and in-bar labels.
    #[must_use]
    pub fn with_label_font_size(mut self, size_px: f64) -> Self {
        self.chart.label_font_size = size_px;
        self
    }

    /// Sets the color ramp endpoints.
    #[must_use]
    pub fn with_color_endpoints(mut self, min: Rgb, max: Rgb) -> Self {
        self.color.color_picked_min = min;
        self.color.color_picked_max = max;
        self
    }

    /// Serializes settings to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> VisualResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| VisualError::InvalidData(format!("failed to serialize settings: {e}")))
    }
}

fn default_axis_show() -> bool {
    true
}

fn default_axis_padding() -> f64 {
    50.0
}

fn default_top_margin() -> f64 {
    20.0
}

fn default_label_font_size() -> f64 {
    12.0
}

fn default_color_picked_min() -> Rgb {
    Rgb::new(0xdd, 0xdd, 0xdd)
}

fn default_color_picked_max() -> Rgb {
    Rgb::new(0x01, 0xb8, 0xaa)
}
