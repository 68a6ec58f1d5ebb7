use serde::{Deserialize, Serialize};

use crate::core::color::Rgb;
use crate::error::{VisualError, VisualResult};

/// Draw command for one bar rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    pub fill_opacity: f64,
    /// Diagnostic outline for bars whose label overflows the bar height.
    pub overflow_stroke: bool,
}

impl BarPrimitive {
    pub fn validate(self) -> VisualResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(VisualError::InvalidData(
                "bar position must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(VisualError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(VisualError::InvalidData(
                "bar height must be finite and >= 0".to_owned(),
            ));
        }
        if !self.fill_opacity.is_finite() || !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(VisualError::InvalidData(
                "bar fill opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one in-bar category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPrimitive {
    pub text: String,
    /// Rotation anchor, the bar's top-center point.
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub font_size_px: f64,
    pub color: Rgb,
}

impl LabelPrimitive {
    pub fn validate(&self) -> VisualResult<()> {
        if self.text.is_empty() {
            return Err(VisualError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(VisualError::InvalidData(
                "label placement must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(VisualError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one x-axis tick.
///
/// `label` is `None` for ticks whose label was thinned out; the tick mark
/// itself still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPrimitive {
    pub x: f64,
    pub label: Option<String>,
    pub rotation_deg: f64,
}

impl TickPrimitive {
    pub fn validate(&self) -> VisualResult<()> {
        if !self.x.is_finite() || !self.rotation_deg.is_finite() {
            return Err(VisualError::InvalidData(
                "tick placement must be finite".to_owned(),
            ));
        }
        if self.label.as_deref() == Some("") {
            return Err(VisualError::InvalidData(
                "tick label must be absent rather than empty".to_owned(),
            ));
        }
        Ok(())
    }
}
