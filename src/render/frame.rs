use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{VisualError, VisualResult};
use crate::render::{BarPrimitive, LabelPrimitive, TickPrimitive};

/// Draw-instruction set for one update cycle.
///
/// `bars` and `labels` are index-aligned with the view model's data points;
/// rendering glue consumes this frame and owns everything past it (SVG/canvas
/// mutation, event wiring).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartFrame {
    pub viewport: Viewport,
    pub bars: Vec<BarPrimitive>,
    pub labels: Vec<LabelPrimitive>,
    pub ticks: Vec<TickPrimitive>,
}

impl BarChartFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bars: Vec::new(),
            labels: Vec::new(),
            ticks: Vec::new(),
        }
    }

    pub fn validate(&self) -> VisualResult<()> {
        if !self.viewport.is_valid() {
            return Err(VisualError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for bar in &self.bars {
            bar.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        for tick in &self.ticks {
            tick.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.labels.is_empty() && self.ticks.is_empty()
    }
}
