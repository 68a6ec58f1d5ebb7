use tracing::{debug, trace};

use crate::core::view_model::{ViewModel, build_view_model};
use crate::core::{DataView, Viewport};
use crate::error::VisualResult;
use crate::host::{
    CategoryRowIdentityFactory, HeuristicTextMeasurer, IdentityFactory, TextMeasurer,
};
use crate::interaction::{SelectRequest, SelectResponse, selection_opacity};
use crate::layout::{LayoutTuning, layout_frame};
use crate::render::BarChartFrame;
use crate::settings::VisualSettings;

/// Update-cycle orchestration for the bar-chart visual.
///
/// Owns the injected host capabilities plus the current cycle's view model
/// and frame. Both are rebuilt from scratch on every [`BarVisual::update`];
/// nothing is cached across cycles except the capabilities themselves.
pub struct BarVisual<F: IdentityFactory, M: TextMeasurer> {
    identity_factory: F,
    text_measurer: M,
    tuning: LayoutTuning,
    settings: VisualSettings,
    view_model: ViewModel,
    frame: BarChartFrame,
}

impl BarVisual<CategoryRowIdentityFactory, HeuristicTextMeasurer> {
    /// Visual wired with the built-in deterministic capabilities; enough for
    /// tests and headless hosts.
    #[must_use]
    pub fn headless() -> Self {
        Self::new(CategoryRowIdentityFactory, HeuristicTextMeasurer::default())
    }
}

impl<F: IdentityFactory, M: TextMeasurer> BarVisual<F, M> {
    #[must_use]
    pub fn new(identity_factory: F, text_measurer: M) -> Self {
        Self {
            identity_factory,
            text_measurer,
            tuning: LayoutTuning::default(),
            settings: VisualSettings::default(),
            view_model: ViewModel::empty(),
            frame: BarChartFrame::new(Viewport::new(0, 0)),
        }
    }

    #[must_use]
    pub fn with_layout_tuning(mut self, tuning: LayoutTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Runs one host-triggered update cycle: parse settings, build the view
    /// model, lay out the frame.
    pub fn update(
        &mut self,
        data_view: &DataView,
        viewport: Viewport,
    ) -> VisualResult<&BarChartFrame> {
        self.settings = VisualSettings::parse(&data_view.metadata);

        let view_model = build_view_model(data_view, &self.settings, &self.identity_factory);
        if view_model.is_empty() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "update degraded to empty view model"
            );
        } else {
            debug!(
                points = view_model.data_points.len(),
                highlights = view_model.highlights,
                "built view model"
            );
        }

        let frame = layout_frame(
            &view_model,
            viewport,
            &self.settings,
            &self.tuning,
            &self.text_measurer,
        )?;
        trace!(
            bars = frame.bars.len(),
            ticks = frame.ticks.len(),
            "layout complete"
        );

        self.view_model = view_model;
        self.frame = frame;
        Ok(&self.frame)
    }

    /// Selection request for a clicked bar; `None` for an out-of-range index.
    #[must_use]
    pub fn on_bar_click(&self, bar_index: usize) -> Option<SelectRequest> {
        self.view_model
            .data_points
            .get(bar_index)
            .map(|point| SelectRequest::multi_toggle(point.identity))
    }

    /// Repaints bar opacities from a selection response.
    ///
    /// Responses may arrive out of request order; the last one applied wins.
    pub fn apply_select_response(&mut self, response: &SelectResponse) {
        trace!(selected = response.selected.len(), "apply selection");
        for (bar, point) in self
            .frame
            .bars
            .iter_mut()
            .zip(&self.view_model.data_points)
        {
            bar.fill_opacity = selection_opacity(point.identity, &response.selected);
        }
    }

    #[must_use]
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    #[must_use]
    pub fn frame(&self) -> &BarChartFrame {
        &self.frame
    }

    #[must_use]
    pub fn settings(&self) -> &VisualSettings {
        &self.settings
    }
}
