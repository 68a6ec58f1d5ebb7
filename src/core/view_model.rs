//! Derivation of the render-ready view model from the host's raw table.
//!
//! This is the pure half of the update cycle: no side effects, no host
//! calls beyond the injected identity factory, and a hard "never fail"
//! contract — malformed input degrades to the empty view model.

use serde::{Deserialize, Serialize};

use crate::core::color::{ColorScale, Rgb};
use crate::core::data_view::{DataView, MeasureColumn};
use crate::host::{IdentityFactory, SelectionId};
use crate::settings::VisualSettings;

/// Cap on rendered bars; everything past the first 25 after ordering is cut.
pub const MAX_DATA_POINTS: usize = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category: String,
    pub value: f64,
    pub color: Rgb,
    pub identity: SelectionId,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const ZERO: ValueRange = ValueRange { min: 0.0, max: 0.0 };

    /// Min/max fold over defined, finite entries; `ZERO` when none exist.
    #[must_use]
    pub fn over_column(column: &MeasureColumn) -> Self {
        let mut bounds: Option<(f64, f64)> = None;
        for value in column.values.iter().flatten() {
            if !value.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => (*value, *value),
                Some((min, max)) => (min.min(*value), max.max(*value)),
            });
        }

        match bounds {
            Some((min, max)) => Self { min, max },
            None => Self::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ranges {
    pub measure: ValueRange,
    /// Present iff a second measure column with defined values exists.
    pub color: Option<ValueRange>,
}

/// Which data-point field governs ordering.
///
/// When a distinct color column is present the measure value orders the
/// bars; when color merely mirrors the measure, the derived color itself
/// orders them — lexicographically on its hex form, not numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Value,
    Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub data_points: Vec<DataPoint>,
    pub ranges: Ranges,
    pub highlights: bool,
}

impl ViewModel {
    /// The defined degraded result for malformed input.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data_points: Vec::new(),
            ranges: Ranges {
                measure: ValueRange::ZERO,
                color: None,
            },
            highlights: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }
}

/// Builds the view model for one update cycle.
///
/// Fails soft: if the data view lacks a categorical shape, a sourced
/// category column, or a measure column, the result is `ViewModel::empty()`.
/// Rows missing either a category label or a measure value are skipped;
/// ranges are still computed over the full measure columns.
#[must_use]
pub fn build_view_model(
    view: &DataView,
    settings: &VisualSettings,
    identities: &dyn IdentityFactory,
) -> ViewModel {
    let Some(categorical) = &view.categorical else {
        return ViewModel::empty();
    };
    let Some(category) = categorical.categories.first() else {
        return ViewModel::empty();
    };
    let Some(source) = &category.source else {
        return ViewModel::empty();
    };
    let Some(measure) = categorical.values.first() else {
        return ViewModel::empty();
    };

    let measure_range = ValueRange::over_column(measure);
    let color_column = categorical
        .values
        .get(1)
        .filter(|column| column.has_defined_values());
    let color_range = color_column.map(ValueRange::over_column);

    let scale_domain = color_range.unwrap_or(measure_range);
    let color_scale = ColorScale::new(
        scale_domain.max,
        settings.color.color_picked_min,
        settings.color.color_picked_max,
    );

    let row_count = category.values.len().max(measure.values.len());
    let mut data_points = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let Some(label) = category
            .values
            .get(row)
            .and_then(|cell| cell.as_category_label())
        else {
            continue;
        };
        let Some(value) = measure.values.get(row).copied().flatten() else {
            continue;
        };

        let color_input = color_column
            .and_then(|column| column.values.get(row).copied().flatten())
            .unwrap_or(value);

        data_points.push(DataPoint {
            category: label,
            value,
            color: color_scale.color_for(color_input),
            identity: identities.identity_for_row(source, row),
            highlighted: measure
                .highlights
                .as_ref()
                .is_some_and(|highlights| highlights.get(row).copied().flatten().is_some()),
        });
    }

    let highlights = data_points.iter().any(|point| point.highlighted);

    let sort_key = if color_range.is_some() {
        SortKey::Value
    } else {
        SortKey::Color
    };
    sort_descending(&mut data_points, sort_key);
    data_points.truncate(MAX_DATA_POINTS);

    ViewModel {
        data_points,
        ranges: Ranges {
            measure: measure_range,
            color: color_range,
        },
        highlights,
    }
}

/// Stable ascending sort by the chosen key, then an unconditional reverse.
///
/// The reverse (rather than a descending comparator) is load-bearing for
/// ties: equal-key rows come out in reversed input order.
fn sort_descending(data_points: &mut [DataPoint], key: SortKey) {
    match key {
        SortKey::Value => {
            data_points.sort_by_key(|point| ordered_float::OrderedFloat(point.value));
        }
        SortKey::Color => data_points.sort_by_key(|point| point.color),
    }
    data_points.reverse();
}
