//! Host-supplied tabular input for one update cycle.
//!
//! The host owns these structures; the builder reads them and never mutates
//! them. The shape mirrors what a categorical BI data view delivers: one
//! category column, one or two measure columns, an optional highlight
//! sequence, and a metadata blob carrying the settings-pane objects.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::types::PrimitiveValue;

/// Source descriptor of a category column.
///
/// Selection identity is bound to this descriptor plus a row index, so two
/// rows compare equal only when built from the same column source and index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub display_name: String,
    pub query_name: String,
}

impl ColumnMetadata {
    #[must_use]
    pub fn new(display_name: impl Into<String>, query_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            query_name: query_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColumn {
    pub source: Option<ColumnMetadata>,
    pub values: Vec<PrimitiveValue>,
}

impl CategoryColumn {
    #[must_use]
    pub fn new(source: ColumnMetadata, values: Vec<PrimitiveValue>) -> Self {
        Self {
            source: Some(source),
            values,
        }
    }

    /// Column without a source descriptor; the builder rejects these.
    #[must_use]
    pub fn sourceless(values: Vec<PrimitiveValue>) -> Self {
        Self {
            source: None,
            values,
        }
    }
}

/// One measure column. `None` entries model host nulls.
///
/// `highlights`, when present, runs parallel to `values`; an entry is
/// "defined" iff it is `Some`, and defined-ness alone marks the row
/// highlighted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasureColumn {
    pub values: Vec<Option<f64>>,
    #[serde(default)]
    pub highlights: Option<Vec<Option<f64>>>,
}

impl MeasureColumn {
    #[must_use]
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self {
            values,
            highlights: None,
        }
    }

    #[must_use]
    pub fn from_numbers(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(Some).collect())
    }

    #[must_use]
    pub fn with_highlights(mut self, highlights: Vec<Option<f64>>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    #[must_use]
    pub fn has_defined_values(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }
}

/// Categorical projection of the data view: category column(s) plus measure
/// column(s). Only the first category column and the first two measure
/// columns participate; hosts may deliver more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalView {
    pub categories: Vec<CategoryColumn>,
    pub values: SmallVec<[MeasureColumn; 2]>,
}

impl CategoricalView {
    #[must_use]
    pub fn new(categories: Vec<CategoryColumn>, values: SmallVec<[MeasureColumn; 2]>) -> Self {
        Self { categories, values }
    }

    /// View with one category column and one measure column.
    #[must_use]
    pub fn single_measure(category: CategoryColumn, measure: MeasureColumn) -> Self {
        Self {
            categories: vec![category],
            values: smallvec![measure],
        }
    }

    /// Appends a second measure column acting as the color column.
    #[must_use]
    pub fn with_color_column(mut self, color: MeasureColumn) -> Self {
        self.values.push(color);
        self
    }
}

/// Raw table handed in by the host on every update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataView {
    #[serde(default)]
    pub categorical: Option<CategoricalView>,
    /// Settings-pane objects blob; `Null` when the host sends none.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl DataView {
    #[must_use]
    pub fn categorical(view: CategoricalView) -> Self {
        Self {
            categorical: Some(view),
            metadata: serde_json::Value::Null,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}
