pub mod color;
pub mod data_view;
pub mod scale;
pub mod types;
pub mod view_model;

pub use color::{ColorScale, LABEL_LUMINANCE_THRESHOLD, Rgb};
pub use data_view::{CategoricalView, CategoryColumn, ColumnMetadata, DataView, MeasureColumn};
pub use scale::{BandScale, LinearScale};
pub use types::{PrimitiveValue, Viewport};
pub use view_model::{
    DataPoint, MAX_DATA_POINTS, Ranges, SortKey, ValueRange, ViewModel, build_view_model,
};
