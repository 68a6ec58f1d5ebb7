mod frame;
mod primitives;

pub use frame::BarChartFrame;
pub use primitives::{BarPrimitive, LabelPrimitive, TickPrimitive};
