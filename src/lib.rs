//! barviz-rs: bar-chart visual core for business-intelligence hosts.
//!
//! The crate covers the two halves of the update cycle — pure view-model
//! derivation from host tabular data, and the layout policy that turns the
//! view model into draw instructions — behind narrow host-capability traits.
//! Rendering glue (SVG/canvas mutation, event wiring) stays on the host side.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod settings;
pub mod telemetry;

pub use api::BarVisual;
pub use error::{VisualError, VisualResult};
