//! Chart rendering for postpulse analysis results, built on plotters.

pub mod renderer;
pub mod types;

pub use renderer::{ChartRenderer, LineMarkerChart};
pub use types::*;
