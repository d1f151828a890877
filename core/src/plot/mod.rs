pub mod backend;
pub mod figure;

pub use backend::{render, PlotBackend};
pub use figure::{Bounds, DrawStyle, Figure, PlotSeries, SeriesColor};
