//! Charts module - Figure data and chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, FigureSet, HistogramData};
pub use renderer::{ChartImage, StaticChartRenderer};
