//! Chart Plotter Module
//! Builds the report figures and draws the interactive ones with egui_plot.

use anyhow::Result;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};
use polars::prelude::DataFrame;

use crate::charts::renderer::{ChartImage, StaticChartRenderer};
use crate::data::{REVENUE, UNITS, UNIT_PRICE};
use crate::stats::{SalesSummary, StatsCalculator};

/// Bar fill colors for the distribution panels.
pub const UNITS_COLOR: Color32 = Color32::from_rgb(135, 206, 235); // Sky blue
pub const PRICE_COLOR: Color32 = Color32::from_rgb(144, 238, 144); // Light green
pub const REVENUE_COLOR: Color32 = Color32::from_rgb(250, 128, 114); // Salmon

/// Magma samples for the top-products bars, darkest first.
pub const MAGMA: [Color32; 5] = [
    Color32::from_rgb(0, 0, 4),
    Color32::from_rgb(81, 18, 124),
    Color32::from_rgb(183, 55, 121),
    Color32::from_rgb(252, 137, 97),
    Color32::from_rgb(252, 253, 191),
];

/// One bar of a histogram, in data coordinates.
#[derive(Clone)]
pub struct HistogramBar {
    pub center: f64,
    pub width: f64,
    pub count: usize,
}

/// A histogram panel of the distributions figure.
#[derive(Clone)]
pub struct HistogramData {
    pub title: String,
    pub x_label: String,
    pub note: String,
    pub color: Color32,
    pub currency_axis: bool,
    pub bars: Vec<HistogramBar>,
}

/// Everything the viewer needs to show the four report figures.
pub struct FigureSet {
    pub distributions: Vec<HistogramData>,
    pub top_products: Vec<(String, f64)>,
    pub region_pie: ChartImage,
    pub correlation_heatmap: ChartImage,
}

impl FigureSet {
    /// Assemble the figure set from the cleaned table and its summary.
    pub fn build(df: &DataFrame, summary: &SalesSummary) -> Result<FigureSet> {
        let units = StatsCalculator::column_values(df, UNITS)?;
        let prices = StatsCalculator::column_values(df, UNIT_PRICE)?;
        let revenue = StatsCalculator::column_values(df, REVENUE)?;

        let distributions = vec![
            HistogramData {
                title: "Distribution of Units Sold".to_string(),
                x_label: "Units Sold".to_string(),
                note: "Note: Most orders are for 1-2 items".to_string(),
                color: UNITS_COLOR,
                currency_axis: false,
                bars: ChartPlotter::histogram(&units, 10),
            },
            HistogramData {
                title: "Distribution of Unit Price".to_string(),
                x_label: "Unit Price ($)".to_string(),
                note: "Note: Most items are low-priced".to_string(),
                color: PRICE_COLOR,
                currency_axis: true,
                bars: ChartPlotter::histogram(&prices, 20),
            },
            HistogramData {
                title: "Distribution of Total Revenue".to_string(),
                x_label: "Total Revenue ($)".to_string(),
                note: "Note: Most revenue comes from small sales".to_string(),
                color: REVENUE_COLOR,
                currency_axis: true,
                bars: ChartPlotter::histogram(&revenue, 20),
            },
        ];

        Ok(FigureSet {
            distributions,
            top_products: summary.top_products.clone(),
            region_pie: StaticChartRenderer::region_pie(&summary.regional_revenue, 640, 640)?,
            correlation_heatmap: StaticChartRenderer::correlation_heatmap(
                &summary.correlation,
                640,
                520,
            )?,
        })
    }
}

/// Draws the interactive figures using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Axis tick label for currency values: `$500` below a thousand, `$2k`
    /// above.
    pub fn currency_label(value: f64) -> String {
        if value >= 1000.0 {
            format!("${:.0}k", value * 1e-3)
        } else {
            format!("${value:.0}")
        }
    }

    /// Bin `values` into `bins` equal-width buckets spanning the data
    /// range. The maximum value lands in the last bucket.
    pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBar> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return Vec::new();
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            return vec![HistogramBar {
                center: min,
                width: 1.0,
                count: finite.len(),
            }];
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for value in &finite {
            let index = (((value - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(index, count)| HistogramBar {
                center: min + (index as f64 + 0.5) * width,
                width,
                count,
            })
            .collect()
    }

    /// Draw one histogram panel: title, bars, axis caption and note.
    pub fn draw_histogram_panel(ui: &mut egui::Ui, id: &str, hist: &HistogramData) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&hist.title).strong());
        });

        let bars: Vec<Bar> = hist
            .bars
            .iter()
            .map(|bar| {
                Bar::new(bar.center, bar.count as f64)
                    .width(bar.width)
                    .fill(hist.color)
            })
            .collect();

        let mut plot = Plot::new(id.to_owned())
            .height(280.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false);
        if hist.currency_axis {
            plot = plot.x_axis_formatter(|mark, _range| Self::currency_label(mark.value));
        }
        plot.show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new(bars)));

        ui.vertical_centered(|ui| {
            ui.label(&hist.x_label);
            ui.label(RichText::new(&hist.note).italics().weak());
        });
    }

    /// Draw the horizontal top-5 products bar chart with the currency axis
    /// and product names on the y-axis.
    pub fn draw_top_products_chart(ui: &mut egui::Ui, top_products: &[(String, f64)]) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Top 5 Best-Selling Products").strong());
        });

        let count = top_products.len();
        let bars: Vec<Bar> = top_products
            .iter()
            .enumerate()
            .map(|(rank, (_, revenue))| {
                // Best seller on the top row.
                Bar::new((count - 1 - rank) as f64, *revenue)
                    .width(0.6)
                    .fill(MAGMA[rank % MAGMA.len()])
            })
            .collect();

        let names: Vec<String> = top_products.iter().map(|(name, _)| name.clone()).collect();
        Plot::new("top_products")
            .height(340.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_formatter(|mark, _range| Self::currency_label(mark.value))
            .y_axis_formatter(move |mark, _range| {
                let slot = mark.value;
                if (slot - slot.round()).abs() > 1e-6 || slot.round() < 0.0 {
                    return String::new();
                }
                let rank = names.len() as i64 - 1 - slot.round() as i64;
                usize::try_from(rank)
                    .ok()
                    .and_then(|rank| names.get(rank))
                    .cloned()
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal());
            });

        ui.vertical_centered(|ui| {
            ui.label("Total Revenue");
        });
    }
}
