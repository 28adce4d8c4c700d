//! Sales Insight - Online Sales CSV Analysis & Chart Report Viewer
//!
//! Loads the sales dataset, cleans it, prints the executive summary to the
//! console and opens an interactive viewer with the report charts.

mod charts;
mod data;
mod gui;
mod report;
mod stats;

use std::path::Path;

use eframe::egui;
use gui::SalesReportApp;

/// The dataset is expected in the working directory.
const SOURCE_PATH: &str = "Online Sales Data.csv";

fn main() -> eframe::Result<()> {
    let (figures, summary_text) = match analyze() {
        Ok(outputs) => outputs,
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    };

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("Sales Insight"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Sales Insight",
        options,
        Box::new(move |cc| Ok(Box::new(SalesReportApp::new(cc, figures, summary_text)))),
    )
}

/// Run the batch pipeline: load, clean, aggregate, print the summary and
/// prepare the chart figures for the viewer.
fn analyze() -> anyhow::Result<(charts::FigureSet, String)> {
    let table = data::DataLoader::load(Path::new(SOURCE_PATH))?;
    let table = data::DataCleaner::clean(table)?;
    println!("Data Loaded & Cleaned.");

    let summary = stats::StatsCalculator::summarize(&table)?;
    let summary_text = report::render(&summary);
    print!("{summary_text}");

    println!("Generating Report Charts...");
    let figures = charts::FigureSet::build(&table, &summary)?;
    Ok((figures, summary_text))
}
