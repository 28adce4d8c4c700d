//! Sales Insight Main Application
//! Main window with the executive summary and the chart report windows.

use crate::charts::FigureSet;
use crate::gui::ChartViewer;

/// Main application window.
pub struct SalesReportApp {
    chart_viewer: ChartViewer,
    summary_text: String,
}

impl SalesReportApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        figures: FigureSet,
        summary_text: String,
    ) -> Self {
        Self {
            chart_viewer: ChartViewer::new(figures),
            summary_text,
        }
    }
}

impl eframe::App for SalesReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sales Insight");
            ui.label("Executive summary and report charts for the online sales dataset.");
            ui.separator();
            ui.monospace(&self.summary_text);
        });

        self.chart_viewer.show(ctx);
    }
}
