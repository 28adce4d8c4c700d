//! Chart Viewer Widget
//! Shows the four report figures, each in its own window: interactive
//! histogram/bar figures via egui_plot, pie and heatmap as textures.

use egui::{ColorImage, TextureHandle, TextureOptions};

use crate::charts::{ChartImage, ChartPlotter, FigureSet};

pub struct ChartViewer {
    figures: FigureSet,
    pie_texture: Option<TextureHandle>,
    heatmap_texture: Option<TextureHandle>,
}

impl ChartViewer {
    pub fn new(figures: FigureSet) -> Self {
        Self {
            figures,
            pie_texture: None,
            heatmap_texture: None,
        }
    }

    fn texture(ctx: &egui::Context, name: &str, image: &ChartImage) -> TextureHandle {
        let color_image = ColorImage::from_rgb([image.width, image.height], &image.rgb);
        ctx.load_texture(name, color_image, TextureOptions::LINEAR)
    }

    /// Draw all four figure windows.
    pub fn show(&mut self, ctx: &egui::Context) {
        if self.pie_texture.is_none() {
            self.pie_texture = Some(Self::texture(ctx, "region_pie", &self.figures.region_pie));
        }
        if self.heatmap_texture.is_none() {
            self.heatmap_texture = Some(Self::texture(
                ctx,
                "correlation_heatmap",
                &self.figures.correlation_heatmap,
            ));
        }

        egui::Window::new("Distributions & Revenue Analysis")
            .default_size([1100.0, 420.0])
            .show(ctx, |ui| {
                ui.columns(self.figures.distributions.len(), |columns| {
                    for (index, hist) in self.figures.distributions.iter().enumerate() {
                        ChartPlotter::draw_histogram_panel(
                            &mut columns[index],
                            &format!("distribution_{index}"),
                            hist,
                        );
                    }
                });
            });

        egui::Window::new("Top Selling Products")
            .default_size([700.0, 440.0])
            .show(ctx, |ui| {
                ChartPlotter::draw_top_products_chart(ui, &self.figures.top_products);
            });

        egui::Window::new("Regional Market Share").show(ctx, |ui| {
            if let Some(texture) = &self.pie_texture {
                ui.image(texture);
            }
        });

        egui::Window::new("Statistical Correlation").show(ctx, |ui| {
            if let Some(texture) = &self.heatmap_texture {
                ui.image(texture);
            }
        });
    }
}
