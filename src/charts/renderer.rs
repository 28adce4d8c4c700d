//! Static Chart Renderer
//! Rasterizes the pie chart and the correlation heatmap with plotters; the
//! viewer shows the resulting buffers as textures.

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::stats::CorrelationMatrix;

/// Pastel palette for pie slices, cycled when there are more regions.
const PASTEL: [RGBColor; 10] = [
    RGBColor(161, 201, 244),
    RGBColor(255, 180, 130),
    RGBColor(141, 229, 161),
    RGBColor(255, 159, 160),
    RGBColor(208, 187, 255),
    RGBColor(222, 187, 155),
    RGBColor(250, 176, 228),
    RGBColor(207, 207, 207),
    RGBColor(255, 254, 163),
    RGBColor(185, 231, 245),
];

/// Heatmap ramp endpoints (blue, neutral, red).
const COOL: (u8, u8, u8) = (59, 76, 192);
const NEUTRAL: (u8, u8, u8) = (221, 221, 221);
const WARM: (u8, u8, u8) = (180, 4, 38);

/// An RGB chart raster.
pub struct ChartImage {
    pub width: usize,
    pub height: usize,
    pub rgb: Vec<u8>,
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Pie chart of revenue share per region, with percentage labels.
    pub fn region_pie(regional: &[(String, f64)], width: u32, height: u32) -> Result<ChartImage> {
        let mut rgb = vec![255u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;
            let root = root.titled("Share of Revenue by Region", ("sans-serif", 24))?;

            let (plot_width, plot_height) = root.dim_in_pixel();
            let center = (plot_width as i32 / 2, plot_height as i32 / 2);
            let radius = f64::from(plot_width.min(plot_height)) * 0.32;
            let sizes: Vec<f64> = regional.iter().map(|(_, revenue)| *revenue).collect();
            let labels: Vec<String> = regional.iter().map(|(name, _)| name.clone()).collect();
            let colors: Vec<RGBColor> = (0..regional.len())
                .map(|i| PASTEL[i % PASTEL.len()])
                .collect();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(140.0);
            pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
            pie.percentages(("sans-serif", 15).into_font().color(&BLACK));
            root.draw(&pie)?;
            root.present()?;
        }
        Ok(ChartImage {
            width: width as usize,
            height: height as usize,
            rgb,
        })
    }

    /// Annotated heatmap of the correlation matrix.
    pub fn correlation_heatmap(
        matrix: &CorrelationMatrix,
        width: u32,
        height: u32,
    ) -> Result<ChartImage> {
        let mut rgb = vec![255u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;
            let root = root.titled(
                "Correlation Matrix: Darker Red = Stronger Relationship",
                ("sans-serif", 18),
            )?;

            let size = matrix.columns.len();
            if size > 0 {
                let (plot_width, plot_height) = root.dim_in_pixel();
                let left = 140i32;
                let top = 10i32;
                let right = plot_width as i32 - 10;
                let bottom = plot_height as i32 - 40;
                let cell_w = (right - left) / size as i32;
                let cell_h = (bottom - top) / size as i32;

                for row in 0..size {
                    for col in 0..size {
                        let value = matrix.values[row][col];
                        let x0 = left + col as i32 * cell_w;
                        let y0 = top + row as i32 * cell_h;
                        root.draw(&Rectangle::new(
                            [(x0, y0), (x0 + cell_w, y0 + cell_h)],
                            Self::heat_color(value).filled(),
                        ))?;

                        let ink = if value.abs() > 0.6 { WHITE } else { BLACK };
                        root.draw(&Text::new(
                            format!("{value:.2}"),
                            (x0 + cell_w / 2, y0 + cell_h / 2),
                            ("sans-serif", 15)
                                .into_font()
                                .color(&ink)
                                .pos(Pos::new(HPos::Center, VPos::Center)),
                        ))?;
                    }
                }

                let label_font = ("sans-serif", 14).into_font().color(&BLACK);
                for (index, name) in matrix.columns.iter().enumerate() {
                    let x_mid = left + index as i32 * cell_w + cell_w / 2;
                    root.draw(&Text::new(
                        name.clone(),
                        (x_mid, bottom + 6),
                        label_font.clone().pos(Pos::new(HPos::Center, VPos::Top)),
                    ))?;

                    let y_mid = top + index as i32 * cell_h + cell_h / 2;
                    root.draw(&Text::new(
                        name.clone(),
                        (left - 6, y_mid),
                        label_font.clone().pos(Pos::new(HPos::Right, VPos::Center)),
                    ))?;
                }
            }
            root.present()?;
        }
        Ok(ChartImage {
            width: width as usize,
            height: height as usize,
            rgb,
        })
    }

    /// Map a correlation in `[-1, 1]` onto the blue-white-red ramp.
    fn heat_color(value: f64) -> RGBColor {
        let v = value.clamp(-1.0, 1.0);
        let blend = |a: u8, b: u8, t: f64| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8;
        if v < 0.0 {
            let t = v + 1.0;
            RGBColor(
                blend(COOL.0, NEUTRAL.0, t),
                blend(COOL.1, NEUTRAL.1, t),
                blend(COOL.2, NEUTRAL.2, t),
            )
        } else {
            RGBColor(
                blend(NEUTRAL.0, WARM.0, v),
                blend(NEUTRAL.1, WARM.1, v),
                blend(NEUTRAL.2, WARM.2, v),
            )
        }
    }
}
