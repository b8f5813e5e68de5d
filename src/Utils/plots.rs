//! Chart rendering for the calculators. Unlike a desktop plotting helper that
//! writes PNG files next to the binary, the calculators embed their charts in
//! the response, so everything here draws into an in-memory RGB buffer, encodes
//! it as PNG and hands back the base64 text of the image.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::prelude::*;

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;

/// A finished chart: the base64 text of an 800x600 PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart(String);

impl RenderedChart {
    pub fn as_base64(&self) -> &str {
        &self.0
    }

    pub fn into_base64(self) -> String {
        self.0
    }
}

/// Draws one line per named series.
pub fn render_function_chart(
    caption: &str,
    x_desc: &str,
    series: &[(String, Vec<(f64, f64)>)],
) -> Result<RenderedChart, String> {
    render_series_chart(caption, x_desc, series, false)
}

/// Like [`render_function_chart`] but shades the region between the first
/// series and the x axis, for the integral calculator.
pub fn render_area_chart(
    caption: &str,
    x_desc: &str,
    series: &[(String, Vec<(f64, f64)>)],
) -> Result<RenderedChart, String> {
    render_series_chart(caption, x_desc, series, true)
}

fn render_series_chart(
    caption: &str,
    x_desc: &str,
    series: &[(String, Vec<(f64, f64)>)],
    shade_first: bool,
) -> Result<RenderedChart, String> {
    let mut buffer = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root_area =
            BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT))
                .into_drawing_area();
        root_area
            .fill(&WHITE)
            .map_err(|e| format!("failed to fill chart background: {}", e))?;

        let (x_min, x_max) =
            padded_range(series.iter().flat_map(|(_, s)| s.iter().map(|p| p.0)));
        let mut y_values: Vec<f64> =
            series.iter().flat_map(|(_, s)| s.iter().map(|p| p.1)).collect();
        if shade_first {
            // the shaded area always reaches the x axis
            y_values.push(0.0);
        }
        let (y_min, y_max) = padded_range(y_values.into_iter());

        let mut chart = ChartBuilder::on(&root_area)
            .caption(caption, ("sans-serif", 40))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| format!("failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_desc(x_desc)
            .draw()
            .map_err(|e| format!("failed to draw chart mesh: {}", e))?;

        for (idx, (varname, points)) in series.iter().enumerate() {
            if shade_first && idx == 0 {
                chart
                    .draw_series(AreaSeries::new(
                        points.iter().copied(),
                        0.0,
                        Palette99::pick(idx).mix(0.3),
                    ))
                    .map_err(|e| format!("failed to draw area series: {}", e))?;
            }
            chart
                .draw_series(LineSeries::new(points.iter().copied(), &Palette99::pick(idx)))
                .map_err(|e| format!("failed to draw series {}: {}", varname, e))?
                .label(format!(" {}", varname))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(idx))
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| format!("failed to draw chart legend: {}", e))?;

        root_area
            .present()
            .map_err(|e| format!("failed to finalize chart: {}", e))?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&buffer, CHART_WIDTH, CHART_HEIGHT, ExtendedColorType::Rgb8)
        .map_err(|e| format!("failed to encode chart as PNG: {}", e))?;
    Ok(RenderedChart(STANDARD.encode(png)))
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (-1.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let pad = 0.05 * (max - min);
    (min - pad, max + pad)
}
