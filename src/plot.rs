//! Optional PNG rendering of the raw and fitted characterization data.
//!
//! Side artifact for visual inspection of the per-window fits; the numeric
//! pipeline never depends on this module.
use crate::chardata::CharData;
use crate::fitting::curve_fit::window_bounds;
use crate::fitting::fitstruct::FittedLine;
use crate::fitting::segmenting::{fit_window, window_samples};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::iter::zip;
use std::path::Path;
use thiserror::Error;

const PLOT_WIDTH: u32 = 800;
const PLOT_HEIGHT: u32 = 600;
const PLOT_MARGIN: i32 = 40;

const GRID_COLOR: Rgba<u8> = Rgba([200u8, 200u8, 200u8, 255u8]);
const AXIS_COLOR: Rgba<u8> = Rgba([0u8, 0u8, 0u8, 255u8]);
const WINDOW_COLORS: [Rgba<u8>; 4] = [
    Rgba([0u8, 100u8, 255u8, 255u8]),
    Rgba([255u8, 100u8, 0u8, 255u8]),
    Rgba([0u8, 160u8, 60u8, 255u8]),
    Rgba([160u8, 0u8, 200u8, 255u8]),
];

#[derive(Error, Debug)]
pub enum PlotError {
    /// Characterization data has nothing to plot
    #[error("{0}")]
    NoData(String),

    /// Unable to encode or write the plot image
    #[error("{0}")]
    Image(#[from] image::ImageError),
}

/// Data-space extents of the plot: x is output power in dBm, y is the
/// power-level setting.
struct PlotAxes {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlotAxes {
    fn from_data(data: &CharData) -> Result<PlotAxes, PlotError> {
        if data.output_powers.is_empty() {
            Err(PlotError::NoData(
                "No measurements to plot".to_string(),
            ))?;
        }
        let mut axes = PlotAxes {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for (output, level) in zip(&data.output_powers, &data.power_levels) {
            axes.x_min = axes.x_min.min(*output);
            axes.x_max = axes.x_max.max(*output);
            axes.y_min = axes.y_min.min(*level);
            axes.y_max = axes.y_max.max(*level);
        }
        // a flat extent would collapse the projection
        if axes.x_min == axes.x_max {
            axes.x_min -= 1.0;
            axes.x_max += 1.0;
        }
        if axes.y_min == axes.y_max {
            axes.y_min -= 1.0;
            axes.y_max += 1.0;
        }
        Ok(axes)
    }

    fn to_pixel(&self, output: f64, level: f64) -> (i32, i32) {
        let span_x = (PLOT_WIDTH as i32 - 2 * PLOT_MARGIN) as f64;
        let span_y = (PLOT_HEIGHT as i32 - 2 * PLOT_MARGIN) as f64;
        let x = PLOT_MARGIN as f64 + (output - self.x_min) / (self.x_max - self.x_min) * span_x;
        let y = PLOT_HEIGHT as f64
            - PLOT_MARGIN as f64
            - (level - self.y_min) / (self.y_max - self.y_min) * span_y;
        (x as i32, y as i32)
    }
}

/// Renders each window's selected samples and fitted line into a PNG at
/// `path`, one color per window.
///
/// # Errors
/// Will return `Err` if the dataset is empty or the image cannot be written.
pub fn render_fit_plot<P: AsRef<Path>>(
    data: &CharData,
    increment: f64,
    path: P,
) -> Result<(), PlotError> {
    let axes = PlotAxes::from_data(data)?;
    let mut img: RgbaImage = ImageBuffer::from_fn(PLOT_WIDTH, PLOT_HEIGHT, |_, _| {
        Rgba([255u8, 255u8, 255u8, 255u8])
    });
    draw_frame(&mut img);

    for (i, &(lo, hi)) in window_bounds(increment).iter().enumerate() {
        let color = WINDOW_COLORS[i % WINDOW_COLORS.len()];
        let (window_levels, window_outputs) =
            window_samples(&data.power_levels, &data.output_powers, lo, hi);
        if window_outputs.is_empty() {
            continue;
        }
        for (level, output) in zip(&window_levels, &window_outputs) {
            let (x, y) = axes.to_pixel(*output, *level);
            draw_marker(&mut img, x, y, color);
        }
        let fit = fit_window(&data.power_levels, &data.output_powers, lo, hi);
        draw_fit_line(&mut img, &axes, &window_outputs, fit.line, color);
    }

    img.save(path)?;
    Ok(())
}

fn draw_frame(img: &mut RgbaImage) {
    let right = PLOT_WIDTH as i32 - PLOT_MARGIN;
    let bottom = PLOT_HEIGHT as i32 - PLOT_MARGIN;
    for i in 0..=10 {
        let x = PLOT_MARGIN + i * (right - PLOT_MARGIN) / 10;
        for y in PLOT_MARGIN..=bottom {
            put_pixel(img, x, y, GRID_COLOR);
        }
        let y = PLOT_MARGIN + i * (bottom - PLOT_MARGIN) / 10;
        for x in PLOT_MARGIN..=right {
            put_pixel(img, x, y, GRID_COLOR);
        }
    }
    for y in PLOT_MARGIN..=bottom {
        put_pixel(img, PLOT_MARGIN, y, AXIS_COLOR);
    }
    for x in PLOT_MARGIN..=right {
        put_pixel(img, x, bottom, AXIS_COLOR);
    }
}

fn draw_marker(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            put_pixel(img, x + dx, y + dy, color);
        }
    }
}

fn draw_fit_line(
    img: &mut RgbaImage,
    axes: &PlotAxes,
    window_outputs: &[f64],
    line: FittedLine,
    color: Rgba<u8>,
) {
    if !line.slope.is_finite() || !line.intercept.is_finite() {
        return;
    }
    let lo = window_outputs.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let hi = window_outputs
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let (x_lo, _) = axes.to_pixel(lo, 0.0);
    let (x_hi, _) = axes.to_pixel(hi, 0.0);
    let steps = (x_hi - x_lo).max(1);
    for step in 0..=steps {
        let output = lo + (hi - lo) * step as f64 / steps as f64;
        let (x, y) = axes.to_pixel(output, line.slope * output + line.intercept);
        put_pixel(img, x, y, color);
    }
}

fn put_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 {
        if let Some(pixel) = img.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = color;
        }
    }
}
