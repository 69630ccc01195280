// SPDX-License-Identifier: AGPL-3.0-only

//! Log-log comparison chart of real-time factor against layer size

use crate::error::{ChartError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use rtcompare_report::{Backend, Row, LAYER_SIZES};
use std::path::Path;
use tracing::{info, warn};

/// Canvas size in pixels
pub const CHART_SIZE: (u32, u32) = (900, 500);

/// Width of the plotting area; the rest of the canvas holds the legend
const PLOT_WIDTH: i32 = 690;

/// x axis description
pub const X_DESC: &str = "Layer Size";

/// y axis description
pub const Y_DESC: &str = "Speed (real-time factor)";

const TITLE_FONT_SIZE: i32 = 24;
const LABEL_FONT_SIZE: i32 = 14;
const LEGEND_ROW_HEIGHT: i32 = 24;

/// Line colors, assigned to series in order
const COLORS: [RGBColor; 5] = [
    RGBColor(31, 119, 180),  // blue
    RGBColor(255, 127, 14),  // orange
    RGBColor(44, 160, 44),   // green
    RGBColor(214, 39, 40),   // red
    RGBColor(148, 103, 189), // purple
];

fn series_color(idx: usize) -> RGBColor {
    COLORS[idx % COLORS.len()]
}

/// Output image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG bitmap
    Png,
    /// SVG vector image
    Svg,
}

impl ImageFormat {
    /// Pick the encoding from a file extension; anything but `.svg` is PNG
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }

    /// File extension, without the dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(format!("unsupported image format: {other}")),
        }
    }
}

/// One labelled curve, index-aligned with [`LAYER_SIZES`]
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    /// Legend label
    pub label: &'a str,
    /// Speed ratio per layer size
    pub values: &'a [f64],
}

/// y axis range covering every positive value and the real-time line
///
/// Padded by a factor of two on both ends. Non-positive values are ignored
/// since they cannot sit on a log axis.
pub fn y_range(series: &[Series<'_>]) -> (f64, f64) {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold((1.0_f64, 1.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    (lo / 2.0, hi * 2.0)
}

/// Plottable `(size, ratio)` points of one series
fn points(series: &Series<'_>) -> Vec<(f64, f64)> {
    LAYER_SIZES
        .iter()
        .zip(series.values)
        .filter(|(_, v)| v.is_finite() && **v > 0.0)
        .map(|(&size, &v)| (size as f64, v))
        .collect()
}

/// Render one comparison chart to `output`
///
/// The image format follows the output extension (see [`ImageFormat`]).
///
/// # Errors
///
/// Returns error if drawing, encoding or writing the image fails.
pub fn render_chart(title: &str, output: &Path, series: &[Series<'_>]) -> Result<()> {
    for s in series {
        if s.values.len() != LAYER_SIZES.len() {
            warn!(
                "Series '{}' has {} values for {} layer sizes",
                s.label,
                s.values.len(),
                LAYER_SIZES.len()
            );
        }
    }

    match ImageFormat::from_path(output) {
        ImageFormat::Png => {
            let root = BitMapBackend::new(output, CHART_SIZE).into_drawing_area();
            draw(&root, title, series).map_err(|e| ChartError::drawing(output, e))?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
            draw(&root, title, series).map_err(|e| ChartError::drawing(output, e))?;
        }
    }

    info!("Wrote chart: {}", output.display());
    Ok(())
}

/// Render one layer's rows, labelled with the backend legend
///
/// `rows` must follow [`Backend::ALL`] order.
///
/// # Errors
///
/// Same as [`render_chart`].
pub fn render_comparison(title: &str, output: &Path, rows: &[Row]) -> Result<()> {
    if rows.len() != Backend::ALL.len() {
        warn!(
            "{} rows for {} backends; extra rows are not drawn",
            rows.len(),
            Backend::ALL.len()
        );
    }

    let series: Vec<Series<'_>> = Backend::ALL
        .iter()
        .zip(rows)
        .map(|(backend, row)| Series {
            label: backend.label(),
            values: row,
        })
        .collect();

    render_chart(title, output, &series)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    series: &[Series<'_>],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (plot_area, legend_area) = root.split_horizontally(PLOT_WIDTH);

    let x_min = LAYER_SIZES[0] as f64;
    let x_max = LAYER_SIZES[LAYER_SIZES.len() - 1] as f64;
    let (y_min, y_max) = y_range(series);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (x_min..x_max).log_scale().base(2.0),
            (y_min..y_max).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&|x| format!("{}", x.round()))
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()?;

    for (idx, s) in series.iter().enumerate() {
        let color = series_color(idx);
        chart.draw_series(LineSeries::new(points(s), color.stroke_width(2)).point_size(3))?;
    }

    // real-time threshold
    chart.draw_series(DashedLineSeries::new(
        [(x_min, 1.0), (x_max, 1.0)],
        8,
        6,
        RED.stroke_width(2),
    ))?;

    draw_legend(&legend_area, series)?;

    root.present()
}

/// Legend beside the plotting area, one swatch and label per series
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &[Series<'_>],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let top = 20 + LEGEND_ROW_HEIGHT;

    for (idx, s) in series.iter().enumerate() {
        let y = top + idx as i32 * LEGEND_ROW_HEIGHT;
        area.draw(&PathElement::new(
            vec![(8, y), (36, y)],
            series_color(idx).stroke_width(2),
        ))?;
        area.draw(&Text::new(
            s.label,
            (44, y - LABEL_FONT_SIZE / 2),
            ("sans-serif", LABEL_FONT_SIZE),
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_y_range_includes_real_time_line() {
        let fast = [10.0, 20.0, 40.0];
        let series = [Series {
            label: "fast",
            values: &fast,
        }];
        assert_eq!(y_range(&series), (0.5, 80.0));
    }

    #[test]
    fn test_y_range_ignores_zero_entries() {
        let values = [0.0, 0.25, 0.0, 3.0];
        let series = [Series {
            label: "sparse",
            values: &values,
        }];
        assert_eq!(y_range(&series), (0.125, 6.0));
    }

    #[test]
    fn test_y_range_all_zero() {
        let zeros = [0.0; 7];
        let series = [Series {
            label: "unset",
            values: &zeros,
        }];
        assert_eq!(y_range(&series), (0.5, 2.0));
        assert_eq!(y_range(&[]), (0.5, 2.0));
    }

    #[test]
    fn test_points_skip_unplottable_values() {
        let values = [1.0, 0.0, -2.0, f64::NAN, 5.0];
        let s = Series {
            label: "mixed",
            values: &values,
        };
        assert_eq!(points(&s), vec![(4.0, 1.0), (64.0, 5.0)]);
    }

    #[test]
    fn test_points_ragged_series() {
        let values = [1.0; 9];
        let s = Series {
            label: "long",
            values: &values,
        };
        assert_eq!(points(&s).len(), LAYER_SIZES.len());
    }

    #[test]
    fn test_image_format_from_path() {
        assert_eq!(ImageFormat::from_path(Path::new("plots/dense.svg")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("plots/dense.SVG")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("plots/dense.png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("plots/dense")), ImageFormat::Png);
    }

    #[test]
    fn test_image_format_from_str() {
        assert_eq!("svg".parse::<ImageFormat>(), Ok(ImageFormat::Svg));
        assert_eq!("PNG".parse::<ImageFormat>(), Ok(ImageFormat::Png));
        assert!("jpeg".parse::<ImageFormat>().is_err());
    }

    #[test]
    #[ignore] // Requires system fonts
    fn test_render_five_backends_png() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("dense.png");
        let rows: Vec<Row> = (1..=5)
            .map(|b| std::array::from_fn(|i| (b * (i + 1)) as f64))
            .collect();

        render_comparison("Dense Layer", &output, &rows).unwrap();
        assert!(output.exists());
    }

    #[test]
    #[ignore] // Requires system fonts
    fn test_render_svg() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("lstm.svg");
        let rows = [[0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0]; 5];

        render_comparison("LSTM Layer", &output, &rows).unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("LSTM Layer"));
    }

    // Fails with or without fonts: either text layout or the final write errors out
    #[test]
    fn test_unwritable_output_is_drawing_error() {
        let dir = TempDir::new().unwrap();
        let rows = [[1.0; 7]; 5];

        for name in ["dense.png", "dense.svg"] {
            let output = dir.path().join("missing").join(name);
            let err = render_comparison("Dense Layer", &output, &rows).unwrap_err();
            assert!(
                matches!(err, ChartError::Drawing { ref path, .. } if *path == output),
                "{name}: {err}"
            );
            assert!(!output.exists());
        }
    }
}
