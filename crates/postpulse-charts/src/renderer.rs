//! Chart rendering trait and the line+markers implementation

use crate::{ChartConfig, ColorScheme, TimeSeries};
use chrono::Duration;
use plotters::prelude::*;
use postpulse_common::{Result, Timestamp};
use std::path::Path;

/// Trait for rendering analysis series to an image file
pub trait ChartRenderer {
    /// Render the series to a file path
    fn render_to_file(
        &self,
        config: &ChartConfig,
        series: &[TimeSeries],
        path: &Path,
    ) -> Result<()>;

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),  // Blue
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
            ],
            ColorScheme::Monochrome => vec![
                RGBColor(0, 0, 0),
                RGBColor(96, 96, 96),
                RGBColor(160, 160, 160),
            ],
            ColorScheme::Custom(colors) => colors
                .iter()
                .map(|color_str| self.parse_color(color_str))
                .collect(),
        }
    }

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn background_color(&self, config: &ChartConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(255, 255, 255))
    }
}

/// Connected line with point markers, one series per color, time on the
/// x axis.
pub struct LineMarkerChart;

impl LineMarkerChart {
    pub fn new() -> Self {
        Self
    }

    /// Earliest instant across all series; the x axis is measured in hours
    /// from it
    fn origin(series: &[TimeSeries]) -> Option<Timestamp> {
        series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.at))
            .min()
    }

    /// Axis ranges in (hours-from-origin, value) space, padded
    fn data_ranges(series: &[TimeSeries], origin: Timestamp) -> (f64, f64, f64, f64) {
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for s in series {
            for point in &s.points {
                x_max = x_max.max(Self::to_hours(point.at, origin));
                y_min = y_min.min(point.value);
                y_max = y_max.max(point.value);
            }
        }

        if !x_max.is_finite() {
            return (0.0, 1.0, 0.0, 1.0);
        }

        let y_pad = ((y_max - y_min) * 0.05).max(1.0);
        (0.0, x_max.max(1.0), (y_min - y_pad).min(0.0), y_max + y_pad)
    }

    fn to_hours(at: Timestamp, origin: Timestamp) -> f64 {
        (at - origin).num_minutes() as f64 / 60.0
    }

    fn from_hours(x: f64, origin: Timestamp) -> Timestamp {
        origin + Duration::minutes((x * 60.0).round() as i64)
    }
}

impl ChartRenderer for LineMarkerChart {
    fn render_to_file(
        &self,
        config: &ChartConfig,
        series: &[TimeSeries],
        path: &Path,
    ) -> Result<()> {
        let root =
            BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let origin = Self::origin(series).unwrap_or_default();
        let (x_min, x_max, y_min, y_max) = Self::data_ranges(series, origin);

        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(config.style.margins.top as i32)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or(""))
            .x_label_formatter(&|x| {
                Self::from_hours(*x, origin).format("%m-%d %H:%M").to_string()
            })
            .draw()?;

        let palette = self.get_colors(&config.style.color_scheme);
        for (i, s) in series.iter().enumerate() {
            let color = s
                .color
                .as_deref()
                .map(|c| self.parse_color(c))
                .unwrap_or(palette[i % palette.len()]);

            let points: Vec<(f64, f64)> = s
                .points
                .iter()
                .map(|p| (Self::to_hours(p.at, origin), p.value))
                .collect();

            chart
                .draw_series(LineSeries::new(points.clone(), &color))?
                .label(&s.name)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 10, y)], color)
                });
            chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
            )?;
        }

        if series.len() > 1 {
            chart.configure_series_labels().draw()?;
        }

        root.present()?;
        tracing::info!("rendered line chart to {}", path.display());
        Ok(())
    }
}

impl Default for LineMarkerChart {
    fn default() -> Self {
        Self::new()
    }
}
