//! Chart rendering module
//!
//! Renders the run's sample sequence as a PNG line chart: time on the
//! X axis with `HH:MM` labels, price in USD on the Y axis with plain
//! thousands-separated labels.

use crate::config::ChartConfig;
use crate::store::Sample;
use chrono::{Duration, NaiveDateTime};
use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Minutes between X axis tick labels
const X_TICK_MINUTES: i64 = 3;

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),
}

/// Whether a chart file was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// Nothing to plot; no file was written
    Skipped,
}

/// Renders the sample sequence to a PNG file
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Render the sequence, overwriting any prior chart file.
    ///
    /// An empty sequence is a deterministic skip. A single sample still
    /// renders; both axis ranges are padded so the coordinate system
    /// never collapses to a point.
    pub fn render(&self, samples: &[Sample]) -> Result<RenderOutcome, RenderError> {
        if samples.is_empty() {
            tracing::warn!("No samples captured, skipping chart");
            return Ok(RenderOutcome::Skipped);
        }

        let points: Vec<(NaiveDateTime, f64)> = samples
            .iter()
            .map(|s| (s.time, s.price.to_f64().unwrap_or(0.0)))
            .collect();

        let (x_min, x_max) = Self::time_range(&points);
        let (y_min, y_max) = Self::price_range(&points);
        let x_labels = ((x_max - x_min).num_minutes() / X_TICK_MINUTES + 1).clamp(2, 21) as usize;

        // Backend is scoped so the drawing surface is released even when
        // a draw call fails partway through.
        {
            let root = BitMapBackend::new(
                &self.config.output_file,
                (self.config.width, self.config.height),
            )
            .into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            let mut chart = ChartBuilder::on(&root)
                .caption("BTC-USD Spot Price", ("sans-serif", 40.0).into_font())
                .margin(15)
                .x_label_area_size(60)
                .y_label_area_size(80)
                .build_cartesian_2d(RangedDateTime::from(x_min..x_max), y_min..y_max)
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            chart
                .configure_mesh()
                .x_desc("Time")
                .y_desc("Price (USD)")
                .x_labels(x_labels)
                .x_label_formatter(&|t: &NaiveDateTime| t.format("%H:%M").to_string())
                .x_label_style(
                    ("sans-serif", 14)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .y_label_formatter(&|p: &f64| format_thousands(*p))
                .draw()
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            chart
                .draw_series(LineSeries::new(points.iter().cloned(), &BLACK))
                .map_err(|e| RenderError::Draw(e.to_string()))?;
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|(t, p)| Circle::new((*t, *p), 3, BLACK.filled())),
                )
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            root.present()
                .map_err(|e| RenderError::Draw(e.to_string()))?;
        }

        tracing::info!(
            "Chart created and saved to {}",
            self.config.output_file.display()
        );

        Ok(RenderOutcome::Rendered)
    }

    /// X range, widened by a minute on each side for a lone sample
    fn time_range(points: &[(NaiveDateTime, f64)]) -> (NaiveDateTime, NaiveDateTime) {
        let first = points[0].0;
        let last = points[points.len() - 1].0;
        if first == last {
            (first - Duration::minutes(1), last + Duration::minutes(1))
        } else {
            (first, last)
        }
    }

    /// Y range with 10% padding, floored at zero
    fn price_range(points: &[(NaiveDateTime, f64)]) -> (f64, f64) {
        let min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let padding = (max - min).max(1e-8) * 0.1;
        ((min - padding).max(0.0), max + padding)
    }
}

/// Format a price label as a plain integer with thousands separators
fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
