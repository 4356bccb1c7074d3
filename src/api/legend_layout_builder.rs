use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One legend entry: a label and its swatch color, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, swatch: Color) -> Self {
        Self {
            label: label.into(),
            swatch,
        }
    }
}

/// Where the legend strip sits relative to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendOrientation {
    /// Vertical column on the right edge, vertically centered.
    VerticalRight,
    /// Horizontal row along the bottom edge, horizontally centered.
    HorizontalBottom,
}

/// Legend placement tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendLayoutConfig {
    pub swatch_size_px: f64,
    pub swatch_label_gap_px: f64,
    pub entry_gap_px: f64,
    pub edge_margin_px: f64,
    pub font_size_px: f64,
    /// Width estimate per label character, used for horizontal centering.
    pub label_char_width_px: f64,
}

impl Default for LegendLayoutConfig {
    fn default() -> Self {
        Self {
            swatch_size_px: 10.0,
            swatch_label_gap_px: 6.0,
            entry_gap_px: 16.0,
            edge_margin_px: 12.0,
            font_size_px: 12.0,
            label_char_width_px: 7.0,
        }
    }
}

impl LegendLayoutConfig {
    fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.swatch_size_px, "swatch_size_px"),
            (self.swatch_label_gap_px, "swatch_label_gap_px"),
            (self.entry_gap_px, "entry_gap_px"),
            (self.edge_margin_px, "edge_margin_px"),
            (self.font_size_px, "font_size_px"),
            (self.label_char_width_px, "label_char_width_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "legend config `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Resolved placement for one legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendRowGeometry {
    pub label: String,
    pub swatch: Color,
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub swatch_size: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// Lays out legend rows, strictly preserving entry order.
///
/// Entry order mirrors dataset order and may encode priority, so this
/// builder never sorts or de-duplicates.
pub fn build_legend_rows(
    entries: &[LegendEntry],
    viewport: Viewport,
    orientation: LegendOrientation,
    config: LegendLayoutConfig,
) -> ChartResult<Vec<LegendRowGeometry>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let config = config.validate()?;

    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows = Vec::with_capacity(entries.len());
    match orientation {
        LegendOrientation::VerticalRight => {
            let row_height = config.swatch_size_px.max(config.font_size_px) + config.entry_gap_px;
            let total_height = row_height * entries.len() as f64 - config.entry_gap_px;
            let mut y = (f64::from(viewport.height) - total_height) * 0.5;
            let longest_label = entries
                .iter()
                .map(|entry| entry.label.chars().count())
                .max()
                .unwrap_or(0) as f64;
            let swatch_x = f64::from(viewport.width)
                - config.edge_margin_px
                - longest_label * config.label_char_width_px
                - config.swatch_label_gap_px
                - config.swatch_size_px;

            for entry in entries {
                rows.push(LegendRowGeometry {
                    label: entry.label.clone(),
                    swatch: entry.swatch,
                    swatch_x,
                    swatch_y: y,
                    swatch_size: config.swatch_size_px,
                    label_x: swatch_x + config.swatch_size_px + config.swatch_label_gap_px,
                    label_y: y,
                });
                y += row_height;
            }
        }
        LegendOrientation::HorizontalBottom => {
            let entry_width = |entry: &LegendEntry| {
                config.swatch_size_px
                    + config.swatch_label_gap_px
                    + entry.label.chars().count() as f64 * config.label_char_width_px
            };
            let total_width: f64 = entries.iter().map(entry_width).sum::<f64>()
                + config.entry_gap_px * (entries.len() - 1) as f64;
            let mut x = (f64::from(viewport.width) - total_width) * 0.5;
            let y = f64::from(viewport.height) - config.edge_margin_px - config.swatch_size_px;

            for entry in entries {
                rows.push(LegendRowGeometry {
                    label: entry.label.clone(),
                    swatch: entry.swatch,
                    swatch_x: x,
                    swatch_y: y,
                    swatch_size: config.swatch_size_px,
                    label_x: x + config.swatch_size_px + config.swatch_label_gap_px,
                    label_y: y,
                });
                x += entry_width(entry) + config.entry_gap_px;
            }
        }
    }

    Ok(rows)
}
