use serde::{Deserialize, Serialize};

use crate::core::{DonutLayout, GroupedBarLayout, RingLayout};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Report palette tokens, mirroring the shipped design system.
pub mod palette {
    use crate::render::Color;

    pub const BLUE_900: Color = Color::rgb8(0x1e, 0x3a, 0x8a);
    pub const ORANGE_500: Color = Color::rgb8(0xf9, 0x73, 0x16);
    pub const CYAN_500: Color = Color::rgb8(0x06, 0xb6, 0xd4);
    pub const PURPLE_600: Color = Color::rgb8(0x93, 0x33, 0xea);
    pub const SLATE_200: Color = Color::rgb8(0xe2, 0xe8, 0xf0);
    pub const SLATE_400: Color = Color::rgb8(0x94, 0xa3, 0xb8);
    pub const SLATE_500: Color = Color::rgb8(0x64, 0x74, 0x8b);
    pub const SLATE_600: Color = Color::rgb8(0x47, 0x55, 0x69);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
}

/// Visual style of the diagnosis radar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarStyle {
    pub outer_radius_ratio: f64,
    /// Concentric grid rings between center and rim; the radial scale itself
    /// stays unlabeled.
    pub grid_levels: u32,
    pub grid_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub fill_color: Color,
    pub label_color: Color,
    pub label_font_size_px: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            outer_radius_ratio: 0.8,
            grid_levels: 5,
            grid_color: palette::SLATE_200,
            stroke_color: palette::ORANGE_500,
            stroke_width: 3.0,
            fill_color: palette::ORANGE_500.with_alpha(0.4),
            label_color: palette::SLATE_600,
            label_font_size_px: 12.0,
        }
    }
}

/// Visual style of the objectives grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarStyle {
    pub layout: GroupedBarLayout,
    pub corner_radius: f64,
    pub current_fill: Color,
    pub target_fill: Color,
    pub current_label: String,
    pub target_label: String,
    pub grid_color: Color,
    pub grid_lines: u32,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Vertical room reserved below the plot for category labels and legend.
    pub footer_height_px: f64,
}

impl Default for GroupedBarStyle {
    fn default() -> Self {
        Self {
            layout: GroupedBarLayout::default(),
            corner_radius: 4.0,
            current_fill: palette::SLATE_400,
            target_fill: palette::BLUE_900,
            current_label: "Situation Actuelle".to_owned(),
            target_label: "Objectif Cible".to_owned(),
            grid_color: palette::SLATE_200,
            grid_lines: 5,
            label_color: palette::SLATE_600,
            label_font_size_px: 12.0,
            footer_height_px: 48.0,
        }
    }
}

/// Visual style of the stakeholder involvement chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvolvementStyle {
    pub layout: RingLayout,
    pub outer_radius_ratio: f64,
    pub track_color: Color,
    pub label_color: Color,
    pub label_font_size_px: f64,
    pub legend_font_size_px: f64,
}

impl Default for InvolvementStyle {
    fn default() -> Self {
        Self {
            layout: RingLayout::default(),
            outer_radius_ratio: 0.95,
            track_color: palette::SLATE_200,
            label_color: palette::WHITE,
            label_font_size_px: 10.0,
            legend_font_size_px: 12.0,
        }
    }
}

/// Visual style of the timeline donut chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineStyle {
    pub layout: DonutLayout,
    pub outer_radius_ratio: f64,
    pub legend_font_size_px: f64,
    pub legend_color: Color,
    /// Vertical room reserved below the ring for the legend strip.
    pub legend_height_px: f64,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            layout: DonutLayout::default(),
            outer_radius_ratio: 0.7,
            legend_font_size_px: 12.0,
            legend_color: palette::SLATE_600,
            legend_height_px: 36.0,
        }
    }
}

/// Aggregate style sheet for all four report charts.
///
/// Serializable so a host can persist or tweak the report look without
/// touching code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartStyleSheet {
    #[serde(default)]
    pub radar: RadarStyle,
    #[serde(default)]
    pub bars: GroupedBarStyle,
    #[serde(default)]
    pub involvement: InvolvementStyle,
    #[serde(default)]
    pub timeline: TimelineStyle,
}

impl ChartStyleSheet {
    /// Serializes the style sheet to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize styles: {e}")))
    }

    /// Deserializes a style sheet from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse styles: {e}")))
    }
}
