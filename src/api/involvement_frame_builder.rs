use tracing::debug;

use crate::api::{
    InvolvementStyle, LegendEntry, LegendLayoutConfig, LegendOrientation, build_legend_rows,
};
use crate::core::{
    PolarScale, RingGeometry, StakeholderPoint, Viewport, project_involvement_rings,
};
use crate::error::ChartResult;
use crate::render::{ArcPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Assembled involvement scene: the validated frame plus the projected
/// rings, kept for hover hit-testing. Ring order equals input order.
#[derive(Debug, Clone, PartialEq)]
pub struct InvolvementScene {
    pub frame: RenderFrame,
    pub rings: Vec<RingGeometry>,
    pub polar: PolarScale,
}

/// Builds the stakeholder involvement frame: one background track and one
/// value arc per stakeholder, sweeping the top half circle, with an inline
/// value label per ring and a vertical legend on the right.
///
/// The first input draws the outermost ring; legend rows follow the same
/// order, since the order encodes priority.
pub fn build_involvement_frame(
    points: &[StakeholderPoint],
    viewport: Viewport,
    style: &InvolvementStyle,
) -> ChartResult<InvolvementScene> {
    debug!(stakeholders = points.len(), "assembling involvement frame");

    let polar = PolarScale::fit(viewport, style.outer_radius_ratio)?;
    let rings = project_involvement_rings(points, polar, style.layout)?;
    let mut frame = RenderFrame::new(viewport);

    let (center_x, center_y) = polar.center();
    for ring in &rings {
        frame.arcs.push(ArcPrimitive::new(
            center_x,
            center_y,
            ring.radius,
            ring.thickness,
            ring.start_angle_deg,
            ring.track_end_angle_deg,
            style.track_color,
        ));
        if ring.end_angle_deg < ring.start_angle_deg {
            frame.arcs.push(ArcPrimitive::new(
                center_x,
                center_y,
                ring.radius,
                ring.thickness,
                ring.start_angle_deg,
                ring.end_angle_deg,
                ring.fill,
            ));
        }

        frame.texts.push(TextPrimitive::new(
            format_value(ring.value),
            ring.label_x,
            ring.label_y - style.label_font_size_px * 0.5,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    let entries: Vec<LegendEntry> = points
        .iter()
        .map(|point| LegendEntry::new(point.name.clone(), point.fill))
        .collect();
    let config = LegendLayoutConfig {
        font_size_px: style.legend_font_size_px,
        ..LegendLayoutConfig::default()
    };
    for row in build_legend_rows(&entries, viewport, LegendOrientation::VerticalRight, config)? {
        frame.rects.push(RectPrimitive::new(
            row.swatch_x,
            row.swatch_y,
            row.swatch_size,
            row.swatch_size,
            row.swatch,
        ));
        frame.texts.push(TextPrimitive::new(
            row.label,
            row.label_x,
            row.label_y,
            config.font_size_px,
            crate::api::style::palette::SLATE_600,
            TextHAlign::Left,
        ));
    }

    frame.validate()?;
    Ok(InvolvementScene {
        frame,
        rings,
        polar,
    })
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
