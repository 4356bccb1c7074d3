use smallvec::SmallVec;
use tracing::debug;

use crate::api::{
    LegendEntry, LegendLayoutConfig, LegendOrientation, TimelineStyle, build_legend_rows,
};
use crate::core::{PolarScale, SegmentGeometry, TimelinePoint, Viewport, project_donut_segments};
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Assembled timeline scene: the validated frame plus the projected donut
/// segments, kept for hover hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineScene {
    pub frame: RenderFrame,
    pub segments: SmallVec<[SegmentGeometry; 6]>,
    pub polar: PolarScale,
}

/// Builds the timeline donut frame: one padded ring segment per horizon,
/// clockwise in input order, plus a bottom legend with circular markers.
///
/// Weights are normalized against their own sum, so they need not sum
/// to 100. An empty dataset or zero total yields an empty ring.
pub fn build_timeline_frame(
    points: &[TimelinePoint],
    viewport: Viewport,
    style: &TimelineStyle,
) -> ChartResult<TimelineScene> {
    debug!(horizons = points.len(), "assembling timeline frame");

    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    // The ring sits above the legend strip.
    let ring_height = (f64::from(viewport.height) - style.legend_height_px).max(1.0);
    let ring_viewport = Viewport::new(viewport.width, ring_height as u32);
    let polar = PolarScale::fit(ring_viewport, style.outer_radius_ratio)?;
    let segments = project_donut_segments(points, polar, style.layout)?;

    let mut frame = RenderFrame::new(viewport);
    let (center_x, center_y) = polar.center();
    for segment in &segments {
        let thickness = segment.outer_radius - segment.inner_radius;
        if thickness <= 0.0 || segment.end_angle_deg >= segment.start_angle_deg {
            continue;
        }
        frame.arcs.push(ArcPrimitive::new(
            center_x,
            center_y,
            (segment.inner_radius + segment.outer_radius) * 0.5,
            thickness,
            segment.start_angle_deg,
            segment.end_angle_deg,
            segment.fill,
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
    for row in build_legend_rows(&entries, viewport, LegendOrientation::HorizontalBottom, config)? {
        // Round the swatch fully so the marker reads as a dot.
        frame.rects.push(
            RectPrimitive::new(
                row.swatch_x,
                row.swatch_y,
                row.swatch_size,
                row.swatch_size,
                row.swatch,
            )
            .with_corner_radius(row.swatch_size * 0.5),
        );
        frame.texts.push(TextPrimitive::new(
            row.label,
            row.label_x,
            row.label_y,
            config.font_size_px,
            style.legend_color,
            TextHAlign::Left,
        ));
    }

    frame.validate()?;
    Ok(TimelineScene {
        frame,
        segments,
        polar,
    })
}
