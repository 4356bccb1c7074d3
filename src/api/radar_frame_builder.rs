use tracing::debug;

use crate::api::RadarStyle;
use crate::core::{PolarScale, RadarGeometry, RadarPoint, Viewport, project_radar};
use crate::error::ChartResult;
use crate::render::{
    LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

/// Assembled radar scene: the validated frame plus the geometry that
/// produced it, kept for hover hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarScene {
    pub frame: RenderFrame,
    pub geometry: RadarGeometry,
    pub polar: PolarScale,
}

const GRID_STROKE_WIDTH: f64 = 1.0;
const LABEL_RADIUS_FRACTION: f64 = 1.12;

/// Builds the diagnosis radar frame: polygonal grid rings, one spoke per
/// axis, the filled value polygon and rim labels. The radial scale stays
/// unticked. An empty dataset produces an empty frame.
pub fn build_radar_frame(
    points: &[RadarPoint],
    viewport: Viewport,
    style: &RadarStyle,
) -> ChartResult<RadarScene> {
    debug!(points = points.len(), "assembling radar frame");

    let polar = PolarScale::fit(viewport, style.outer_radius_ratio)?;
    let geometry = project_radar(points, polar)?;
    let mut frame = RenderFrame::new(viewport);

    if geometry.is_empty() {
        return Ok(RadarScene {
            frame,
            geometry,
            polar,
        });
    }

    // Concentric polygonal grid through the axis angles.
    for level in 1..=style.grid_levels {
        let fraction = f64::from(level) / f64::from(style.grid_levels);
        let ring: Vec<(f64, f64)> = geometry
            .axes
            .iter()
            .map(|axis| polar.point_at(axis.angle_deg, fraction))
            .collect();
        if ring.len() >= 2 {
            frame
                .polygons
                .push(PolygonPrimitive::outline(ring, style.grid_color, GRID_STROKE_WIDTH));
        }
    }

    let (center_x, center_y) = polar.center();
    for axis in &geometry.axes {
        frame.lines.push(LinePrimitive::new(
            center_x,
            center_y,
            axis.tip_x,
            axis.tip_y,
            GRID_STROKE_WIDTH,
            style.grid_color,
        ));
    }

    if geometry.vertices.len() >= 2 {
        frame.polygons.push(
            PolygonPrimitive::new(geometry.vertices.to_vec(), style.fill_color)
                .with_stroke(style.stroke_color, style.stroke_width),
        );
    }

    for axis in &geometry.axes {
        let (label_x, label_y) = polar.point_at(axis.angle_deg, LABEL_RADIUS_FRACTION);
        let h_align = label_alignment(axis.angle_deg);
        frame.texts.push(TextPrimitive::new(
            axis.subject.clone(),
            label_x,
            label_y - style.label_font_size_px * 0.5,
            style.label_font_size_px,
            style.label_color,
            h_align,
        ));
    }

    frame.validate()?;
    Ok(RadarScene {
        frame,
        geometry,
        polar,
    })
}

fn label_alignment(angle_deg: f64) -> TextHAlign {
    let cos = angle_deg.to_radians().cos();
    if cos > 0.3 {
        TextHAlign::Left
    } else if cos < -0.3 {
        TextHAlign::Right
    } else {
        TextHAlign::Center
    }
}
