use serde::{Deserialize, Serialize};

use crate::core::polar::PolarScale;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One actor of the stakeholder involvement chart.
///
/// `value` is a relative involvement weight; `fill` is the ring color token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeholderPoint {
    pub name: String,
    pub value: f64,
    pub fill: Color,
}

impl StakeholderPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, fill: Color) -> Self {
        Self {
            name: name.into(),
            value,
            fill,
        }
    }
}

/// One concentric half-circle ring in pixel coordinates.
///
/// `radius` is the ring centerline; the arc sweeps clockwise from
/// `start_angle_deg` down to `end_angle_deg` against a full background track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub name: String,
    pub value: f64,
    pub fill: Color,
    pub radius: f64,
    pub thickness: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub track_end_angle_deg: f64,
    pub label_x: f64,
    pub label_y: f64,
}

impl RingGeometry {
    /// Fraction of the half circle this ring sweeps.
    #[must_use]
    pub fn sweep_fraction(&self) -> f64 {
        let track = self.start_angle_deg - self.track_end_angle_deg;
        if track == 0.0 {
            return 0.0;
        }
        (self.start_angle_deg - self.end_angle_deg) / track
    }
}

/// Radial layout tuning for the involvement chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingLayout {
    /// Innermost usable radius as a fraction of the outer radius.
    pub inner_radius_ratio: f64,
    /// Ring stroke thickness in pixels.
    pub thickness_px: f64,
    /// Gap between adjacent rings in pixels.
    pub ring_gap_px: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            inner_radius_ratio: 0.2,
            thickness_px: 20.0,
            ring_gap_px: 4.0,
        }
    }
}

impl RingLayout {
    fn validate(self) -> ChartResult<Self> {
        if !self.inner_radius_ratio.is_finite()
            || !(0.0..1.0).contains(&self.inner_radius_ratio)
        {
            return Err(ChartError::InvalidData(
                "inner radius ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        for (value, name) in [
            (self.thickness_px, "thickness_px"),
            (self.ring_gap_px, "ring_gap_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "ring layout `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

const START_ANGLE_DEG: f64 = 180.0;
const TRACK_END_ANGLE_DEG: f64 = 0.0;

/// Projects stakeholders into concentric half-circle rings.
///
/// The first input lands on the outermost ring and later inputs move inward;
/// ring order encodes priority and is preserved exactly. Sweep is
/// proportional to `value / max(value)`. Empty input yields no rings.
pub fn project_involvement_rings(
    points: &[StakeholderPoint],
    polar: PolarScale,
    layout: RingLayout,
) -> ChartResult<Vec<RingGeometry>> {
    let layout = layout.validate()?;
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let max_value = points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    let outer = polar.radius();
    let inner = outer * layout.inner_radius_ratio;
    let step = layout.thickness_px + layout.ring_gap_px;

    let mut rings = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let radius = (outer - layout.thickness_px * 0.5 - step * index as f64).max(inner);
        let fraction = if max_value > 0.0 && point.value.is_finite() {
            (point.value / max_value).max(0.0)
        } else {
            0.0
        };
        let end_angle_deg = START_ANGLE_DEG - (START_ANGLE_DEG - TRACK_END_ANGLE_DEG) * fraction;

        // Inline value label near the start of the sweep, on the centerline.
        let label_angle = START_ANGLE_DEG - 8.0;
        let (label_x, label_y) = polar.point_at(label_angle, radius / outer);

        rings.push(RingGeometry {
            name: point.name.clone(),
            value: point.value,
            fill: point.fill,
            radius,
            thickness: layout.thickness_px,
            start_angle_deg: START_ANGLE_DEG,
            end_angle_deg,
            track_end_angle_deg: TRACK_END_ANGLE_DEG,
            label_x,
            label_y,
        });
    }

    Ok(rings)
}
