use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::polar::PolarScale;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One horizon of the action-plan timeline chart.
///
/// `value` is a relative weight of the whole; weights need not sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub name: String,
    pub value: f64,
    pub fill: Color,
}

impl TimelinePoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, fill: Color) -> Self {
        Self {
            name: name.into(),
            value,
            fill,
        }
    }
}

/// One donut segment. Angles run clockwise, so `end_angle_deg` is always
/// below `start_angle_deg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentGeometry {
    pub name: String,
    pub value: f64,
    pub fill: Color,
    pub proportion: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Donut layout tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutLayout {
    /// Hole radius as a fraction of the outer radius.
    pub inner_radius_ratio: f64,
    /// Gap between adjacent segments, in degrees.
    pub pad_angle_deg: f64,
    /// Angle of the first segment's leading edge; segments advance clockwise.
    pub start_angle_deg: f64,
}

impl Default for DonutLayout {
    fn default() -> Self {
        Self {
            inner_radius_ratio: 2.0 / 3.0,
            pad_angle_deg: 5.0,
            start_angle_deg: 90.0,
        }
    }
}

impl DonutLayout {
    fn validate(self) -> ChartResult<Self> {
        if !self.inner_radius_ratio.is_finite()
            || !(0.0..1.0).contains(&self.inner_radius_ratio)
        {
            return Err(ChartError::InvalidData(
                "inner radius ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.pad_angle_deg.is_finite() || self.pad_angle_deg < 0.0 {
            return Err(ChartError::InvalidData(
                "pad angle must be finite and >= 0".to_owned(),
            ));
        }
        if !self.start_angle_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "start angle must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Projects timeline weights into donut segments.
///
/// Each segment's angular share is `value / sum(values)` of the sweep left
/// after per-segment padding, clockwise from the start angle in input order.
/// An empty dataset or a non-positive total yields no segments.
pub fn project_donut_segments(
    points: &[TimelinePoint],
    polar: PolarScale,
    layout: DonutLayout,
) -> ChartResult<SmallVec<[SegmentGeometry; 6]>> {
    let layout = layout.validate()?;

    let total: f64 = points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite() && *value > 0.0)
        .sum();
    if points.is_empty() || total <= 0.0 {
        return Ok(SmallVec::new());
    }

    let outer_radius = polar.radius();
    let inner_radius = outer_radius * layout.inner_radius_ratio;
    let padded_sweep = 360.0 - layout.pad_angle_deg * points.len() as f64;
    let sweep = padded_sweep.max(0.0);

    let mut segments = SmallVec::new();
    let mut cursor = layout.start_angle_deg;
    for point in points {
        let weight = if point.value.is_finite() && point.value > 0.0 {
            point.value
        } else {
            0.0
        };
        let proportion = weight / total;
        let end = cursor - sweep * proportion;

        segments.push(SegmentGeometry {
            name: point.name.clone(),
            value: point.value,
            fill: point.fill,
            proportion,
            start_angle_deg: cursor,
            end_angle_deg: end,
            inner_radius,
            outer_radius,
        });

        cursor = end - layout.pad_angle_deg;
    }

    Ok(segments)
}
