use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::polar::PolarScale;
use crate::error::ChartResult;

/// One axis of the organizational diagnosis radar.
///
/// `current` is the maturity score plotted against the shared `full_mark`
/// ceiling. Out-of-range scores are projected as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub subject: String,
    pub current: f64,
    pub full_mark: f64,
}

impl RadarPoint {
    #[must_use]
    pub fn new(subject: impl Into<String>, current: f64, full_mark: f64) -> Self {
        Self {
            subject: subject.into(),
            current,
            full_mark,
        }
    }

    /// Fraction of the radial extent this point reaches.
    ///
    /// A non-positive `full_mark` collapses to the center rather than
    /// poisoning downstream geometry with non-finite values.
    #[must_use]
    pub fn radial_fraction(&self) -> f64 {
        if self.full_mark > 0.0 && self.current.is_finite() {
            self.current / self.full_mark
        } else {
            0.0
        }
    }
}

/// Projected spoke for one radar axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxisGeometry {
    pub subject: String,
    pub value: f64,
    pub angle_deg: f64,
    pub tip_x: f64,
    pub tip_y: f64,
    pub vertex_x: f64,
    pub vertex_y: f64,
}

/// Deterministic radar geometry: one spoke per input point plus the closed
/// value polygon, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub axes: Vec<RadarAxisGeometry>,
    pub vertices: SmallVec<[(f64, f64); 8]>,
}

impl RadarGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

/// Projects radar points onto a polar frame.
///
/// The first axis sits at 12 o'clock and subsequent axes advance clockwise in
/// input order. An empty dataset yields empty geometry, not an error.
pub fn project_radar(points: &[RadarPoint], polar: PolarScale) -> ChartResult<RadarGeometry> {
    let mut axes = Vec::with_capacity(points.len());
    let mut vertices = SmallVec::new();

    let count = points.len();
    for (index, point) in points.iter().enumerate() {
        let angle_deg = axis_angle_deg(index, count);
        let (tip_x, tip_y) = polar.point_at(angle_deg, 1.0);
        let (vertex_x, vertex_y) = polar.point_at(angle_deg, point.radial_fraction());

        vertices.push((vertex_x, vertex_y));
        axes.push(RadarAxisGeometry {
            subject: point.subject.clone(),
            value: point.current,
            angle_deg,
            tip_x,
            tip_y,
            vertex_x,
            vertex_y,
        });
    }

    Ok(RadarGeometry { axes, vertices })
}

/// Angle of axis `index` among `count` axes, clockwise from 12 o'clock.
#[must_use]
pub fn axis_angle_deg(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 90.0;
    }
    90.0 - (index as f64) * 360.0 / (count as f64)
}
