use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Polar coordinate frame centered in a viewport.
///
/// Angles are in degrees, mathematical convention: 0 points right, 90 points
/// up, positive counterclockwise. Chart sweeps run clockwise, i.e. with
/// decreasing angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarScale {
    center_x: f64,
    center_y: f64,
    radius: f64,
}

impl PolarScale {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> ChartResult<Self> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "polar center must be finite".to_owned(),
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "polar radius must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            center_x,
            center_y,
            radius,
        })
    }

    /// Centers the frame in `viewport` with an outer radius expressed as a
    /// ratio of the smaller viewport half-extent.
    pub fn fit(viewport: Viewport, outer_radius_ratio: f64) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !outer_radius_ratio.is_finite() || outer_radius_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "outer radius ratio must be finite and > 0".to_owned(),
            ));
        }

        let center_x = f64::from(viewport.width) * 0.5;
        let center_y = f64::from(viewport.height) * 0.5;
        let radius = center_x.min(center_y) * outer_radius_ratio;
        Self::new(center_x, center_y, radius)
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    /// Maps an angle and a radial fraction of the outer radius to pixel
    /// coordinates. The y axis is screen-down, so positive angles rise.
    #[must_use]
    pub fn point_at(self, angle_deg: f64, radial_fraction: f64) -> (f64, f64) {
        let theta = angle_deg.to_radians();
        let r = self.radius * radial_fraction;
        (
            self.center_x + r * theta.cos(),
            self.center_y - r * theta.sin(),
        )
    }

    /// Angle of a pixel position in this frame, normalized to `(-180, 180]`.
    #[must_use]
    pub fn angle_of(self, x: f64, y: f64) -> f64 {
        (self.center_y - y).atan2(x - self.center_x).to_degrees()
    }

    /// Distance of a pixel position from the frame center.
    #[must_use]
    pub fn distance_of(self, x: f64, y: f64) -> f64 {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        dx.hypot(dy)
    }
}
