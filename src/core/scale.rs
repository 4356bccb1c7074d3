use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Linear value scale shared by both bar series of the objectives chart.
///
/// The vertical mapping is screen-inverted: `domain_end` lands at pixel 0,
/// `domain_start` at the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits a scale over `0..max(values)`; values never clamp to a fixed 100.
    ///
    /// A degenerate all-zero dataset falls back to a unit domain so the chart
    /// still lays out instead of erroring.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let mut max = 0.0_f64;
        for value in values {
            if value.is_finite() && value > max {
                max = value;
            }
        }
        if max <= 0.0 {
            max = 1.0;
        }
        Self::new(0.0, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn value_to_pixel_y(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok((1.0 - normalized) * f64::from(viewport.height))
    }

    pub fn pixel_y_to_value(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = 1.0 - pixel / f64::from(viewport.height);
        Ok(self.domain_start + normalized * span)
    }
}
