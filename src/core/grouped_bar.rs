use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// One category of the objectives chart: current situation versus target.
///
/// The shipped dataset keeps `current <= target` (the target is an
/// improvement goal) but the projection renders whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub name: String,
    pub current: f64,
    pub target: f64,
}

impl BarPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, current: f64, target: f64) -> Self {
        Self {
            name: name.into(),
            current,
            target,
        }
    }
}

/// Axis-aligned bar rectangle in pixel coordinates, `y` at the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Both bars of one category. The current bar always sits left of the target
/// bar; bars of different categories never interleave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGeometry {
    pub name: String,
    pub slot_center_x: f64,
    pub current: BarRect,
    pub target: BarRect,
    pub current_value: f64,
    pub target_value: f64,
}

/// Layout tuning for the grouped bar projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarLayout {
    /// Fraction of each category slot occupied by the bar pair.
    pub group_width_ratio: f64,
    /// Gap between the two bars of a pair, in pixels.
    pub pair_gap_px: f64,
}

impl Default for GroupedBarLayout {
    fn default() -> Self {
        Self {
            group_width_ratio: 0.6,
            pair_gap_px: 4.0,
        }
    }
}

impl GroupedBarLayout {
    fn validate(self) -> ChartResult<Self> {
        if !self.group_width_ratio.is_finite()
            || self.group_width_ratio <= 0.0
            || self.group_width_ratio > 1.0
        {
            return Err(ChartError::InvalidData(
                "group width ratio must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.pair_gap_px.is_finite() || self.pair_gap_px < 0.0 {
            return Err(ChartError::InvalidData(
                "pair gap must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Projected grouped bar chart: exactly two bars per input category, slots in
/// input order across the plot width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarGeometry {
    pub categories: Vec<CategoryGeometry>,
    pub baseline_y: f64,
    pub value_max: f64,
}

impl GroupedBarGeometry {
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.categories.len() * 2
    }
}

/// Projects bar categories into deterministic grouped-bar geometry.
///
/// The shared value scale spans `0..max(data)`; it is derived from the data,
/// never clamped to a fixed 100. Empty input yields empty geometry.
pub fn project_grouped_bars(
    points: &[BarPoint],
    viewport: Viewport,
    layout: GroupedBarLayout,
) -> ChartResult<GroupedBarGeometry> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let layout = layout.validate()?;

    let baseline_y = f64::from(viewport.height);
    if points.is_empty() {
        return Ok(GroupedBarGeometry {
            categories: Vec::new(),
            baseline_y,
            value_max: 0.0,
        });
    }

    let scale = LinearScale::from_values(
        points
            .iter()
            .flat_map(|point| [point.current, point.target]),
    )?;
    let (_, value_max) = scale.domain();

    let slot_width = f64::from(viewport.width) / points.len() as f64;
    let group_width = slot_width * layout.group_width_ratio;
    let bar_width = ((group_width - layout.pair_gap_px) * 0.5).max(1.0);

    let mut categories = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let slot_center_x = (index as f64 + 0.5) * slot_width;
        let current_top = scale.value_to_pixel_y(sanitize(point.current), viewport)?;
        let target_top = scale.value_to_pixel_y(sanitize(point.target), viewport)?;

        let current = BarRect {
            x: slot_center_x - bar_width - layout.pair_gap_px * 0.5,
            y: current_top,
            width: bar_width,
            height: (baseline_y - current_top).max(0.0),
        };
        let target = BarRect {
            x: slot_center_x + layout.pair_gap_px * 0.5,
            y: target_top,
            width: bar_width,
            height: (baseline_y - target_top).max(0.0),
        };

        categories.push(CategoryGeometry {
            name: point.name.clone(),
            slot_center_x,
            current,
            target,
            current_value: point.current,
            target_value: point.target,
        });
    }

    Ok(GroupedBarGeometry {
        categories,
        baseline_y,
        value_max,
    })
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
