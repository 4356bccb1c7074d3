use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::api::{GroupedBarScene, InvolvementScene, RadarScene, TimelineScene};

/// Typed hover tooltip content for the four report charts.
///
/// Values are echoed exactly as shipped in the dataset; tooltips never
/// aggregate or recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TooltipContent {
    RadarAxis {
        subject: String,
        value: f64,
    },
    BarCategory {
        name: String,
        current: f64,
        target: f64,
    },
    InvolvementRing {
        name: String,
        value: f64,
    },
    TimelineSegment {
        name: String,
        value: f64,
    },
}

/// Resolves the radar axis nearest to the pointer, if the pointer is inside
/// the radar's radial extent.
#[must_use]
pub fn resolve_radar_tooltip(scene: &RadarScene, x: f64, y: f64) -> Option<TooltipContent> {
    if scene.geometry.is_empty() || scene.polar.distance_of(x, y) > scene.polar.radius() * 1.15 {
        return None;
    }

    let pointer_angle = scene.polar.angle_of(x, y);
    let nearest = scene
        .geometry
        .axes
        .iter()
        .min_by_key(|axis| OrderedFloat(angular_distance_deg(axis.angle_deg, pointer_angle)))?;

    Some(TooltipContent::RadarAxis {
        subject: nearest.subject.clone(),
        value: nearest.value,
    })
}

/// Resolves the bar category whose slot contains the pointer.
///
/// Matches by slot on the x axis so the tooltip shows both series values of
/// the hovered category, like a cursor-follow tooltip.
#[must_use]
pub fn resolve_bar_tooltip(scene: &GroupedBarScene, x: f64, y: f64) -> Option<TooltipContent> {
    if y < 0.0 || y > f64::from(scene.plot_viewport.height) {
        return None;
    }
    let count = scene.geometry.categories.len();
    if count == 0 {
        return None;
    }

    let slot_width = f64::from(scene.plot_viewport.width) / count as f64;
    let index = (x / slot_width).floor();
    if index < 0.0 || index >= count as f64 {
        return None;
    }

    let category = &scene.geometry.categories[index as usize];
    Some(TooltipContent::BarCategory {
        name: category.name.clone(),
        current: category.current_value,
        target: category.target_value,
    })
}

/// Resolves the involvement ring whose band contains the pointer.
#[must_use]
pub fn resolve_involvement_tooltip(
    scene: &InvolvementScene,
    x: f64,
    y: f64,
) -> Option<TooltipContent> {
    let distance = scene.polar.distance_of(x, y);
    let angle = scene.polar.angle_of(x, y);

    scene
        .rings
        .iter()
        .find(|ring| {
            let half = ring.thickness * 0.5;
            (ring.radius - half..=ring.radius + half).contains(&distance)
                && angle <= ring.start_angle_deg
                && angle >= ring.track_end_angle_deg
        })
        .map(|ring| TooltipContent::InvolvementRing {
            name: ring.name.clone(),
            value: ring.value,
        })
}

/// Resolves the donut segment containing the pointer.
#[must_use]
pub fn resolve_timeline_tooltip(scene: &TimelineScene, x: f64, y: f64) -> Option<TooltipContent> {
    let distance = scene.polar.distance_of(x, y);
    let pointer_angle = scene.polar.angle_of(x, y);

    scene
        .segments
        .iter()
        .find(|segment| {
            if !(segment.inner_radius..=segment.outer_radius).contains(&distance) {
                return false;
            }
            // Compare clockwise offsets from the segment's leading edge so
            // sweeps that wrap past -180 still match.
            let sweep = segment.start_angle_deg - segment.end_angle_deg;
            let offset = (segment.start_angle_deg - pointer_angle).rem_euclid(360.0);
            offset <= sweep
        })
        .map(|segment| TooltipContent::TimelineSegment {
            name: segment.name.clone(),
            value: segment.value,
        })
}

fn angular_distance_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}
