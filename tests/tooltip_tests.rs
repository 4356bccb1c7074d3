use report_charts::api::{
    GroupedBarStyle, InvolvementStyle, RadarStyle, TimelineStyle, TooltipContent,
    build_grouped_bar_frame, build_involvement_frame, build_radar_frame, build_timeline_frame,
    resolve_bar_tooltip, resolve_involvement_tooltip, resolve_radar_tooltip,
    resolve_timeline_tooltip,
};
use report_charts::content;
use report_charts::core::Viewport;
use report_charts::interaction::InteractionState;

#[test]
fn radar_tooltip_resolves_nearest_axis() {
    let scene = build_radar_frame(
        &content::diagnosis_radar_data(),
        Viewport::new(400, 400),
        &RadarStyle::default(),
    )
    .expect("radar frame");

    // Straight above the center, on the first axis spoke.
    let (x, y) = scene.polar.point_at(90.0, 0.5);
    let tooltip = resolve_radar_tooltip(&scene, x, y).expect("hit");
    assert_eq!(
        tooltip,
        TooltipContent::RadarAxis {
            subject: "Finance".to_owned(),
            value: 1.0,
        }
    );
}

#[test]
fn radar_tooltip_misses_outside_the_radial_extent() {
    let scene = build_radar_frame(
        &content::diagnosis_radar_data(),
        Viewport::new(400, 400),
        &RadarStyle::default(),
    )
    .expect("radar frame");

    assert_eq!(resolve_radar_tooltip(&scene, 398.0, 398.0), None);
}

#[test]
fn bar_tooltip_reports_both_series_of_the_hovered_slot() {
    let scene = build_grouped_bar_frame(
        &content::objectives_bar_data(),
        Viewport::new(500, 448),
        &GroupedBarStyle::default(),
    )
    .expect("bar frame");

    // Second of five slots, each 100px wide on the 500px plot.
    let tooltip = resolve_bar_tooltip(&scene, 150.0, 200.0).expect("hit");
    assert_eq!(
        tooltip,
        TooltipContent::BarCategory {
            name: "Chrono.".to_owned(),
            current: 10.0,
            target: 100.0,
        }
    );
}

#[test]
fn bar_tooltip_misses_outside_the_plot() {
    let scene = build_grouped_bar_frame(
        &content::objectives_bar_data(),
        Viewport::new(500, 448),
        &GroupedBarStyle::default(),
    )
    .expect("bar frame");

    // Below the plot, in the legend footer.
    assert_eq!(resolve_bar_tooltip(&scene, 150.0, 430.0), None);
    // Right of the last slot.
    assert_eq!(resolve_bar_tooltip(&scene, 520.0, 200.0), None);
}

#[test]
fn involvement_tooltip_resolves_the_ring_band_under_the_pointer() {
    let scene = build_involvement_frame(
        &content::stakeholder_data(),
        Viewport::new(600, 300),
        &InvolvementStyle::default(),
    )
    .expect("involvement frame");

    let outermost = &scene.rings[0];
    let fraction = outermost.radius / scene.polar.radius();
    let (x, y) = scene.polar.point_at(90.0, fraction);

    let tooltip = resolve_involvement_tooltip(&scene, x, y).expect("hit");
    assert_eq!(
        tooltip,
        TooltipContent::InvolvementRing {
            name: "Service RH".to_owned(),
            value: 5.0,
        }
    );
}

#[test]
fn involvement_tooltip_misses_the_lower_half_plane() {
    let scene = build_involvement_frame(
        &content::stakeholder_data(),
        Viewport::new(600, 300),
        &InvolvementStyle::default(),
    )
    .expect("involvement frame");

    let outermost = &scene.rings[0];
    let fraction = outermost.radius / scene.polar.radius();
    let (x, y) = scene.polar.point_at(-90.0, fraction);

    assert_eq!(resolve_involvement_tooltip(&scene, x, y), None);
}

#[test]
fn timeline_tooltip_resolves_the_segment_under_the_pointer() {
    let scene = build_timeline_frame(
        &content::timeline_data(),
        Viewport::new(300, 336),
        &TimelineStyle::default(),
    )
    .expect("timeline frame");

    let segment = &scene.segments[0];
    let centerline = (segment.inner_radius + segment.outer_radius) * 0.5;
    let fraction = centerline / scene.polar.radius();
    let (x, y) = scene.polar.point_at(90.0, fraction);

    let tooltip = resolve_timeline_tooltip(&scene, x, y).expect("hit");
    assert_eq!(
        tooltip,
        TooltipContent::TimelineSegment {
            name: "Court Terme (1-2 Mois)".to_owned(),
            value: 4.0,
        }
    );
}

#[test]
fn timeline_tooltip_matches_sweeps_that_wrap_past_the_negative_axis() {
    let scene = build_timeline_frame(
        &content::timeline_data(),
        Viewport::new(300, 336),
        &TimelineStyle::default(),
    )
    .expect("timeline frame");

    // The first segment sweeps from 90 down past -90; probe near its far end.
    let segment = &scene.segments[0];
    assert!(segment.end_angle_deg < -90.0);
    let centerline = (segment.inner_radius + segment.outer_radius) * 0.5;
    let fraction = centerline / scene.polar.radius();
    let (x, y) = scene
        .polar
        .point_at(segment.end_angle_deg + 1.0, fraction);

    let tooltip = resolve_timeline_tooltip(&scene, x, y).expect("hit");
    assert!(matches!(
        tooltip,
        TooltipContent::TimelineSegment { name, .. } if name == "Court Terme (1-2 Mois)"
    ));
}

#[test]
fn hover_state_follows_the_pointer_and_clears_on_leave() {
    let scene = build_radar_frame(
        &content::diagnosis_radar_data(),
        Viewport::new(400, 400),
        &RadarStyle::default(),
    )
    .expect("radar frame");

    let mut interaction = InteractionState::default();
    assert!(!interaction.hover().visible);

    let (x, y) = scene.polar.point_at(90.0, 0.5);
    interaction.on_pointer_move(x, y);
    interaction.set_tooltip(resolve_radar_tooltip(&scene, x, y));

    assert!(interaction.hover().visible);
    assert_eq!(interaction.cursor(), (x, y));
    assert!(interaction.hover().tooltip.is_some());

    // Dead zone: the marker stays but the tooltip clears.
    interaction.on_pointer_move(398.0, 398.0);
    interaction.set_tooltip(resolve_radar_tooltip(&scene, 398.0, 398.0));
    assert!(interaction.hover().visible);
    assert_eq!(interaction.hover().tooltip, None);

    interaction.on_pointer_leave();
    assert!(!interaction.hover().visible);
}

#[test]
fn timeline_tooltip_misses_the_donut_hole() {
    let scene = build_timeline_frame(
        &content::timeline_data(),
        Viewport::new(300, 336),
        &TimelineStyle::default(),
    )
    .expect("timeline frame");

    let (center_x, center_y) = scene.polar.center();
    assert_eq!(resolve_timeline_tooltip(&scene, center_x, center_y), None);
}
